use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::decode::{decode, decode_verbose, DecodeResult};
use shiftcrack::files::FileStore;
use shiftcrack::history::History;
use shiftcrack::report;
use shiftcrack::stats::analyze;
use shiftcrack::util::{err, get_writer, parse_count, preview, read_all, Error, Result};
use std::io::Write;
use std::path::Path;
use std::thread;

struct Input {
    name: String,
    text: String,
}

/// Read one input. "-" is stdin; files are read through the store so they get logged.
fn read_input(store: &FileStore, name: &str) -> Result<Input> {
    let text = if name == "-" {
        read_all(name)?.trim().to_string()
    } else {
        store.read_ciphertext(Some(Path::new(name)))?.0
    };
    if text.is_empty() {
        return err!("Nothing to decrypt in '{}'", name);
    }
    Ok(Input { name: name.to_string(), text })
}

/// Decode every input, each on its own thread. Results are in input order.
fn decode_all(inputs: &[Input], verbose: bool, min_matches: usize) -> Result<Vec<DecodeResult>> {
    thread::scope(|s| {
        let workers: Vec<_> = inputs
            .iter()
            .map(|x| {
                s.spawn(move || {
                    if verbose {
                        decode_verbose(&x.text, min_matches)
                    } else {
                        decode(&x.text)
                    }
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().map_err(|_| Error::Error("Decode thread panicked".to_string())))
            .collect()
    })
}

#[derive(Default)]
struct Options {
    top: usize,
    chart: bool,
    save: bool,
    name: Option<String>,
    analyze: bool,
    report: bool,
    session: bool,
    history: bool,
}

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("Find the shift of Caesar ciphered text.", args::FileCount::Many);
    const A: [ArgSpec; 9] = [
        arg! {"top", "t", "Number", "Show this many ranked attempts."},
        arg! {"chart", "c", "", "Chart the score of every shift."},
        arg! {"save", "s", "", "Save the plaintext under the data directory."},
        arg! {"name", "n", "FileName", "File name for --save."},
        arg! {"analyze", "a", "", "Show statistics about the plaintext."},
        arg! {"report", "r", "", "Save statistics about the plaintext as JSON."},
        arg! {"session", "S", "", "Save ciphertext, plaintext and statistics as JSON."},
        arg! {"stored", "", "", "Decode the stored sample ciphertext."},
        arg! {"no-history", "", "", "Don't add to the decode history."},
    ];
    let (args, mut files) = args::parse(&prog, &A, argv, settings)?;

    let mut opt = Options { history: true, ..Options::default() };
    let mut stored = false;
    for x in args {
        if x.name == "top" {
            opt.top = parse_count(&x.value, "--top")?;
        } else if x.name == "chart" {
            opt.chart = true;
        } else if x.name == "save" {
            opt.save = true;
        } else if x.name == "name" {
            opt.name = Some(x.value);
        } else if x.name == "analyze" {
            opt.analyze = true;
        } else if x.name == "report" {
            opt.report = true;
        } else if x.name == "session" {
            opt.session = true;
        } else if x.name == "stored" {
            stored = true;
        } else if x.name == "no-history" {
            opt.history = false;
        } else {
            unreachable!();
        }
    }

    let store = settings.store()?;
    let mut inputs = Vec::new();
    if stored {
        let (text, path) = store.read_ciphertext(None)?;
        inputs.push(Input { name: path.display().to_string(), text });
        files.retain(|f| f != "-");
    }
    for f in &files {
        inputs.push(read_input(&store, f)?);
    }

    let results = decode_all(&inputs, settings.verbose, settings.min_matches)?;

    let mut w = get_writer("-")?;
    let mut history = History::new();
    let mut failed = 0;
    for (input, result) in inputs.iter().zip(&results) {
        if inputs.len() > 1 {
            writeln!(w, "==> {} <==", input.name)?;
        }
        if !show(&mut w, &store, &mut history, &opt, input, result)? {
            failed += 1;
        }
    }
    w.flush()?;
    if failed > 0 {
        return err!("Could not decrypt {} of {} inputs", failed, inputs.len());
    }
    Ok(())
}

/// Report on one result. Returns false if no shift was found.
fn show(
    w: &mut impl Write,
    store: &FileStore,
    history: &mut History,
    opt: &Options,
    input: &Input,
    result: &DecodeResult,
) -> Result<bool> {
    if opt.top > 0 {
        for (i, a) in result.attempts.iter().take(opt.top).enumerate() {
            writeln!(
                w,
                "{:2}. shift {:2}  score {:.2}  {}",
                i + 1,
                a.shift,
                a.score,
                preview(&a.plaintext, 40)
            )?;
        }
    }
    if opt.chart {
        w.write_all(report::shift_chart(result).as_bytes())?;
    }
    let (Some(shift), Some(plain)) = (result.best_shift, &result.best_plaintext) else {
        writeln!(w, "Could not decrypt")?;
        return Ok(false);
    };
    writeln!(w, "Shift: {}  Score: {:.2}", shift, result.best_score())?;
    writeln!(w, "{}", plain)?;

    if opt.history {
        if let Some(e) = history.record(&input.text, result) {
            if let Err(e) = store.append_history(e) {
                tracing::warn!("can't save history : {e}");
            }
        }
    }
    if opt.save {
        let path = store.save_decrypted(plain, shift, opt.name.as_deref())?;
        eprintln!("Saved {}", path.display());
    }
    if opt.analyze || opt.report || opt.session {
        let stats = analyze(plain);
        if opt.analyze {
            w.write_all(report::format_report(&stats).as_bytes())?;
        }
        if opt.report {
            let path = store.save_report(&stats, None)?;
            eprintln!("Report saved to {}", path.display());
        }
        if opt.session {
            let path = store.export_session(&input.text, plain, Some(shift), &stats)?;
            eprintln!("Session saved to {}", path.display());
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftcrack::shift::shift;

    #[test]
    fn threads_keep_order() -> Result<()> {
        let inputs: Vec<Input> = (1..6)
            .map(|k| Input {
                name: format!("in{k}"),
                text: shift("this is the secret message", k),
            })
            .collect();
        let got: Vec<Option<u8>> =
            decode_all(&inputs, false, 3)?.iter().map(|r| r.best_shift).collect();
        assert_eq!(got, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
        Ok(())
    }

    #[test]
    fn show_reports_failure() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path())?;
        let mut history = History::new();
        let opt = Options { history: true, ..Options::default() };
        let input = Input { name: "x".to_string(), text: "xqzvbk jjww pfvv".to_string() };
        let mut out = Vec::new();
        let found = show(&mut out, &store, &mut history, &opt, &input, &decode(&input.text))?;
        assert!(!found);
        assert_eq!(String::from_utf8_lossy(&out), "Could not decrypt\n");
        assert!(history.is_empty());
        Ok(())
    }

    #[test]
    fn show_success() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileStore::new(dir.path())?;
        let mut history = History::new();
        let opt = Options { history: true, save: true, top: 2, ..Options::default() };
        let text = shift("meet at the docks", 6);
        let input = Input { name: "x".to_string(), text };
        let mut out = Vec::new();
        assert!(show(&mut out, &store, &mut history, &opt, &input, &decode(&input.text))?);
        let out = String::from_utf8_lossy(&out).to_string();
        assert!(out.starts_with(" 1. shift  6  score 0.50  meet at the docks\n"));
        assert!(out.ends_with("Shift: 6  Score: 0.50\nmeet at the docks\n"));
        assert_eq!(history.len(), 1);
        assert_eq!(store.load_history()?.len(), 1);
        assert_eq!(store.list_decrypted().len(), 1);
        Ok(())
    }
}
