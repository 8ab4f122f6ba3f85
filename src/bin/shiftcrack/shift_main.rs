use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::score::{looks_english, score_of};
use shiftcrack::shift::{shift, unshift};
use shiftcrack::util::{err, get_writer, parse_shift, read_all, Result};
use std::io::Write;

pub fn encrypt(argv: &[String], settings: &mut Settings) -> Result<()> {
    run(argv, settings, true)
}

pub fn decrypt(argv: &[String], settings: &mut Settings) -> Result<()> {
    run(argv, settings, false)
}

fn run(argv: &[String], settings: &mut Settings, forward: bool) -> Result<()> {
    let help = if forward {
        "Shift every letter forward by a fixed amount."
    } else {
        "Shift every letter back by a fixed amount."
    };
    let prog = args::ProgSpec::new(help, args::FileCount::One);
    const A: [ArgSpec; 3] = [
        arg! {"shift", "k", "Number", "The shift. Any integer, taken mod 26."},
        arg! {"text", "t", "Text", "Use this text, rather than reading a file."},
        arg! {"score", "s", "", "Also report how English the result looks."},
    ];
    let (args, files) = args::parse(&prog, &A, argv, settings)?;

    let Some(k) = args::last(&args, "shift") else {
        return err!("--shift is required");
    };
    let k = parse_shift(k)?;
    let scored = args::last(&args, "score").is_some();
    let text = match args::last(&args, "text") {
        Some(t) => t.to_string(),
        None => read_all(&files[0])?,
    };

    let out = if forward { shift(&text, k) } else { unshift(&text, k) };
    let mut w = get_writer("-")?;
    w.write_all(out.as_bytes())?;
    if !out.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    if scored {
        let check = looks_english(&out, settings.min_matches);
        writeln!(
            w,
            "Score: {:.2}  Common words: {}  Looks like English: {}",
            score_of(&out),
            check.matches,
            if check.looks_english { "yes" } else { "no" }
        )?;
    }
    w.flush()?;
    Ok(())
}
