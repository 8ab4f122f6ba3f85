use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, arg_enum, args};
use shiftcrack::report;
use shiftcrack::stats::{analyze, TextStatistics};
use shiftcrack::util::{err, get_writer, read_all, Result};
use std::io::Write;

#[derive(Debug, Default, Clone, Copy)]
struct Charts {
    length: bool,
    chars: bool,
    words: bool,
}

impl Charts {
    fn add(&mut self, kind: &str) {
        match kind {
            "length" => self.length = true,
            "chars" => self.chars = true,
            "words" => self.words = true,
            _ => {
                self.length = true;
                self.chars = true;
                self.words = true;
            }
        }
    }
    fn render(&self, s: &TextStatistics) -> String {
        let mut r = String::new();
        if self.length {
            r.push_str("Word Length Distribution\n");
            r.push_str(&report::length_histogram(s));
        }
        if self.chars {
            r.push_str(&report::char_type_chart(s));
        }
        if self.words {
            r.push_str(&report::word_frequency_chart(s));
        }
        r
    }
}

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("Statistics about some text.", args::FileCount::One);
    const A: [ArgSpec; 5] = [
        arg! {"text", "t", "Text", "Analyze this text, rather than reading a file."},
        arg_enum! {"chart", "c", "Kind", "Add a chart.", &["length", "chars", "words", "all"]},
        arg! {"json", "j", "", "Print the statistics as JSON, rather than a report."},
        arg! {"save", "s", "", "Save the statistics as JSON under the data directory."},
        arg! {"name", "n", "FileName", "File name for --save."},
    ];
    let (args, files) = args::parse(&prog, &A, argv, settings)?;

    let mut charts = Charts::default();
    let mut text = None;
    let mut json = false;
    let mut save = false;
    let mut name = None;
    for x in args {
        if x.name == "text" {
            text = Some(x.value);
        } else if x.name == "chart" {
            charts.add(&x.value);
        } else if x.name == "json" {
            json = true;
        } else if x.name == "save" {
            save = true;
        } else if x.name == "name" {
            name = Some(x.value);
        } else {
            unreachable!();
        }
    }
    let text = match text {
        Some(t) => t,
        None => read_all(&files[0])?,
    };
    if text.trim().is_empty() {
        return err!("Nothing to analyze");
    }

    let stats = analyze(&text);
    let mut w = get_writer("-")?;
    if json {
        serde_json::to_writer_pretty(&mut w, &stats)?;
        writeln!(w)?;
    } else {
        w.write_all(report::format_report(&stats).as_bytes())?;
    }
    w.write_all(charts.render(&stats).as_bytes())?;
    w.flush()?;
    if save {
        let path = settings.store()?.save_report(&stats, name.as_deref())?;
        eprintln!("Report saved to {}", path.display());
    }
    Ok(())
}
