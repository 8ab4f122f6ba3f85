use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::score::{looks_english, score};
use shiftcrack::util::{get_writer, read_all, Result};
use std::io::Write;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("How much does text look like English?", args::FileCount::One);
    const A: [ArgSpec; 1] = [arg! {"text", "t", "Text", "Score this text, rather than reading a file."}];
    let (args, files) = args::parse(&prog, &A, argv, settings)?;

    let text = match args::last(&args, "text") {
        Some(t) => t.to_string(),
        None => read_all(&files[0])?,
    };
    let check = looks_english(&text, settings.min_matches);
    let mut w = get_writer("-")?;
    writeln!(w, "Score\t{:.4}", score(&text))?;
    writeln!(w, "Matches\t{}", check.matches)?;
    writeln!(w, "English\t{}", check.looks_english)?;
    w.flush()?;
    Ok(())
}
