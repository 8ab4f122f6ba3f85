use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::history::RECENT;
use shiftcrack::util::{get_writer, parse_count, Result};
use std::io::Write;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("Show recent decryptions, newest first.", args::FileCount::Zero);
    const A: [ArgSpec; 2] = [
        arg! {"count", "n", "Number", "Show this many entries. Default 20."},
        arg! {"clear", "", "", "Forget all saved history."},
    ];
    let (args, _) = args::parse(&prog, &A, argv, settings)?;
    let store = settings.store()?;

    if args::last(&args, "clear").is_some() {
        store.clear_history()?;
        eprintln!("History cleared");
        return Ok(());
    }
    let count = match args::last(&args, "count") {
        Some(n) => parse_count(n, "--count")?,
        None => RECENT,
    };
    let history = store.load_history()?;
    if history.is_empty() {
        eprintln!("No history yet");
        return Ok(());
    }
    let mut w = get_writer("-")?;
    for e in history.recent(count) {
        writeln!(w, "{}", e.line())?;
    }
    w.flush()?;
    Ok(())
}
