use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::args;
use shiftcrack::util::{get_writer, Result};
use std::io::Write;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("List saved plaintext, newest first.", args::FileCount::Zero);
    const A: [ArgSpec; 0] = [];
    args::parse(&prog, &A, argv, settings)?;

    let store = settings.store()?;
    let files = store.list_decrypted();
    if files.is_empty() {
        eprintln!("No decrypted files in {}", store.decrypted_dir().display());
        return Ok(());
    }
    let mut w = get_writer("-")?;
    for f in files {
        writeln!(w, "{}", f.display())?;
    }
    w.flush()?;
    Ok(())
}
