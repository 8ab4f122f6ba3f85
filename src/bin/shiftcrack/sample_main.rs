use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::util::{parse_shift, Result};

const SAMPLE: &str = "This is a secret message from the spy. The mission is extremely important \
and must be completed before midnight. Meet me at the old warehouse near the docks. \
Bring the documents and make sure you are not followed. The password is 'Blue Moon'. \
Trust no one except Agent Seven. Good luck!";

const DEFAULT_SHIFT: i64 = 13;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new(
        "Write a ciphertext to the default input file, for practice.",
        args::FileCount::Zero,
    );
    const A: [ArgSpec; 3] = [
        arg! {"shift", "k", "Number", "The shift to apply. Default 13."},
        arg! {"random", "r", "", "Pick a random shift from 1 to 25."},
        arg! {"text", "t", "Text", "Encrypt this rather than the built in paragraph."},
    ];
    let (args, _) = args::parse(&prog, &A, argv, settings)?;

    let mut k = DEFAULT_SHIFT;
    let mut text = SAMPLE.to_string();
    for x in args {
        if x.name == "shift" {
            k = parse_shift(&x.value)?;
        } else if x.name == "random" {
            k = i64::from(fastrand::u8(1..26));
        } else if x.name == "text" {
            text = x.value;
        } else {
            unreachable!();
        }
    }
    let path = settings.store()?.create_sample(&text, k)?;
    println!("Created sample {} with shift {}", path.display(), k);
    Ok(())
}
