use crate::args::ArgSpec;
use crate::globals::Settings;
use crate::{arg, args};
use shiftcrack::shift::shift_between;
use shiftcrack::util::{err, Result};

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new(
        "Find the shift that turns one text into another.",
        args::FileCount::Zero,
    );
    const A: [ArgSpec; 2] = [
        arg! {"plain", "p", "Text", "The plaintext."},
        arg! {"cipher", "c", "Text", "The ciphertext."},
    ];
    let (args, _) = args::parse(&prog, &A, argv, settings)?;

    let (Some(plain), Some(cipher)) = (args::last(&args, "plain"), args::last(&args, "cipher")) else {
        return err!("Both --plain and --cipher are required");
    };
    match shift_between(plain, cipher) {
        Some(k) => {
            println!("{}", k);
            Ok(())
        }
        None => err!("No single shift turns '{}' into '{}'", plain, cipher),
    }
}
