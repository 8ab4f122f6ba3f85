use crate::globals::Settings;
use crate::*;
use shiftcrack::util::Result;
use std::fmt;

#[derive(Copy, Clone)]
pub struct OneMain {
    pub name: &'static str,
    pub help: &'static str,
    pub proc: fn(&[String], &mut Settings) -> Result<()>,
}

impl fmt::Debug for OneMain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OneMain {} : {}", self.name, self.help)
    }
}

macro_rules! proc {
    ($a:expr,$b:expr,$c:expr) => {
        OneMain {
            name: $a,
            help: $b,
            proc: $c,
        }
    };
}

pub const MAINLIST: &[OneMain] = &[
    proc! {"analyze", "Statistics about some text.", analyze_main::main},
    proc! {"decode", "Find the shift and decrypt.", decode_main::main},
    proc! {"decrypt", "Undo a known shift.", shift_main::decrypt},
    proc! {"encrypt", "Apply a shift.", shift_main::encrypt},
    proc! {"findshift", "Find the shift between plain and cipher text.", findshift_main::main},
    proc! {"history", "Show previous decryptions.", history_main::main},
    proc! {"list", "List saved plaintext files.", list_main::main},
    proc! {"sample", "Write a sample ciphertext file.", sample_main::main},
    proc! {"score", "How English does some text look?", score_main::main},
];
