//! Rotate the letters of some text around the 26 letter alphabet.
//!
//! Only ASCII `A-Z` and `a-z` move. Everything else, including letters from
//! other scripts, passes through untouched.

/// number of letters in the cipher alphabet
pub const ALPHABET_LEN: u8 = 26;

/// reduce any shift to the canonical range `0..26`
#[must_use]
pub const fn normalize(n: i64) -> u8 {
    n.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// start of the case range containing `ch`, if it is a cipher letter
const fn base_of(ch: char) -> Option<u8> {
    if ch.is_ascii_lowercase() {
        Some(b'a')
    } else if ch.is_ascii_uppercase() {
        Some(b'A')
    } else {
        None
    }
}

/// rotate a single character forward by an already normalized amount
#[must_use]
pub fn shift_char(ch: char, n: u8) -> char {
    match base_of(ch) {
        Some(base) => ((ch as u8 - base + n) % ALPHABET_LEN + base) as char,
        None => ch,
    }
}

/// Rotate each letter of `text` forward by `n`, preserving case.
#[must_use]
pub fn shift(text: &str, n: i64) -> String {
    let n = normalize(n);
    text.chars().map(|ch| shift_char(ch, n)).collect()
}

/// Undo `shift`, i.e. `shift(text, -n)`
#[must_use]
pub fn unshift(text: &str, n: i64) -> String {
    // normalize first, -i64::MIN overflows
    shift(text, -i64::from(normalize(n)))
}

/// Find the shift that turns `plain` into `cipher`.
///
/// The first pair of letters fixes the candidate, which must then reproduce
/// the whole of `cipher`. A case mismatch in that pair, or text with no
/// letters at all, gives `None`.
#[must_use]
pub fn shift_between(plain: &str, cipher: &str) -> Option<u8> {
    for (p, c) in plain.chars().zip(cipher.chars()) {
        let (Some(pb), Some(cb)) = (base_of(p), base_of(c)) else {
            continue;
        };
        if pb != cb {
            return None;
        }
        let k = normalize(i64::from(c as u8) - i64::from(p as u8));
        return if shift(plain, i64::from(k)) == cipher {
            Some(k)
        } else {
            None
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 5] = [
        "",
        "Hello, World!",
        "The message is secret and this is for the",
        "mixed 123 ÀÉÎ ñ ß Ωμέγα\t\n end",
        "ZzAa",
    ];

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize(0), 0);
        assert_eq!(normalize(25), 25);
        assert_eq!(normalize(26), 0);
        assert_eq!(normalize(-1), 25);
        assert_eq!(normalize(-27), 25);
        assert_eq!(normalize(1000), 12);
        assert_eq!(normalize(i64::MIN), normalize(i64::MIN % 26));
    }

    #[test]
    fn known_values() {
        assert_eq!(shift("abc xyz", 3), "def abc");
        assert_eq!(shift("ABC XYZ", 3), "DEF ABC");
        assert_eq!(shift("Hello, World!", 13), "Uryyb, Jbeyq!");
        assert_eq!(unshift("Khoor", 3), "Hello");
        assert_eq!(shift("abc", -1), "zab");
    }

    #[test]
    fn round_trip() {
        for t in SAMPLES {
            for n in [i64::MIN, -53, -26, -1, 0, 1, 7, 13, 25, 26, 27, 99, i64::MAX] {
                assert_eq!(unshift(&shift(t, n), n), t);
                assert_eq!(shift(t, n), shift(t, i64::from(normalize(n))));
            }
        }
    }

    #[test]
    fn identity_and_passthrough() {
        for t in SAMPLES {
            assert_eq!(shift(t, 0), t);
            let s = shift(t, 11);
            assert_eq!(s.chars().count(), t.chars().count());
            for (a, b) in t.chars().zip(s.chars()) {
                if a.is_ascii_alphabetic() {
                    assert_ne!(a, b);
                    assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
                } else {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn extreme_shifts() {
        // i64::MIN is 18 mod 26, i64::MAX is 7
        assert_eq!(shift("abc", i64::MIN), "stu");
        assert_eq!(unshift("stu", i64::MIN), "abc");
        assert_eq!(unshift("hij", i64::MAX), "abc");
    }

    #[test]
    fn non_latin_letters_pass_through() {
        assert_eq!(shift("é Ω ß", 5), "é Ω ß");
    }

    #[test]
    fn recover_shift() {
        let plain = "This is a secret message";
        assert_eq!(shift_between(plain, &shift(plain, 7)), Some(7));
        assert_eq!(shift_between(plain, plain), Some(0));
        assert_eq!(shift_between("123 !", "123 !"), None);
        assert_eq!(shift_between("abc", "ABC"), None);
        assert_eq!(shift_between("abc", "bcx"), None);
        assert_eq!(shift_between("  a", "  z"), Some(25));
    }
}
