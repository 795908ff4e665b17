//! Shift (Caesar) cipher over the ASCII Latin alphabets.
//!
//! Upper- and lowercase letters rotate independently within their own 26
//! letters. Every other character, including non-ASCII letters, is copied
//! through at the same position.

const ALPHABET_LEN: i64 = 26;

/// Normalizes any shift into `0..26`.
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid keeps negative shifts in range
    shift.rem_euclid(ALPHABET_LEN) as u8
}

/// Shifts every ASCII letter forward by `shift` positions.
pub fn encrypt(text: &str, shift: i64) -> String {
    let s = normalize_shift(shift);
    text.chars().map(|ch| shift_char(ch, s)).collect()
}

/// Inverse of [`encrypt`] for the same `shift`.
pub fn decrypt(text: &str, shift: i64) -> String {
    // negating i64::MIN overflows, so invert the normalized amount instead
    encrypt(text, ALPHABET_LEN - i64::from(normalize_shift(shift)))
}

fn shift_char(ch: char, s: u8) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let offset = ch as u8 - base;
    char::from(base + (offset + s) % 26)
}
