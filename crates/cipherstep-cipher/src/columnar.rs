//! Columnar transposition.
//!
//! Encryption writes the text row-major into a grid with `columns` columns
//! (padded with [`FILLER`]) and reads it back column-major. Decryption splits
//! the ciphertext into `columns` equal chunks, reads them row by row and strips
//! the trailing filler.
//!
//! # Known limitation
//!
//! Stripping is a heuristic: a plaintext that genuinely ends in `X` loses
//! those characters on the way back.

/// Padding character used to complete the last grid row.
pub const FILLER: char = 'X';

/// Right-pads `text` with [`FILLER`] to a multiple of `columns` characters.
///
/// The padded text holds up to `columns - 1` extra characters, so callers
/// bound `columns` before padding.
pub fn pad(text: &str, columns: usize) -> Vec<char> {
    let columns = columns.max(1);
    let mut chars: Vec<char> = text.chars().collect();
    let remainder = chars.len() % columns;
    if remainder != 0 {
        let filler = columns - remainder;
        chars.extend(std::iter::repeat_n(FILLER, filler));
    }
    chars
}

/// Number of grid rows needed for `len` characters.
pub fn row_count(len: usize, columns: usize) -> usize {
    len.div_ceil(columns.max(1))
}

pub fn encrypt(text: &str, columns: usize) -> String {
    let columns = columns.max(1);
    let padded = pad(text, columns);
    let mut out = String::with_capacity(padded.len());
    for col in 0..columns {
        out.extend(padded.iter().skip(col).step_by(columns));
    }
    out
}

/// Splits ciphertext into `columns` contiguous chunks of `rows` characters.
///
/// Chunks past the end of the ciphertext come back short or empty.
pub fn split_columns(cipher: &str, columns: usize) -> Vec<Vec<char>> {
    let columns = columns.max(1);
    let chars: Vec<char> = cipher.chars().collect();
    let rows = row_count(chars.len(), columns);
    (0..columns)
        .map(|c| {
            let start = (c * rows).min(chars.len());
            let end = (start + rows).min(chars.len());
            chars[start..end].to_vec()
        })
        .collect()
}

/// Reverses [`encrypt`] and strips the trailing filler.
///
/// Columns beyond the ciphertext length only add empty chunks, so the count
/// is capped at the length first.
pub fn decrypt(cipher: &str, columns: usize) -> String {
    let len = cipher.chars().count();
    let parts = split_columns(cipher, columns.min(len.max(1)));
    let rows = parts.first().map_or(0, Vec::len);
    let mut out = String::with_capacity(cipher.len());
    for r in 0..rows {
        out.extend(parts.iter().filter_map(|part| part.get(r)));
    }
    strip_padding(&out).to_string()
}

/// Removes the trailing run of [`FILLER`] characters.
pub fn strip_padding(text: &str) -> &str {
    text.trim_end_matches(FILLER)
}
