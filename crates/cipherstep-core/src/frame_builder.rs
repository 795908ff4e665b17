//! Frame sequence construction.
//!
//! [`build_frames`] runs the configured stages and records one or more frames
//! per intermediate state. Encryption runs shift then columnar; decryption runs
//! the columnar inverse first, then the inverse shift.
//!
//! ```text
//! encrypt: input -> caesar-start/end -> matrix-build -> read-col* -> matrix-end -> output
//! decrypt: input -> matrix-de-start -> matrix-reconstructed -> rebuild-row* -> matrix-de-end
//!                -> caesar-de-start/end -> output
//! ```

use tracing::{debug, info_span};

use cipherstep_cipher::{columnar, shift};
use cipherstep_model::{Configuration, Frame, FramePayload, Matrix, Mode, Result};

/// Builds the complete frame sequence for `config`.
///
/// # Errors
///
/// Returns [`cipherstep_model::CipherstepError::InvalidConfiguration`] when no
/// stage is enabled; no frames are produced in that case.
pub fn build_frames(config: &Configuration) -> Result<Vec<Frame>> {
    config.validate()?;
    let span = info_span!("build_frames", mode = config.mode.as_str());
    let _guard = span.enter();

    let normalized = normalize_input(&config.text);
    let mut frames = vec![Frame::new(
        "input",
        "Original text",
        FramePayload::Input {
            text: normalized.clone(),
        },
    )];

    match config.mode {
        Mode::Encrypt => build_encrypt(config, normalized, &mut frames),
        Mode::Decrypt => build_decrypt(config, normalized, &mut frames),
    }

    debug!(
        frame_count = frames.len(),
        shift = config.use_shift_cipher,
        columnar = config.use_columnar,
        "frames built"
    );
    Ok(frames)
}

/// Source text cleanup hook; currently the identity.
fn normalize_input(text: &str) -> String {
    text.to_string()
}

fn build_encrypt(config: &Configuration, normalized: String, frames: &mut Vec<Frame>) {
    let mut current = normalized;
    if config.use_shift_cipher {
        current = push_shift(frames, current, config.shift, Mode::Encrypt);
    }
    let output = if config.use_columnar {
        push_columnar_encrypt(frames, &current, config.effective_columns());
        columnar::encrypt(&current, config.effective_columns())
    } else {
        current
    };
    frames.push(Frame::new(
        "output",
        "Ciphertext (output)",
        FramePayload::Output { text: output },
    ));
}

fn build_decrypt(config: &Configuration, normalized: String, frames: &mut Vec<Frame>) {
    let mut current = normalized;
    if config.use_columnar {
        current = push_columnar_decrypt(frames, &current, config.effective_columns());
    }
    if config.use_shift_cipher {
        current = push_shift(frames, current, config.shift, Mode::Decrypt);
    }
    frames.push(Frame::new(
        "output",
        "Final text (decrypted)",
        FramePayload::Output { text: current },
    ));
}

/// Emits the start/end pair for the shift stage and returns its result.
fn push_shift(frames: &mut Vec<Frame>, from: String, amount: i64, mode: Mode) -> String {
    let to = match mode {
        Mode::Encrypt => shift::encrypt(&from, amount),
        Mode::Decrypt => shift::decrypt(&from, amount),
    };
    debug!(shift = amount, mode = mode.as_str(), "shift stage");
    match mode {
        Mode::Encrypt => {
            frames.push(Frame::new(
                "caesar-start",
                format!("Applying Caesar (shift={amount})"),
                FramePayload::CaesarStart {
                    from: from.clone(),
                    shift: amount,
                },
            ));
            frames.push(Frame::new(
                "caesar-end",
                "Caesar result",
                FramePayload::CaesarEnd {
                    from,
                    to: to.clone(),
                    shift: amount,
                },
            ));
        }
        Mode::Decrypt => {
            frames.push(Frame::new(
                "caesar-de-start",
                format!("Applying inverse Caesar (shift={amount})"),
                FramePayload::CaesarDeStart {
                    from: from.clone(),
                    shift: amount,
                },
            ));
            frames.push(Frame::new(
                "caesar-de-end",
                "Caesar result (decrypted)",
                FramePayload::CaesarDeEnd {
                    from,
                    to: to.clone(),
                    shift: amount,
                },
            ));
        }
    }
    to
}

/// Emits the matrix, per-column reads and the transposition result.
fn push_columnar_encrypt(frames: &mut Vec<Frame>, text: &str, columns: usize) {
    let padded = columnar::pad(text, columns);
    let matrix = Matrix::from_row_major(&padded, columns);
    debug!(
        rows = matrix.rows(),
        cols = columns,
        padding = padded.len() - text.chars().count(),
        "columnar grid built"
    );
    frames.push(Frame::new(
        "matrix-build",
        format!("Building matrix ({}x{})", matrix.rows(), columns),
        FramePayload::MatrixBuild {
            matrix: matrix.clone(),
            padded: padded.iter().collect(),
        },
    ));

    let mut read_so_far = String::with_capacity(padded.len());
    for col in 0..columns {
        read_so_far.push_str(&matrix.column_text(col));
        frames.push(Frame::new(
            format!("read-col-{col}"),
            format!("Reading column {} / {}", col + 1, columns),
            FramePayload::ReadCol {
                matrix: matrix.clone(),
                col_index: col,
                read_so_far: read_so_far.clone(),
            },
        ));
    }

    frames.push(Frame::new(
        "matrix-end",
        "Transposition result",
        FramePayload::MatrixEnd {
            cipher: columnar::encrypt(text, columns),
        },
    ));
}

/// Emits the reconstruction frames and returns the stripped plaintext.
fn push_columnar_decrypt(frames: &mut Vec<Frame>, cipher: &str, columns: usize) -> String {
    frames.push(Frame::new(
        "matrix-de-start",
        format!("Reversing transposition (columns={columns})"),
        FramePayload::MatrixDeStart {
            cipher: cipher.to_string(),
            columns,
        },
    ));

    let parts = columnar::split_columns(cipher, columns);
    let rows = columnar::row_count(cipher.chars().count(), columns);
    let matrix = Matrix::from_columns(&parts, rows);
    debug!(rows, cols = columns, "columnar grid reconstructed");
    frames.push(Frame::new(
        "matrix-reconstructed",
        format!("Reconstructed matrix ({rows}x{columns})"),
        FramePayload::MatrixReconstructed {
            matrix: matrix.clone(),
            parts: parts.iter().map(|part| part.iter().collect()).collect(),
        },
    ));

    let mut rebuild_so_far = String::with_capacity(cipher.len());
    for row in 0..rows {
        rebuild_so_far.push_str(&matrix.row_text(row));
        frames.push(Frame::new(
            format!("rebuild-row-{row}"),
            format!("Reading row {} / {}", row + 1, rows),
            FramePayload::RebuildRow {
                matrix: matrix.clone(),
                row_index: row,
                rebuild_so_far: rebuild_so_far.clone(),
            },
        ));
    }

    let text = columnar::decrypt(cipher, columns);
    frames.push(Frame::new(
        "matrix-de-end",
        "Transposition result (decrypted)",
        FramePayload::MatrixDeEnd { text: text.clone() },
    ));
    text
}
