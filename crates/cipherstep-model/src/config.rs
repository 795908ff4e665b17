//! Pipeline configuration and defensive numeric coercion.
//!
//! A [`Configuration`] is supplied in memory by whatever drives the frame
//! builder. Numeric inputs arrive as raw strings from text fields or command
//! line flags, so [`coerce_shift`] and [`coerce_columns`] clamp malformed
//! values to safe defaults instead of rejecting them.

use serde::{Deserialize, Serialize};

use crate::error::{CipherstepError, Result};

/// Largest accepted column count.
///
/// Wider grids only add filler, and the padded text grows with the count.
pub const MAX_COLUMNS: usize = 1024;

/// Direction of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Shift first, then columnar transposition.
    #[default]
    Encrypt,
    /// Columnar inverse first, then shift inverse.
    Decrypt,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }
}

/// Everything the frame builder needs to produce a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Plaintext (encrypt) or ciphertext (decrypt).
    pub text: String,
    /// Run the shift cipher stage.
    pub use_shift_cipher: bool,
    /// Raw shift amount; normalized into `[0, 26)` by the cipher.
    pub shift: i64,
    /// Run the columnar transposition stage.
    pub use_columnar: bool,
    /// Number of grid columns, in `1..=MAX_COLUMNS`.
    pub columns: usize,
    pub mode: Mode,
}

impl Configuration {
    /// Creates a configuration with no stage enabled.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            use_shift_cipher: false,
            shift: 0,
            use_columnar: false,
            columns: 1,
            mode: Mode::default(),
        }
    }

    /// Enables the shift stage with the given amount.
    pub fn with_shift(mut self, shift: i64) -> Self {
        self.use_shift_cipher = true;
        self.shift = shift;
        self
    }

    /// Enables the columnar stage with `columns` clamped to `1..=MAX_COLUMNS`.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.use_columnar = true;
        self.columns = columns.clamp(1, MAX_COLUMNS);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks that at least one stage is enabled.
    pub fn validate(&self) -> Result<()> {
        if !self.use_shift_cipher && !self.use_columnar {
            return Err(CipherstepError::InvalidConfiguration {
                reason: "enable at least one cipher stage (shift or columnar)",
            });
        }
        Ok(())
    }

    /// Effective column count used by every columnar step.
    ///
    /// Re-clamped because `columns` is a public field.
    pub fn effective_columns(&self) -> usize {
        self.columns.clamp(1, MAX_COLUMNS)
    }
}

/// Coerces a raw shift value.
///
/// Integers are taken as-is, other numbers are truncated toward zero, and
/// anything unparseable becomes `0`.
pub fn coerce_shift(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates at the i64 bounds
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Coerces a raw column count to `floor(value)` clamped to `1..=MAX_COLUMNS`.
///
/// Non-numeric, non-finite, zero and negative inputs all become `1`.
pub fn coerce_columns(raw: &str) -> usize {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<usize>() {
        return value.clamp(1, MAX_COLUMNS);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 1.0 => {
            (value.floor() as usize).min(MAX_COLUMNS)
        }
        _ => 1,
    }
}
