//! Translation of raw command line input into a pipeline configuration.

use tracing::warn;

use cipherstep_model::{Configuration, Mode, coerce_columns, coerce_shift};

/// Raw pipeline request as typed by the user.
///
/// A stage is enabled by supplying its parameter.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest {
    pub text: String,
    pub mode: Mode,
    pub shift: Option<String>,
    pub columns: Option<String>,
}

impl PipelineRequest {
    /// Builds the configuration, coercing malformed numbers instead of failing.
    ///
    /// Stage validation is left to the frame builder.
    pub fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new(self.text.clone()).with_mode(self.mode);
        if let Some(raw) = &self.shift {
            let shift = coerce_shift(raw);
            if raw.trim().parse::<i64>().ok() != Some(shift) {
                warn!(raw = %raw, shift, "shift coerced");
            }
            config = config.with_shift(shift);
        }
        if let Some(raw) = &self.columns {
            let columns = coerce_columns(raw);
            if raw.trim().parse::<usize>().ok() != Some(columns) {
                warn!(raw = %raw, columns, "column count coerced");
            }
            config = config.with_columns(columns);
        }
        config
    }
}
