pub mod config;
pub mod error;
pub mod frame;
pub mod matrix;

pub use config::{Configuration, MAX_COLUMNS, Mode, coerce_columns, coerce_shift};
pub use error::{CipherstepError, Result};
pub use frame::{Frame, FrameKind, FramePayload, Stage};
pub use matrix::Matrix;
