//! Explanatory frames produced by the pipeline.
//!
//! A [`Frame`] is one immutable snapshot of pipeline state. Its payload is a
//! closed sum type so presenters match every kind exhaustively; the serialized
//! form keeps the `{ id, title, type, data }` shape consumed by front ends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;

/// One step of the visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique within a sequence (`read-col-2`, `rebuild-row-0`, ...).
    pub id: String,
    /// Human-readable label.
    pub title: String,
    #[serde(flatten)]
    pub payload: FramePayload,
}

impl Frame {
    pub fn new(id: impl Into<String>, title: impl Into<String>, payload: FramePayload) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            payload,
        }
    }

    pub fn kind(&self) -> FrameKind {
        self.payload.kind()
    }
}

/// Type-specific frame data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum FramePayload {
    /// Source text, before any stage.
    Input { text: String },
    /// Shift stage about to run on `from`.
    CaesarStart { from: String, shift: i64 },
    /// Shift stage result.
    CaesarEnd { from: String, to: String, shift: i64 },
    /// Padded text laid out row-major.
    MatrixBuild { matrix: Matrix, padded: String },
    /// Column `col_index` is being read; `read_so_far` includes it.
    ReadCol {
        matrix: Matrix,
        col_index: usize,
        read_so_far: String,
    },
    /// Transposition ciphertext.
    MatrixEnd { cipher: String },
    /// Final pipeline result.
    Output { text: String },
    /// Columnar inverse about to run on `cipher`.
    MatrixDeStart { cipher: String, columns: usize },
    /// Grid rebuilt from the ciphertext column chunks.
    MatrixReconstructed { matrix: Matrix, parts: Vec<String> },
    /// Rows `0..=row_index` are revealed; `rebuild_so_far` holds their text.
    RebuildRow {
        matrix: Matrix,
        row_index: usize,
        rebuild_so_far: String,
    },
    /// Columnar inverse result with the padding stripped.
    MatrixDeEnd { text: String },
    /// Inverse shift about to run on `from`.
    CaesarDeStart { from: String, shift: i64 },
    /// Inverse shift result.
    CaesarDeEnd { from: String, to: String, shift: i64 },
}

impl FramePayload {
    pub fn kind(&self) -> FrameKind {
        match self {
            FramePayload::Input { .. } => FrameKind::Input,
            FramePayload::CaesarStart { .. } => FrameKind::CaesarStart,
            FramePayload::CaesarEnd { .. } => FrameKind::CaesarEnd,
            FramePayload::MatrixBuild { .. } => FrameKind::MatrixBuild,
            FramePayload::ReadCol { .. } => FrameKind::ReadCol,
            FramePayload::MatrixEnd { .. } => FrameKind::MatrixEnd,
            FramePayload::Output { .. } => FrameKind::Output,
            FramePayload::MatrixDeStart { .. } => FrameKind::MatrixDeStart,
            FramePayload::MatrixReconstructed { .. } => FrameKind::MatrixReconstructed,
            FramePayload::RebuildRow { .. } => FrameKind::RebuildRow,
            FramePayload::MatrixDeEnd { .. } => FrameKind::MatrixDeEnd,
            FramePayload::CaesarDeStart { .. } => FrameKind::CaesarDeStart,
            FramePayload::CaesarDeEnd { .. } => FrameKind::CaesarDeEnd,
        }
    }

    /// Grid carried by the payload, if any.
    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            FramePayload::MatrixBuild { matrix, .. }
            | FramePayload::ReadCol { matrix, .. }
            | FramePayload::MatrixReconstructed { matrix, .. }
            | FramePayload::RebuildRow { matrix, .. } => Some(matrix),
            _ => None,
        }
    }
}

/// Fieldless tag of a [`FramePayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Input,
    CaesarStart,
    CaesarEnd,
    MatrixBuild,
    ReadCol,
    MatrixEnd,
    Output,
    MatrixDeStart,
    MatrixReconstructed,
    RebuildRow,
    MatrixDeEnd,
    CaesarDeStart,
    CaesarDeEnd,
}

impl FrameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameKind::Input => "input",
            FrameKind::CaesarStart => "caesar-start",
            FrameKind::CaesarEnd => "caesar-end",
            FrameKind::MatrixBuild => "matrix-build",
            FrameKind::ReadCol => "read-col",
            FrameKind::MatrixEnd => "matrix-end",
            FrameKind::Output => "output",
            FrameKind::MatrixDeStart => "matrix-de-start",
            FrameKind::MatrixReconstructed => "matrix-reconstructed",
            FrameKind::RebuildRow => "rebuild-row",
            FrameKind::MatrixDeEnd => "matrix-de-end",
            FrameKind::CaesarDeStart => "caesar-de-start",
            FrameKind::CaesarDeEnd => "caesar-de-end",
        }
    }

    /// Pipeline stage the kind belongs to, used for stage badges.
    pub fn stage(self) -> Stage {
        match self {
            FrameKind::Input => Stage::Input,
            FrameKind::CaesarStart
            | FrameKind::CaesarEnd
            | FrameKind::CaesarDeStart
            | FrameKind::CaesarDeEnd => Stage::Shift,
            FrameKind::MatrixBuild
            | FrameKind::ReadCol
            | FrameKind::MatrixEnd
            | FrameKind::MatrixDeStart
            | FrameKind::MatrixReconstructed
            | FrameKind::RebuildRow
            | FrameKind::MatrixDeEnd => Stage::Columnar,
            FrameKind::Output => Stage::Output,
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Input,
    Shift,
    Columnar,
    Output,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Input => "Input",
            Stage::Shift => "Caesar",
            Stage::Columnar => "Matrix",
            Stage::Output => "Output",
        }
    }
}
