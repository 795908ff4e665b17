//! Terminal rendering of frames.
//!
//! Every payload kind has its own layout; the match in [`render_frame`] is
//! exhaustive so a new frame kind cannot be forgotten here.

use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::warn;

use cipherstep_cipher::shift;
use cipherstep_core::Presenter;
use cipherstep_model::{Frame, FramePayload, Matrix, Stage};

const SPACE_GLYPH: char = '␣';
const EMPTY_TEXT: &str = "—";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit ANSI styling in tables.
    pub color: bool,
}

/// Which matrix cells a frame emphasizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Column(usize),
    RowsThrough(usize),
}

impl Highlight {
    fn contains(self, row: usize, col: usize) -> bool {
        match self {
            Highlight::None => false,
            Highlight::Column(c) => c == col,
            Highlight::RowsThrough(r) => row <= r,
        }
    }
}

/// One line per frame: position, id, type, stage and title.
pub fn frame_table(frames: &[Frame], options: RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("ID"),
        header_cell("Type"),
        header_cell("Stage"),
        header_cell("Title"),
    ]);
    apply_table_style(&mut table, options);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, frame) in frames.iter().enumerate() {
        let stage = frame.kind().stage();
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&frame.id).fg(Color::Blue),
            dim_cell(frame.kind()),
            Cell::new(stage.label()).fg(stage_color(stage)),
            Cell::new(&frame.title),
        ]);
    }
    table
}

/// Renders a single frame as shown during playback.
pub fn render_frame(index: usize, total: usize, frame: &Frame, options: RenderOptions) -> String {
    let mut lines = vec![
        format!("[{}/{}] {}", index + 1, total, frame.title),
        stage_badges(frame.kind().stage()),
    ];
    match &frame.payload {
        FramePayload::Input { text } => {
            lines.push(format!("Input: \"{text}\""));
            lines.push(text_row(text, options).to_string());
        }
        FramePayload::CaesarStart { from, shift: amount } => {
            let mapped = shift::encrypt(from, *amount);
            lines.extend(shift_mapping(from, &mapped, *amount, options));
        }
        FramePayload::CaesarDeStart { from, shift: amount } => {
            let mapped = shift::decrypt(from, *amount);
            lines.extend(shift_mapping(from, &mapped, *amount, options));
        }
        FramePayload::CaesarEnd { to, .. } | FramePayload::CaesarDeEnd { to, .. } => {
            lines.push(format!("Caesar result: \"{to}\""));
            lines.push(text_row(to, options).to_string());
        }
        FramePayload::MatrixBuild { matrix, padded } => {
            lines.push(format!(
                "Matrix: rows={} cols={} (padded with 'X')",
                matrix.rows(),
                matrix.cols()
            ));
            lines.push(matrix_view(matrix, Highlight::None, options));
            lines.push(format!("Padded: \"{padded}\""));
        }
        FramePayload::ReadCol {
            matrix,
            col_index,
            read_so_far,
        } => {
            lines.push(format!(
                "Reading column {} of {}",
                col_index + 1,
                matrix.cols()
            ));
            lines.push(matrix_view(matrix, Highlight::Column(*col_index), options));
            lines.push(format!("Read so far: \"{read_so_far}\""));
        }
        FramePayload::MatrixEnd { cipher } => {
            lines.push(format!("Transposition complete: \"{cipher}\""));
            lines.push(text_row(cipher, options).to_string());
        }
        FramePayload::Output { text } => {
            lines.push(format!("Final output: \"{text}\""));
            lines.push(text_row(text, options).to_string());
        }
        FramePayload::MatrixDeStart { cipher, columns } => {
            lines.push(format!(
                "Ciphertext: \"{cipher}\" will be split into {columns} columns and read by rows"
            ));
        }
        FramePayload::MatrixReconstructed { matrix, parts } => {
            lines.push("Matrix rebuilt from the ciphertext columns".to_string());
            lines.push(matrix_view(matrix, Highlight::None, options));
            lines.push(format!("Columns: {}", parts.join("|")));
        }
        FramePayload::RebuildRow {
            matrix,
            row_index,
            rebuild_so_far,
        } => {
            lines.push(format!("Rebuilding rows: \"{rebuild_so_far}\""));
            lines.push(matrix_view(
                matrix,
                Highlight::RowsThrough(*row_index),
                options,
            ));
        }
        FramePayload::MatrixDeEnd { text } => {
            lines.push(format!("Transposition reversed, padding removed: \"{text}\""));
            lines.push(text_row(text, options).to_string());
        }
    }
    lines.join("\n")
}

fn shift_mapping(from: &str, mapped: &str, amount: i64, options: RenderOptions) -> Vec<String> {
    vec![
        format!(
            "Caesar shift: {amount} (normalized {}); non-letters stay unchanged",
            shift::normalize_shift(amount)
        ),
        text_row(from, options).to_string(),
        "↓".to_string(),
        text_row(mapped, options).to_string(),
    ]
}

fn stage_badges(active: Stage) -> String {
    [Stage::Input, Stage::Shift, Stage::Columnar, Stage::Output]
        .iter()
        .map(|&stage| {
            if stage == active {
                format!("[{}]", stage.label())
            } else {
                stage.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Characters of `text` as a one-row table.
fn text_row(text: &str, options: RenderOptions) -> Table {
    let mut table = Table::new();
    apply_cell_style(&mut table, options);
    if text.is_empty() {
        table.add_row(vec![dim_cell(EMPTY_TEXT)]);
    } else {
        table.add_row(text.chars().map(glyph_cell).collect::<Vec<_>>());
    }
    table
}

fn matrix_view(matrix: &Matrix, highlight: Highlight, options: RenderOptions) -> String {
    if matrix.is_empty() {
        return format!("(empty {}-column matrix)", matrix.cols());
    }
    let mut table = Table::new();
    apply_cell_style(&mut table, options);
    for row in 0..matrix.rows() {
        let cells: Vec<Cell> = matrix
            .row(row)
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let text = cell.map(display_char).map(String::from).unwrap_or_default();
                if highlight.contains(row, col) {
                    Cell::new(format!("[{text}]"))
                        .fg(Color::Cyan)
                        .add_attribute(Attribute::Bold)
                } else {
                    Cell::new(text)
                }
            })
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}

fn glyph_cell(ch: char) -> Cell {
    Cell::new(display_char(ch))
}

fn display_char(ch: char) -> char {
    if ch == ' ' { SPACE_GLYPH } else { ch }
}

fn apply_table_style(table: &mut Table, options: RenderOptions) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if !options.color {
        table.force_no_tty();
    }
}

fn apply_cell_style(table: &mut Table, options: RenderOptions) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    if !options.color {
        table.force_no_tty();
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn stage_color(stage: Stage) -> Color {
    match stage {
        Stage::Input => Color::White,
        Stage::Shift => Color::Yellow,
        Stage::Columnar => Color::Magenta,
        Stage::Output => Color::Green,
    }
}

/// Prints frames to a writer as the player shows them.
pub struct TerminalPresenter<W: Write> {
    writer: W,
    total: usize,
    options: RenderOptions,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(writer: W, total: usize, options: RenderOptions) -> Self {
        Self {
            writer,
            total,
            options,
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show(&mut self, index: usize, frame: &Frame) {
        let rendered = render_frame(index, self.total, frame, self.options);
        if let Err(error) = writeln!(self.writer, "{rendered}\n") {
            warn!(%error, "failed to write frame");
        }
    }

    fn playback_changed(&mut self, playing: bool) {
        let label = if playing { "▶ playing" } else { "⏸ paused" };
        if let Err(error) = writeln!(self.writer, "{label}") {
            warn!(%error, "failed to write playback state");
        }
    }
}
