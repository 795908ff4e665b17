//! Rendering and step-command integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cipherstep_cli::render::{RenderOptions, TerminalPresenter, frame_table, render_frame};
use cipherstep_cli::request::PipelineRequest;
use cipherstep_cli::step::StepCommand;
use cipherstep_core::{Player, build_frames};
use cipherstep_model::{Configuration, Frame, FrameKind, Mode};

const PLAIN: RenderOptions = RenderOptions { color: false };

fn hello_frames() -> Vec<Frame> {
    build_frames(&Configuration::new("HELLO").with_shift(3).with_columns(3)).expect("frames")
}

fn find(frames: &[Frame], id: &str) -> (usize, Frame) {
    frames
        .iter()
        .enumerate()
        .find(|(_, frame)| frame.id == id)
        .map(|(index, frame)| (index, frame.clone()))
        .expect("frame present")
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf8")
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn read_col_highlights_only_the_current_column() {
    let frames = hello_frames();
    let (index, frame) = find(&frames, "read-col-0");
    let text = render_frame(index, frames.len(), &frame, PLAIN);
    assert!(text.starts_with("[5/9] Reading column 1 / 3"));
    assert!(text.contains("Input > Caesar > [Matrix] > Output"));
    // KHOORX laid out in 3 columns; column 0 holds K and O.
    assert!(text.contains("[K]"));
    assert!(text.contains("[O]"));
    assert!(!text.contains("[H]"));
    assert!(text.contains("Read so far: \"KO\""));
}

#[test]
fn caesar_start_shows_the_letter_mapping() {
    let frames = hello_frames();
    let (index, frame) = find(&frames, "caesar-start");
    let text = render_frame(index, frames.len(), &frame, PLAIN);
    assert!(text.contains("Input > [Caesar] > Matrix > Output"));
    assert!(text.contains("Caesar shift: 3 (normalized 3)"));
    assert!(text.contains('↓'));
    assert!(text.contains('K'));
}

#[test]
fn rebuild_row_reveals_rows_up_to_current() {
    let config = Configuration::new("ABCDE")
        .with_columns(3)
        .with_mode(Mode::Decrypt);
    let frames = build_frames(&config).expect("frames");
    let (index, frame) = find(&frames, "rebuild-row-0");
    let text = render_frame(index, frames.len(), &frame, PLAIN);
    assert!(text.contains("[A]"));
    assert!(!text.contains("[B]"));
    assert!(text.contains("Rebuilding rows: \"ACE\""));
}

#[test]
fn spaces_and_empty_text_are_visible() {
    let frames = build_frames(&Configuration::new("A B").with_shift(1)).expect("frames");
    let text = render_frame(0, frames.len(), &frames[0], PLAIN);
    assert!(text.contains('␣'));

    let frames = build_frames(&Configuration::new("").with_columns(2)).expect("frames");
    let text = render_frame(0, frames.len(), &frames[0], PLAIN);
    assert!(text.contains('—'));
    let (index, frame) = find(&frames, "matrix-build");
    let text = render_frame(index, frames.len(), &frame, PLAIN);
    assert!(text.contains("(empty 2-column matrix)"));
}

#[test]
fn every_frame_kind_renders_its_title() {
    let mut frames = hello_frames();
    frames.extend(
        build_frames(
            &Configuration::new("KOHROX")
                .with_shift(3)
                .with_columns(3)
                .with_mode(Mode::Decrypt),
        )
        .expect("frames"),
    );
    let kinds: std::collections::BTreeSet<&str> =
        frames.iter().map(|frame| frame.kind().as_str()).collect();
    assert_eq!(kinds.len(), 13);
    for (index, frame) in frames.iter().enumerate() {
        let text = render_frame(index, frames.len(), frame, PLAIN);
        assert!(text.contains(&frame.title), "{}", frame.id);
    }
}

#[test]
fn listing_table_has_one_row_per_frame() {
    let frames = hello_frames();
    let table = frame_table(&frames, PLAIN);
    assert_eq!(table.row_iter().count(), frames.len());
    let text = table.to_string();
    assert!(text.contains("read-col-2"));
    assert!(text.contains("Ciphertext (output)"));
}

#[test]
fn presenter_writes_frames_and_playback_changes() {
    let buffer = Buffer::default();
    let frames = hello_frames();
    let mut player =
        Player::new().with_presenter(TerminalPresenter::new(buffer.clone(), frames.len(), PLAIN));
    player.load(frames);
    player.next();
    player.play();
    player.pause();

    let output = buffer.contents();
    assert!(output.contains("[1/9] Original text"));
    assert!(output.contains("▶ playing"));
    assert!(output.contains("⏸ paused"));
}

#[test]
fn step_commands_drive_the_player() {
    let mut player = Player::new();
    player.load(hello_frames());

    assert!(StepCommand::parse("").expect("next").apply(&mut player));
    assert_eq!(player.current_index(), Some(0));
    assert!(StepCommand::Last.apply(&mut player));
    assert_eq!(player.current_frame().map(Frame::kind), Some(FrameKind::Output));
    assert!(StepCommand::Previous.apply(&mut player));
    assert_eq!(player.current_index(), Some(7));
    assert!(StepCommand::parse("g 42").expect("go").apply(&mut player));
    assert_eq!(player.current_index(), Some(7));
    assert!(StepCommand::First.apply(&mut player));
    assert_eq!(player.current_index(), Some(0));
    assert!(!StepCommand::Quit.apply(&mut player));
}

#[test]
fn request_flows_into_frames() {
    let request = PipelineRequest {
        text: "HELLO".to_string(),
        mode: Mode::Encrypt,
        shift: Some("3.9".to_string()),
        columns: Some("3".to_string()),
    };
    let frames = build_frames(&request.to_configuration()).expect("frames");
    assert_eq!(frames.len(), 9);
    assert_eq!(frames[1].title, "Applying Caesar (shift=3)");
}
