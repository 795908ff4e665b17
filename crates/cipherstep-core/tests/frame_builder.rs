//! Integration tests for frame sequence construction.

use cipherstep_core::build_frames;
use cipherstep_model::{
    CipherstepError, Configuration, Frame, FrameKind, FramePayload, MAX_COLUMNS, Mode,
};

fn listing(frames: &[Frame]) -> String {
    frames
        .iter()
        .enumerate()
        .map(|(index, frame)| format!("{index} {}: {}", frame.id, frame.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn output_text(frames: &[Frame]) -> &str {
    match &frames.last().expect("at least one frame").payload {
        FramePayload::Output { text } => text,
        other => panic!("last frame is not output: {other:?}"),
    }
}

#[test]
fn both_stages_encrypt_listing() {
    let config = Configuration::new("HELLO").with_shift(3).with_columns(3);
    let frames = build_frames(&config).expect("build frames");
    insta::assert_snapshot!(listing(&frames), @r"
    0 input: Original text
    1 caesar-start: Applying Caesar (shift=3)
    2 caesar-end: Caesar result
    3 matrix-build: Building matrix (2x3)
    4 read-col-0: Reading column 1 / 3
    5 read-col-1: Reading column 2 / 3
    6 read-col-2: Reading column 3 / 3
    7 matrix-end: Transposition result
    8 output: Ciphertext (output)
    ");
    assert_eq!(output_text(&frames), "KOHROX");
}

#[test]
fn both_stages_decrypt_reverses_encrypt() {
    let config = Configuration::new("KOHROX")
        .with_shift(3)
        .with_columns(3)
        .with_mode(Mode::Decrypt);
    let frames = build_frames(&config).expect("build frames");
    let kinds: Vec<FrameKind> = frames.iter().map(Frame::kind).collect();
    assert_eq!(
        kinds,
        vec![
            FrameKind::Input,
            FrameKind::MatrixDeStart,
            FrameKind::MatrixReconstructed,
            FrameKind::RebuildRow,
            FrameKind::RebuildRow,
            FrameKind::MatrixDeEnd,
            FrameKind::CaesarDeStart,
            FrameKind::CaesarDeEnd,
            FrameKind::Output,
        ]
    );
    assert_eq!(
        frames[5].payload,
        FramePayload::MatrixDeEnd {
            text: "KHOOR".to_string()
        }
    );
    assert_eq!(
        frames[6].payload,
        FramePayload::CaesarDeStart {
            from: "KHOOR".to_string(),
            shift: 3
        }
    );
    assert_eq!(frames[6].title, "Applying inverse Caesar (shift=3)");
    assert_eq!(output_text(&frames), "HELLO");
}

#[test]
fn shift_and_two_columns_emit_one_frame_per_step() {
    let config = Configuration::new("HI").with_shift(1).with_columns(2);
    let frames = build_frames(&config).expect("build frames");
    // input, caesar x2, matrix-build, read-col x2, matrix-end, output
    assert_eq!(frames.len(), 8);
    assert_eq!(
        frames[2].payload,
        FramePayload::CaesarEnd {
            from: "HI".to_string(),
            to: "IJ".to_string(),
            shift: 1
        }
    );
    assert_eq!(output_text(&frames), "IJ");
}

#[test]
fn first_frame_is_verbatim_input_and_last_is_output() {
    for mode in [Mode::Encrypt, Mode::Decrypt] {
        let config = Configuration::new(" Mixed, text! ")
            .with_shift(-5)
            .with_columns(4)
            .with_mode(mode);
        let frames = build_frames(&config).expect("build frames");
        assert_eq!(
            frames[0].payload,
            FramePayload::Input {
                text: " Mixed, text! ".to_string()
            }
        );
        assert_eq!(frames[0].id, "input");
        assert_eq!(frames.last().map(Frame::kind), Some(FrameKind::Output));
    }
}

#[test]
fn frame_ids_are_unique() {
    let config = Configuration::new("ATTACK AT DAWN")
        .with_shift(7)
        .with_columns(5);
    let frames = build_frames(&config).expect("build frames");
    let mut ids: Vec<&str> = frames.iter().map(|frame| frame.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), frames.len());
}

#[test]
fn generation_is_deterministic() {
    let config = Configuration::new("The quick brown fox")
        .with_shift(11)
        .with_columns(4)
        .with_mode(Mode::Decrypt);
    assert_eq!(build_frames(&config), build_frames(&config));
}

#[test]
fn no_stage_is_rejected() {
    let config = Configuration::new("HELLO").with_mode(Mode::Decrypt);
    assert!(matches!(
        build_frames(&config),
        Err(CipherstepError::InvalidConfiguration { .. })
    ));
}

#[test]
fn columnar_only_output_matches_matrix_end() {
    let config = Configuration::new("WEAREDISCOVERED").with_columns(4);
    let frames = build_frames(&config).expect("build frames");
    let cipher = frames
        .iter()
        .find_map(|frame| match &frame.payload {
            FramePayload::MatrixEnd { cipher } => Some(cipher.clone()),
            _ => None,
        })
        .expect("matrix-end frame");
    assert_eq!(output_text(&frames), cipher);
    let last_read = frames
        .iter()
        .rev()
        .find_map(|frame| match &frame.payload {
            FramePayload::ReadCol { read_so_far, .. } => Some(read_so_far.clone()),
            _ => None,
        })
        .expect("read-col frame");
    assert_eq!(last_read, cipher);
}

#[test]
fn single_column_is_identity_permutation() {
    let config = Configuration::new("HELLO").with_columns(0);
    let frames = build_frames(&config).expect("build frames");
    let read_cols = frames
        .iter()
        .filter(|frame| frame.kind() == FrameKind::ReadCol)
        .count();
    assert_eq!(read_cols, 1);
    assert_eq!(output_text(&frames), "HELLO");
}

#[test]
fn huge_column_count_is_capped_in_both_modes() {
    let config = Configuration::new("HELLO").with_columns(usize::MAX);
    let frames = build_frames(&config).expect("build frames");
    let read_cols = frames
        .iter()
        .filter(|frame| frame.kind() == FrameKind::ReadCol)
        .count();
    assert_eq!(read_cols, MAX_COLUMNS);
    let output = output_text(&frames);
    assert_eq!(output.chars().count(), MAX_COLUMNS);
    assert!(output.starts_with("HELLOX"));

    let config = Configuration::new("HELLO")
        .with_columns(usize::MAX)
        .with_mode(Mode::Decrypt);
    let frames = build_frames(&config).expect("build frames");
    assert_eq!(output_text(&frames), "HELLO");
}

#[test]
fn empty_text_encrypts_to_empty() {
    let config = Configuration::new("").with_shift(4).with_columns(3);
    let frames = build_frames(&config).expect("build frames");
    // input, caesar x2, matrix-build, read-col x3, matrix-end, output
    assert_eq!(frames.len(), 9);
    assert_eq!(output_text(&frames), "");
}

#[test]
fn rebuild_rows_reveal_up_to_current() {
    let config = Configuration::new("ABCDE")
        .with_columns(3)
        .with_mode(Mode::Decrypt);
    let frames = build_frames(&config).expect("build frames");
    let rows: Vec<(usize, String)> = frames
        .iter()
        .filter_map(|frame| match &frame.payload {
            FramePayload::RebuildRow {
                row_index,
                rebuild_so_far,
                matrix,
            } => {
                assert_eq!(matrix.rows(), 2);
                Some((*row_index, rebuild_so_far.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        rows,
        vec![(0, "ACE".to_string()), (1, "ACEBD".to_string())]
    );
    assert_eq!(output_text(&frames), "ACEBD");
}
