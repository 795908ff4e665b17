use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cipherstep_cli::render::{RenderOptions, TerminalPresenter, frame_table};
use cipherstep_cli::request::PipelineRequest;
use cipherstep_cli::step::{STEP_HELP, StepCommand};
use cipherstep_core::{Player, build_frames};
use cipherstep_model::{Frame, FramePayload};

use crate::cli::{FramesArgs, ListFormatArg, PipelineArgs, PlayArgs};

fn frames_for(request: &PipelineRequest) -> Result<Vec<Frame>> {
    let config = request.to_configuration();
    info!(
        mode = config.mode.as_str(),
        shift = config.use_shift_cipher.then_some(config.shift),
        columns = config.use_columnar.then_some(config.columns),
        text_len = config.text.chars().count(),
        "building frames"
    );
    build_frames(&config).context("build frames")
}

pub fn run_frames(args: &FramesArgs, options: RenderOptions) -> Result<()> {
    let frames = frames_for(&args.pipeline.request())?;
    match args.format {
        ListFormatArg::Table => println!("{}", frame_table(&frames, options)),
        ListFormatArg::Json => {
            let json = serde_json::to_string_pretty(&frames).context("serialize frames")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_apply(args: &PipelineArgs) -> Result<()> {
    let frames = frames_for(&args.request())?;
    match frames.last().map(|frame| &frame.payload) {
        Some(FramePayload::Output { text }) => {
            println!("{text}");
            Ok(())
        }
        _ => anyhow::bail!("frame sequence did not end with an output frame"),
    }
}

pub fn run_play(args: &PlayArgs, options: RenderOptions) -> Result<()> {
    let frames = frames_for(&args.pipeline.request())?;
    let span = info_span!("play", frame_count = frames.len());
    let _guard = span.enter();

    let presenter = TerminalPresenter::new(io::stdout(), frames.len(), options);
    let mut player = Player::new()
        .with_presenter(presenter)
        .with_interval(Duration::from_millis(args.interval_ms));
    player.load(frames);
    player.next();
    player.play();
    info!(interval_ms = player.interval().as_millis(), "playback started");

    while let Some(wait) = player.time_until_tick() {
        thread::sleep(wait);
        player.tick();
    }
    info!(index = ?player.current_index(), "playback finished");
    Ok(())
}

pub fn run_step(args: &PipelineArgs, options: RenderOptions) -> Result<()> {
    let frames = frames_for(&args.request())?;
    let presenter = TerminalPresenter::new(io::stdout(), frames.len(), options);
    let mut player = Player::new().with_presenter(presenter);
    player.load(frames);

    eprintln!("{STEP_HELP}");
    player.next();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        eprint!("> ");
        io::stderr().flush().context("flush prompt")?;
        line.clear();
        if stdin.lock().read_line(&mut line).context("read command")? == 0 {
            break;
        }
        let Some(command) = StepCommand::parse(&line) else {
            eprintln!("unknown command; {STEP_HELP}");
            continue;
        };
        debug!(?command, "step command");
        if !command.apply(&mut player) {
            break;
        }
    }
    Ok(())
}
