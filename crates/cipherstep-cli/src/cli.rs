//! CLI argument definitions for the cipher visualizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cipherstep_cli::request::PipelineRequest;
use cipherstep_model::Mode;

#[derive(Parser)]
#[command(
    name = "cipherstep",
    version,
    about = "Step-by-step visualizer for a Caesar shift and columnar transposition pipeline",
    long_about = "Build the frame sequence of a two-stage classical cipher and inspect it.\n\n\
                  Encrypt runs the shift cipher then the columnar transposition;\n\
                  decrypt runs the inverses in reverse order. Pass --shift and/or\n\
                  --columns to enable each stage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every frame of the pipeline.
    Frames(FramesArgs),

    /// Auto-play the frames in the terminal.
    Play(PlayArgs),

    /// Step through the frames interactively.
    Step(PipelineArgs),

    /// Print only the final output text.
    Run(PipelineArgs),
}

#[derive(Args)]
pub struct PipelineArgs {
    /// Text to encrypt or decrypt.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Direction of the pipeline.
    #[arg(long = "mode", value_enum, default_value = "encrypt")]
    pub mode: ModeArg,

    /// Enable the Caesar stage with this shift (integer; other input is coerced).
    #[arg(long = "shift", value_name = "SHIFT", allow_hyphen_values = true)]
    pub shift: Option<String>,

    /// Enable the columnar stage with this many columns (at least 1).
    #[arg(long = "columns", value_name = "COLUMNS", allow_hyphen_values = true)]
    pub columns: Option<String>,
}

impl PipelineArgs {
    pub fn request(&self) -> PipelineRequest {
        PipelineRequest {
            text: self.text.clone(),
            mode: self.mode.into(),
            shift: self.shift.clone(),
            columns: self.columns.clone(),
        }
    }
}

#[derive(Args)]
pub struct FramesArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Listing format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Delay between frames in milliseconds (minimum 10).
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = 700)]
    pub interval_ms: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Encrypt,
    Decrypt,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Encrypt => Mode::Encrypt,
            ModeArg::Decrypt => Mode::Decrypt,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_shift_is_accepted() {
        let cli = Cli::try_parse_from([
            "cipherstep",
            "run",
            "HELLO",
            "--shift",
            "-3",
            "--mode",
            "decrypt",
        ])
        .expect("parse");
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let request = args.request();
        assert_eq!(request.shift.as_deref(), Some("-3"));
        assert_eq!(request.mode, Mode::Decrypt);
        assert!(request.columns.is_none());
    }

    #[test]
    fn play_interval_defaults_to_700ms() {
        let cli = Cli::try_parse_from(["cipherstep", "play", "HI", "--columns", "2"]).expect("parse");
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.interval_ms, 700);
        assert_eq!(args.pipeline.columns.as_deref(), Some("2"));
    }
}
