//! Keyboard commands for interactive stepping.

use cipherstep_core::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCommand {
    Next,
    Previous,
    First,
    Last,
    /// Zero-based target; typed 1-based.
    GoTo(usize),
    Quit,
}

impl StepCommand {
    /// Parses one input line. Empty input means "next".
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            None | Some("n" | "next") => Self::Next,
            Some("p" | "prev" | "previous") => Self::Previous,
            Some("f" | "first") => Self::First,
            Some("l" | "last") => Self::Last,
            Some("q" | "quit" | "exit") => Self::Quit,
            Some("g" | "go") => {
                let position: usize = words.next()?.parse().ok()?;
                Self::GoTo(position.checked_sub(1)?)
            }
            Some(_) => return None,
        };
        if words.next().is_some() {
            return None;
        }
        Some(command)
    }

    /// Applies the command to `player`. Returns `false` for [`StepCommand::Quit`].
    pub fn apply(self, player: &mut Player) -> bool {
        match self {
            Self::Next => player.next(),
            Self::Previous => player.previous(),
            Self::First => player.go_to(0),
            Self::Last => {
                if let Some(last) = player.frames().len().checked_sub(1) {
                    player.go_to(last);
                }
            }
            Self::GoTo(index) => player.go_to(index),
            Self::Quit => return false,
        }
        true
    }
}

pub const STEP_HELP: &str = "n/Enter next, p previous, f first, l last, g N go to frame N, q quit";
