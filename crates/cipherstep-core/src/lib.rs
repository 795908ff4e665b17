//! Frame generation and playback for the cipher visualizer.
//!
//! - [`build_frames`] turns a [`Configuration`](cipherstep_model::Configuration)
//!   into an ordered, immutable frame sequence.
//! - [`Player`] steps through a sequence manually or on a timer and hands each
//!   shown frame to a [`Presenter`].
//!
//! ```
//! use cipherstep_core::{Player, build_frames};
//! use cipherstep_model::Configuration;
//!
//! let config = Configuration::new("HI").with_shift(1).with_columns(2);
//! let frames = build_frames(&config).unwrap();
//! assert_eq!(frames.len(), 8);
//!
//! let mut player = Player::new();
//! player.load(frames);
//! player.next();
//! assert_eq!(player.current_frame().map(|f| f.id.as_str()), Some("input"));
//! ```

pub mod clock;
pub mod frame_builder;
pub mod player;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_builder::build_frames;
pub use player::{DEFAULT_INTERVAL, MIN_INTERVAL, Player, Presenter};
