//! Step player for a frame sequence.
//!
//! The [`Player`] owns the loaded frames, the current position, and the
//! auto-advance schedule. Auto-advance is cooperative: the driver calls
//! [`Player::tick`] from its event loop and the player advances at most one
//! frame each time its deadline has passed. Cancelling the schedule only clears
//! the deadline, so it is synchronous and safe to repeat.
//!
//! # States
//!
//! ```text
//!            load              go_to / next / previous
//!   Empty ---------> Empty ---------------------------> Positioned
//!                      |  play (first tick shows frame 0)    |
//!                      +-------------------------------------+
//! ```
//!
//! Playing/paused is orthogonal to the position. Explicit navigation always
//! pauses first, so a manual jump never races a scheduled advance.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use cipherstep_model::Frame;

use crate::clock::{Clock, SystemClock};

/// Default delay between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(700);

/// Shortest accepted delay between automatic advances.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Receives every frame the player shows and every playback change.
pub trait Presenter {
    fn show(&mut self, index: usize, frame: &Frame);

    fn playback_changed(&mut self, _playing: bool) {}
}

pub struct Player {
    frames: Vec<Frame>,
    current: Option<usize>,
    playing: bool,
    interval: Duration,
    next_due: Option<Instant>,
    clock: Box<dyn Clock>,
    presenter: Option<Box<dyn Presenter>>,
}

impl Player {
    /// Creates an empty player on the system clock with no presenter.
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            current: None,
            playing: false,
            interval: DEFAULT_INTERVAL,
            next_due: None,
            clock: Box::new(SystemClock),
            presenter: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    /// Replaces the sequence and returns to the empty position.
    ///
    /// Any running auto-advance is cancelled before the frames are swapped.
    pub fn load(&mut self, frames: Vec<Frame>) {
        self.pause();
        debug!(frame_count = frames.len(), "frames loaded");
        self.frames = frames;
        self.current = None;
    }

    /// Drops all frames.
    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    /// Shows the frame at `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.frames.len() {
            return;
        }
        self.pause();
        self.show(index);
    }

    /// Shows the following frame, or pauses when already at the last one.
    pub fn next(&mut self) {
        self.pause();
        self.advance();
    }

    /// Shows the preceding frame, if any.
    pub fn previous(&mut self) {
        self.pause();
        if let Some(index) = self.current.filter(|&index| index > 0) {
            self.show(index - 1);
        }
    }

    /// Starts auto-advance. Restarts from the beginning when the last frame
    /// is showing; the first tick then shows frame 0.
    pub fn play(&mut self) {
        if self.frames.is_empty() || self.playing {
            return;
        }
        if self.is_at_end() {
            self.current = None;
        }
        self.playing = true;
        self.next_due = Some(self.clock.now() + self.interval);
        debug!(interval_ms = self.interval.as_millis(), "playback started");
        self.notify_playback();
    }

    /// Stops auto-advance. Calling it while paused does nothing.
    pub fn pause(&mut self) {
        self.next_due = None;
        if self.playing {
            self.playing = false;
            debug!(index = ?self.current, "playback paused");
            self.notify_playback();
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Changes the auto-advance delay.
    ///
    /// While playing, the schedule restarts from now with the new delay; the
    /// current frame stays as is.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(MIN_INTERVAL);
        if self.playing {
            self.next_due = Some(self.clock.now() + self.interval);
        }
    }

    /// Runs the auto-advance if its deadline has passed.
    ///
    /// Returns `true` when a new frame was shown.
    pub fn tick(&mut self) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        let now = self.clock.now();
        if now < due {
            return false;
        }
        if self.is_at_end() {
            self.pause();
            return false;
        }
        self.next_due = Some(now + self.interval);
        self.advance()
    }

    /// Time left before the next scheduled advance, if playing.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(self.clock.now()))
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.and_then(|index| self.frames.get(index))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 >= self.frames.len())
    }

    fn advance(&mut self) -> bool {
        let next = self.current.map_or(0, |index| index + 1);
        if next < self.frames.len() {
            self.show(next);
            true
        } else {
            self.pause();
            false
        }
    }

    fn show(&mut self, index: usize) {
        self.current = Some(index);
        let frame = &self.frames[index];
        trace!(index, id = %frame.id, kind = %frame.kind(), "frame shown");
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.show(index, frame);
        }
    }

    fn notify_playback(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.playback_changed(self.playing);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("frames", &self.frames.len())
            .field("current", &self.current)
            .field("playing", &self.playing)
            .field("interval", &self.interval)
            .field("next_due", &self.next_due)
            .finish_non_exhaustive()
    }
}
