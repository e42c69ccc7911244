use std::time::Duration;

pub const VIEWPORT_WIDTH: u16 = 80;
pub const VIEWPORT_HEIGHT: u16 = 30;

pub const LIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = '.';

/// Pause between frames. This only exists so a human can follow along.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Presentation settings for a simulation run.
///
/// None of this affects the simulation itself, only what gets shown and how fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Width of the viewport in cells
    pub width: u16,

    /// Height of the viewport in cells
    pub height: u16,

    pub live: char,
    pub dead: char,

    /// Time slept between rendering a generation and computing the next one
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            live: LIVE_GLYPH,
            dead: DEAD_GLYPH,
            interval: FRAME_INTERVAL,
        }
    }
}
