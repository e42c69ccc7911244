use crate::Coord;
use crate::board::Board;
use crate::cell::Cell;
use crate::config::Config;

/// A fixed window onto the plane, anchored at the origin.
///
/// Row `y` of the frame shows cells `(0, y)` through `(w - 1, y)`. Everything outside the window
/// is still simulated, it just never shows up here.
pub struct Viewport {
    /// The frame buffer. Reused between renders to avoid reallocating every generation.
    fb: String,

    /// Width of the window in cells
    w: u16,

    /// Height of the window in cells
    h: u16,

    live: char,
    dead: char,
}

impl Viewport {
    pub fn new(w: u16, h: u16) -> Self {
        let defaults = Config::default();

        Self::with_glyphs(w, h, defaults.live, defaults.dead)
    }

    pub fn with_glyphs(w: u16, h: u16, live: char, dead: char) -> Self {
        // Every row is `w` glyphs followed by a newline
        let glyph_len = live.len_utf8().max(dead.len_utf8());
        let fb = String::with_capacity((w as usize * glyph_len + 1) * h as usize);

        Self {
            fb,
            w,
            h,
            live,
            dead,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_glyphs(config.width, config.height, config.live, config.dead)
    }

    /// Draw the window of `board` into the frame buffer, one line per row.
    pub fn render(&mut self, board: &Board) -> &str {
        self.fb.clear();

        for y in 0..self.h {
            for x in 0..self.w {
                let cell = Cell::new(x as Coord, y as Coord);

                self.fb.push(if board.is_alive(cell) {
                    self.live
                } else {
                    self.dead
                });
            }

            self.fb.push('\n');
        }

        &self.fb
    }
}
