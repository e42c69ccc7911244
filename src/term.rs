use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use crate::board::Board;
use crate::config::Config;
use crate::driver::Render;
use crate::viewport::Viewport;

/// Draws each generation to a terminal, replacing whatever was there before.
pub struct Terminal<W: Write> {
    out: W,
    viewport: Viewport,
}

impl Terminal<io::Stdout> {
    pub fn stdout(config: &Config) -> Self {
        Self::new(io::stdout(), Viewport::from_config(config))
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self { out, viewport }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for Terminal<W> {
    fn render(&mut self, board: &Board) -> io::Result<()> {
        let frame = self.viewport.render(board);

        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        // Not in raw mode, but print line by line anyway so a stray `\n` never drifts the column
        for line in frame.lines() {
            queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        self.out.flush()
    }
}
