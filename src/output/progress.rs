//! Terminal progress bar fed by catalog progress events

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalog::ProgressSink;

const BAR_WIDTH: usize = 30;

/// Redraws a single `[#####.....]  42%` line in place.
pub struct ProgressBar<W: WriteColor> {
    out: W,
    drawn: bool,
}

impl ProgressBar<StandardStream> {
    pub fn stderr(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> ProgressBar<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: false }
    }

    /// End the bar's line so later output starts on a fresh one.
    pub fn finish(&mut self) {
        if self.drawn {
            let _ = writeln!(self.out);
            let _ = self.out.flush();
            self.drawn = false;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, percent: u8) -> std::io::Result<()> {
        let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
        write!(self.out, "\r[")?;
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "{}", "#".repeat(filled))?;
        self.out.reset()?;
        write!(self.out, "{}] {:>3}%", ".".repeat(BAR_WIDTH - filled), percent)?;
        self.out.flush()
    }
}

impl<W: WriteColor> ProgressSink for ProgressBar<W> {
    fn on_progress(&mut self, percent: u8) {
        // Drawing is best effort; a closed stderr must not fail the build.
        if self.draw(percent).is_ok() {
            self.drawn = true;
        }
    }
}
