//! User-facing status lines on stderr

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    fn color(self) -> Color {
        match self {
            Status::Success => Color::Green,
            Status::Warning => Color::Yellow,
            Status::Error => Color::Red,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Status::Success => "done",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

/// Write `label: message` with a colored, bold label.
pub fn write_status<W: WriteColor>(out: &mut W, status: Status, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(status.color())).set_bold(true))?;
    write!(out, "{}", status.label())?;
    out.reset()?;
    writeln!(out, ": {}", message)
}

pub fn print_status(status: Status, message: &str, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    write_status(&mut stderr, status, message)
}
