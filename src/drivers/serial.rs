// Hexabit Pedometer: Serial Console Sink
//
// Prints each screen as plain text lines, preceded by a blank separator line.
// On the device stdout is the UART console.

use std::io::{self, Stdout, Write};

use crate::events::Snapshot;
use crate::screen;
use crate::tracker::DisplaySink;

pub struct SerialSink<W> {
    out: W,
    zero_pad_time: bool,
}

impl SerialSink<Stdout> {
    pub fn stdout(zero_pad_time: bool) -> Self {
        Self::new(io::stdout(), zero_pad_time)
    }
}

impl<W: Write> SerialSink<W> {
    pub fn new(out: W, zero_pad_time: bool) -> Self {
        Self { out, zero_pad_time }
    }

    pub fn print_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> anyhow::Result<()> {
        writeln!(self.out)?;
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplaySink for SerialSink<W> {
    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let lines = screen::screen_lines(snapshot, self.zero_pad_time);
        self.print_lines(&lines)
    }
}
