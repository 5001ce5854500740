use std::{convert::Infallible, io::Write};

/// Receives the demo output, one line at a time.
pub trait LineSink {
    type Error;
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Writes lines to any byte stream, typically stdout.
pub struct Console<W>(W);

impl<W: Write> Console<W> {
    pub fn new(writer: W) -> Self {
        Self(writer)
    }
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> LineSink for Console<W> {
    type Error = std::io::Error;
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        writeln!(self.0, "{line}")?;
        self.0.flush()
    }
}

impl LineSink for Vec<String> {
    type Error = Infallible;
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.push(line.to_string());
        Ok(())
    }
}
