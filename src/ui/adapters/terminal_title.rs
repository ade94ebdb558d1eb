use std::io::{Stdout, Write, stdout};

use crossterm::execute;
use crossterm::terminal::SetTitle;

use tabmarquee_app::ports::{TitleSink, TitleSinkError};

/// Writes the marquee into the terminal window title via an OSC sequence.
pub struct TerminalTitleSink<W: Write + Send = Stdout> {
    out: W,
}

impl TerminalTitleSink<Stdout> {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for TerminalTitleSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> TerminalTitleSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> TitleSink for TerminalTitleSink<W> {
    fn set_title(&mut self, title: &str) -> Result<(), TitleSinkError> {
        execute!(self.out, SetTitle(title)).map_err(|e| TitleSinkError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_osc_title_sequence() {
        let mut sink = TerminalTitleSink::with_writer(Vec::new());

        sink.set_title("BA").unwrap();

        assert_eq!(sink.into_inner(), b"\x1b]0;BA\x07");
    }

    #[test]
    fn keeps_non_ascii_title_intact() {
        let mut sink = TerminalTitleSink::with_writer(Vec::new());

        sink.set_title("N\u{1ec1}n").unwrap();

        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "\x1b]0;N\u{1ec1}n\x07"
        );
    }

    #[test]
    fn io_failure_maps_to_write_failed() {
        let mut sink = TerminalTitleSink::with_writer(BrokenPipe);

        let result = sink.set_title("AB");

        assert!(matches!(result, Err(TitleSinkError::WriteFailed(_))));
    }
}
