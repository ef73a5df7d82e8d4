//! Line-oriented terminal I/O for the interactive loop.
//!
//! Reads and writes go through borrowed trait objects so the whole menu
//! can be driven from a byte buffer in tests.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) struct Console<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub(crate) fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Print `prompt` and read one line, trimmed.
    ///
    /// End of input is [`CliError::InputClosed`].
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing each rejection.
    pub(crate) fn ask_until<T, E: std::fmt::Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, CliError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.warn(&e.to_string())?,
            }
        }
    }

    pub(crate) fn say(&mut self, line: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub(crate) fn blank(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        Ok(())
    }

    pub(crate) fn heading(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{}", text.if_supports_color(Stdout, |t| t.bold()))?;
        Ok(())
    }

    pub(crate) fn success(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{}", text.if_supports_color(Stdout, |t| t.green()))?;
        Ok(())
    }

    pub(crate) fn warn(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{}", text.if_supports_color(Stdout, |t| t.yellow()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut input: &[u8] = b"  hello \n";
        let mut out = Vec::new();
        let mut console = Console::new(&mut input, &mut out);

        assert_eq!(console.ask("> ").unwrap(), "hello");
        assert!(matches!(console.ask("> "), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_ask_until_reprompts() {
        let mut input: &[u8] = b"abc\n\n42\n";
        let mut out = Vec::new();
        {
            let mut console = Console::new(&mut input, &mut out);
            let n: i32 = console
                .ask_until("Number: ", |s| s.parse::<i32>())
                .unwrap();
            assert_eq!(n, 42);
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Number: ").count(), 3);
    }
}
