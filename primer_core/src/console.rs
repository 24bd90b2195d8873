//! # Console Input
//!
//! Blocking, line-oriented prompts. Each prompt writes its text, flushes,
//! reads exactly one line and parses it. Nothing is retried: a bad line is
//! an error for the caller to report.
//!
//! `Console` is generic over its reader and writer so programs use
//! stdin/stdout while tests use in-memory buffers.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use primer_core::console::Console;
//!
//! let mut output = Vec::new();
//! let mut console = Console::new(Cursor::new("3\n"), &mut output);
//! let x = console.prompt_f64("x", "Enter a number: ").unwrap();
//! assert_eq!(x, 3.0);
//! ```

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use tracing::trace;

use crate::calculations::calculator::Operation;
use crate::errors::{PrimerError, PrimerResult};

/// Prompt text asked by the calculator for each operand
pub const NUMBER_PROMPT: &str = "Enter a number: ";

/// Prompt text asked by the calculator for the operation selector
pub const OPERATION_PROMPT: &str = "Enter an operation (1 = +, 2 = -, 3 = *, 4 = /): ";

/// Prompt text asked by the gravity simulation
pub const HEIGHT_PROMPT: &str = "Enter in your height value (m): ";

/// Prompt text asked by the sum utility for each operand
pub const INTEGER_PROMPT: &str = "Enter number.. ";

/// Line-oriented prompt reader.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Write `prompt`, then read and parse a real number for `field`.
    ///
    /// `inf`, `nan` and literals that overflow to infinity (`1e400`) are
    /// rejected as `InvalidInput`.
    pub fn prompt_f64(&mut self, field: &str, prompt: &str) -> PrimerResult<f64> {
        let text = self.read_trimmed(field, prompt)?;
        let value: f64 = parse(field, &text, "Expected a number")?;
        if !value.is_finite() {
            return Err(PrimerError::invalid_input(field, text, "Expected a finite number"));
        }
        Ok(value)
    }

    /// Write `prompt`, then read and parse a 32-bit integer for `field`.
    pub fn prompt_i32(&mut self, field: &str, prompt: &str) -> PrimerResult<i32> {
        self.prompt_parsed(field, prompt, "Expected a whole number between -2147483648 and 2147483647")
    }

    /// Write the operation prompt and read a selector.
    ///
    /// An integer that names no operation fails with `InvalidOperation`,
    /// anything that is not an integer fails with `InvalidInput`.
    pub fn prompt_operation(&mut self) -> PrimerResult<Operation> {
        let code: i64 = self.prompt_parsed("operation", OPERATION_PROMPT, "Expected an operation code")?;
        Operation::from_code(code)
    }

    /// Write a line of program output.
    pub fn println(&mut self, line: &str) -> PrimerResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    /// Consume the console, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt_parsed<T: FromStr>(&mut self, field: &str, prompt: &str, reason: &str) -> PrimerResult<T> {
        let text = self.read_trimmed(field, prompt)?;
        parse(field, &text, reason)
    }

    fn read_trimmed(&mut self, field: &str, prompt: &str) -> PrimerResult<String> {
        let line = self.read_line(field, prompt)?;
        let text = line.trim();
        trace!(field, text, "read console line");
        Ok(text.to_string())
    }

    fn read_line(&mut self, field: &str, prompt: &str) -> PrimerResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| PrimerError::io(format!("read {}", field), e.to_string()))?;
        if read == 0 {
            return Err(PrimerError::input_closed(field));
        }
        Ok(line)
    }
}

fn parse<T: FromStr>(field: &str, text: &str, reason: &str) -> PrimerResult<T> {
    text.parse()
        .map_err(|_| PrimerError::invalid_input(field, text, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_prompt_is_written() {
        let mut console = console("2.5\n");
        assert_eq!(console.prompt_f64("x", NUMBER_PROMPT).unwrap(), 2.5);
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, NUMBER_PROMPT);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut console = console("   -7  \r\n");
        assert_eq!(console.prompt_i32("x", INTEGER_PROMPT).unwrap(), -7);
    }

    #[test]
    fn test_reads_one_line_per_prompt() {
        let mut console = console("1\n2\n");
        assert_eq!(console.prompt_i32("x", INTEGER_PROMPT).unwrap(), 1);
        assert_eq!(console.prompt_i32("y", INTEGER_PROMPT).unwrap(), 2);
    }

    #[test]
    fn test_unparsable_number() {
        let mut console = console("twelve\n");
        let err = console.prompt_f64("x", NUMBER_PROMPT).unwrap_err();
        assert_eq!(
            err,
            PrimerError::invalid_input("x", "twelve", "Expected a number")
        );
    }

    #[test]
    fn test_integer_out_of_range_is_invalid_input() {
        let mut console = console("3000000000\n");
        let err = console.prompt_i32("x", INTEGER_PROMPT).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_end_of_input() {
        let mut console = console("");
        let err = console.prompt_f64("x", NUMBER_PROMPT).unwrap_err();
        assert_eq!(err, PrimerError::input_closed("x"));
    }

    #[test]
    fn test_prompt_operation() {
        let mut selected = console("3\n");
        assert_eq!(selected.prompt_operation().unwrap(), Operation::Multiply);

        let mut unknown = console("9\n");
        assert_eq!(
            unknown.prompt_operation().unwrap_err(),
            PrimerError::InvalidOperation { code: 9 }
        );

        let mut symbol = console("+\n");
        assert_eq!(symbol.prompt_operation().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for text in ["inf", "-inf", "nan", "NaN", "infinity", "1e400", "-1e400"] {
            let mut reader = console(&format!("{}\n", text));
            let err = reader.prompt_f64("x", NUMBER_PROMPT).unwrap_err();
            assert_eq!(
                err,
                PrimerError::invalid_input("x", text, "Expected a finite number"),
                "{text}"
            );
        }

        let mut large = console("1e300\n");
        assert_eq!(large.prompt_f64("x", NUMBER_PROMPT).unwrap(), 1e300);
    }
}
