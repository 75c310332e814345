//! Line-oriented prompts over a reader and a writer.

use hobart::Prompter;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Asks on `output`, answers from `input`, one line at a time.
#[derive(Debug)]
pub(crate) struct LinePrompter<R, W> {
    input: R,
    output: W,
}

/// Prompter for the controlling terminal.
pub(crate) type StdinPrompter = LinePrompter<StdinLock<'static>, Stdout>;

impl StdinPrompter {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_answers_then_end_of_input() {
        let mut output = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("dow\r\n 12 \n"), &mut output);

        assert_eq!(prompter.ask("Index? ").unwrap().as_deref(), Some("dow"));
        assert_eq!(prompter.ask("Size? ").unwrap().as_deref(), Some(" 12 "));
        assert_eq!(prompter.ask("Budget? ").unwrap(), None);
        prompter.say("bye").unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Index? Size? Budget? \nbye\n"
        );
    }

    #[test]
    fn test_blank_line_is_an_answer() {
        let mut prompter = LinePrompter::new(Cursor::new("\n"), io::sink());
        assert_eq!(prompter.ask("Again? ").unwrap().as_deref(), Some(""));
    }
}
