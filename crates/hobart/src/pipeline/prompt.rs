//! The interactive seam of the pipeline.

use std::io;

/// Line-oriented conversation with the user.
pub trait Prompter {
    /// Show `message` and read one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    fn ask(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Show informational text.
    fn say(&mut self, text: &str) -> io::Result<()>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        (**self).ask(message)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        (**self).say(text)
    }
}
