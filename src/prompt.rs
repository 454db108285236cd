use std::io::{self, BufRead, Write};

/// Request/response boundary between the ATM and its user.
pub trait Prompt {
    /// Shows `text` under `title` and returns the user's raw answer.
    fn ask(&mut self, text: &str, title: &str) -> io::Result<String>;

    /// Shows a message that needs no answer.
    fn show(&mut self, message: &str) -> io::Result<()>;
}

/// Line oriented prompt over any reader and writer.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompt { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask(&mut self, text: &str, title: &str) -> io::Result<String> {
        writeln!(self.output, "== {} ==", title)?;
        writeln!(self.output, "{}", text)?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn show(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }
}
