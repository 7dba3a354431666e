//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Writes prompts and reads the answers, one line at a time.
///
/// End of input surfaces as [`io::ErrorKind::UnexpectedEof`] so the menu loop
/// can wind down cleanly when stdin closes.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Prints `prompt` and returns the answer without surrounding whitespace.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as an integer.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<i32> {
        loop {
            let answer = self.read_line(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("\tNumber expected - try again")?,
            }
        }
    }

    /// Like [`read_int`](Self::read_int) but rejects negatives, for ids.
    pub fn read_id(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            let answer = self.read_line(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("\tId expected - try again")?,
            }
        }
    }

    /// Prompts until the answer has at least one character and returns the first.
    pub fn read_char(&mut self, prompt: &str) -> io::Result<char> {
        loop {
            let answer = self.read_line(prompt)?;
            if let Some(c) = answer.chars().next() {
                return Ok(c);
            }
            self.say("\tCharacter expected - try again")?;
        }
    }

    /// Yes/no question; anything starting with `y` or `Y` is yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(matches!(self.read_char(prompt)?, 'y' | 'Y'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_read_int_valid_input() {
        let mut p = prompter("123\n");
        assert_eq!(p.read_int("Enter an integer: ").unwrap(), 123);
        assert_eq!(written(p), "Enter an integer: ");
    }

    #[test]
    fn test_read_int_retries_until_number() {
        let mut p = prompter("abc\n-4\n");
        assert_eq!(p.read_int("> ").unwrap(), -4);
        assert_eq!(written(p), "> \tNumber expected - try again\n> ");
    }

    #[test]
    fn test_read_id_rejects_negative() {
        let mut p = prompter("-1\n2\n");
        assert_eq!(p.read_id("> ").unwrap(), 2);
    }

    #[test]
    fn test_read_line_trims() {
        let mut p = prompter("  This is a line of text  \n");
        assert_eq!(
            p.read_line("Enter a line of text: ").unwrap(),
            "This is a line of text"
        );
    }

    #[test]
    fn test_read_char_skips_blank_lines() {
        let mut p = prompter("\nabc\n");
        assert_eq!(p.read_char("Enter a character: ").unwrap(), 'a');
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("Yes\nn\n");
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        let err = p.read_line("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
