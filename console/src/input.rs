use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-separated tokens, crossing line boundaries as needed.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Takes one non-whitespace character; the rest of its token stays queued.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let mut chars = token.chars();
        let first = chars.next();
        let rest = chars.as_str();
        if !rest.is_empty() {
            self.pending.push_front(rest.to_string());
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines_and_skip_blanks() {
        let mut reader = TokenReader::new(Cursor::new("h\n\n  5 7\n\t9\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("h"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("5"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("7"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("9"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_next_char_keeps_rest_of_token() {
        let mut reader = TokenReader::new(Cursor::new("h57
3
"));
        assert_eq!(reader.next_char().unwrap(), Some('h'));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("57"));
        assert_eq!(reader.next_char().unwrap(), Some('3'));
        assert_eq!(reader.next_char().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut reader = TokenReader::new(Cursor::new("3"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().unwrap(), None);
    }
}
