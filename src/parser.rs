// src/parser.rs
use crate::errors::FormulaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidSyntax(String),
}

impl From<ParseError> for FormulaError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidSyntax(msg) => FormulaError::InvalidSyntax(msg),
        }
    }
}

/// Character cursor over a borrowed string. Positions are byte offsets and
/// always sit on a char boundary.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Letter- or underscore-led run of letters, digits, `_` and `-`.
    pub fn parse_identifier(&mut self) -> Result<&'a str, ParseError> {
        match self.peek_char() {
            Some(c) if c == '_' || c.is_alphabetic() => {}
            _ => return Err(ParseError::InvalidSyntax("identifier expected".into())),
        }
        Ok(self.take_while(|c| c == '_' || c == '-' || c.is_alphanumeric()))
    }

    /// Unsigned decimal literal: `12`, `12.5`, `12.` or `.5`. A multi-digit
    /// integer part may not start with `0` (`010`, `00.5`).
    pub fn parse_number_literal(&mut self) -> Result<f64, ParseError> {
        let start = self.i;
        let int_part = self.take_while(|c| c.is_ascii_digit());
        if int_part.len() > 1 && int_part.starts_with('0') {
            self.i = start;
            return Err(ParseError::InvalidSyntax(format!("leading zero in '{int_part}'")));
        }
        if self.consume_char('.') {
            self.take_while(|c| c.is_ascii_digit());
        }
        let s = &self.s[start..self.i];
        if !s.bytes().any(|b| b.is_ascii_digit()) {
            self.i = start;
            return Err(ParseError::InvalidSyntax("number expected".into()));
        }
        s.parse::<f64>()
            .map_err(|_| ParseError::InvalidSyntax(format!("bad number '{s}'")))
    }

    /// Advances up to (not past) `end`. On failure the cursor is left at EOF.
    pub fn capture_until(&mut self, end: char) -> Result<&'a str, ParseError> {
        let start = self.i;
        self.take_while(|c| c != end);
        if self.peek_char() != Some(end) {
            return Err(ParseError::InvalidSyntax(format!("expected '{end}'")));
        }
        Ok(&self.s[start..self.i])
    }

    pub fn take_while<F>(&mut self, pred: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }

    pub fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(ParseError::InvalidSyntax(format!("expected '{c}'")))
        }
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next char.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn skip_ws(&mut self) {
        self.take_while(char::is_whitespace);
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
