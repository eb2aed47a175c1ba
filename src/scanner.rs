// src/scanner.rs
use crate::condition::NEGATION;

pub const TAG_OPEN: &str = "[[";
pub const TAG_CLOSE: &str = "]]";
const IF_KEYWORD: &str = "IF:";
const ENDIF_KEYWORD: &str = "ENDIF:";

/// A well-formed `[[...]]` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `[[IF:token]]`, token may carry a leading `!`
    If(&'a str),
    /// `[[ENDIF:token]]`
    EndIf(&'a str),
    /// `[[token]]`
    Placeholder(&'a str),
}

/// Letters, digits and underscore, as in a regex `\w`.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Byte cursor over template text.
pub struct Scanner<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn peek_str(&self, lit: &str) -> bool {
        self.s[self.i..].starts_with(lit)
    }

    pub fn bump(&mut self) {
        if let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
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

    pub fn consume_str(&mut self, lit: &str) -> bool {
        if self.peek_str(lit) {
            self.i += lit.len();
            true
        } else {
            false
        }
    }

    /// ASCII case-insensitive version of [`Scanner::consume_str`].
    pub fn consume_keyword(&mut self, kw: &str) -> bool {
        match self.s.get(self.i..self.i + kw.len()) {
            Some(head) if head.eq_ignore_ascii_case(kw) => {
                self.i += kw.len();
                true
            }
            _ => false,
        }
    }

    /// Move to the next occurrence of `lit`, or to the end.
    pub fn skip_to(&mut self, lit: &str) -> bool {
        match self.s[self.i..].find(lit) {
            Some(off) => {
                self.i += off;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }

    /// Consume a non-empty run of word characters.
    pub fn parse_word(&mut self) -> Option<&'a str> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if is_word_char(c) {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
        if self.i == start {
            None
        } else {
            Some(&self.s[start..self.i])
        }
    }

    /// Consume `\n` or `\r\n`.
    pub fn line_break(&mut self) -> bool {
        self.consume_char('\n') || self.consume_str("\r\n")
    }

    /// Read a tag at the cursor. On failure the cursor is left untouched.
    pub fn read_tag(&mut self) -> Option<Tag<'a>> {
        let start = self.i;
        let tag = self.try_tag();
        if tag.is_none() {
            self.i = start;
        }
        tag
    }

    fn try_tag(&mut self) -> Option<Tag<'a>> {
        if !self.consume_str(TAG_OPEN) {
            return None;
        }
        let after_open = self.i;
        if self.consume_keyword(ENDIF_KEYWORD) {
            if let Some(token) = self.block_token() {
                return Some(Tag::EndIf(token));
            }
        }
        self.i = after_open;
        if self.consume_keyword(IF_KEYWORD) {
            if let Some(token) = self.block_token() {
                return Some(Tag::If(token));
            }
        }
        self.i = after_open;
        let word = self.parse_word()?;
        if self.consume_str(TAG_CLOSE) {
            Some(Tag::Placeholder(word))
        } else {
            None
        }
    }

    fn block_token(&mut self) -> Option<&'a str> {
        let start = self.i;
        self.consume_char(NEGATION);
        self.parse_word()?;
        let token = &self.s[start..self.i];
        if self.consume_str(TAG_CLOSE) {
            Some(token)
        } else {
            None
        }
    }
}
