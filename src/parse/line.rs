//! Splitting one line of a data file into words and a trailing comment.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::token::{Loc, Token};

/// A word on a line. Quoted words are stored without their quotes.
#[derive(Debug, Clone)]
pub struct Word {
    pub token: Token,
    pub quoted: bool,
}

impl Word {
    pub fn number(&self) -> Option<u32> {
        if self.quoted {
            None
        } else {
            self.token.get_number()
        }
    }
}

/// One lexed line: its words, and whatever followed the `#` comment marker.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub words: Vec<Word>,
    /// The comment text, trimmed. `None` if there was no comment or it was blank.
    pub comment: Option<Token>,
}

impl SourceLine {
    pub fn keyword(&self) -> Option<&Word> {
        self.words.first().filter(|word| !word.quoted)
    }

    /// The word at position `idx` as a number, if it is one.
    pub fn number(&self, idx: usize) -> Option<u32> {
        self.words.get(idx).and_then(Word::number)
    }

    pub fn comment_str(&self) -> Option<&str> {
        self.comment.as_ref().map(Token::as_str)
    }
}

struct Lexer<'a> {
    line: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Column of the next char, 1-based and counted in chars.
    column: u32,
    loc: Loc,
}

impl<'a> Lexer<'a> {
    fn next_char(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if next.is_some() {
            self.column += 1;
        }
        next
    }

    fn loc_here(&self) -> Loc {
        let mut loc = self.loc.clone();
        loc.column = self.column;
        loc
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            self.next_char();
        }
    }

    /// Everything after the `#`, trimmed.
    fn comment(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let loc = self.loc_here();
        let start = self.chars.peek()?.0;
        let text = self.line[start..].trim_end();
        if text.is_empty() {
            None
        } else {
            Some(Token::new(text.to_owned(), loc))
        }
    }

    /// A quoted string. An unterminated quote runs to the end of the line.
    fn quoted(&mut self, loc: Loc) -> Word {
        let mut s = String::new();
        while let Some((_, c)) = self.next_char() {
            if c == '"' {
                break;
            }
            s.push(c);
        }
        Word { token: Token::new(s, loc), quoted: true }
    }

    fn bare(&mut self, loc: Loc) -> Word {
        let mut s = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == '"' || c == '#' {
                break;
            }
            s.push(c);
            self.next_char();
        }
        Word { token: Token::new(s, loc), quoted: false }
    }

    fn run(mut self) -> SourceLine {
        let mut words = Vec::new();
        let mut comment = None;
        loop {
            self.skip_whitespace();
            let Some(&(_, c)) = self.chars.peek() else {
                break;
            };
            let loc = self.loc_here();
            match c {
                '#' => {
                    self.next_char();
                    comment = self.comment();
                    break;
                }
                '"' => {
                    self.next_char();
                    words.push(self.quoted(loc));
                }
                _ => words.push(self.bare(loc)),
            }
        }
        SourceLine { words, comment }
    }
}

/// Lex one line. `loc` should point at the line; its column is ignored.
pub fn lex_line(line: &str, loc: Loc) -> SourceLine {
    Lexer { line, chars: line.char_indices().peekable(), column: 1, loc }.run()
}
