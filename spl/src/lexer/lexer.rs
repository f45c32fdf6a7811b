// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::CharIndices;

use crate::FileLocation;

use super::{Keyword, Token, TokenKind, TokenSource};

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 0,
            column: 0,
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        self.skip_whitespace_and_comments();

        let ch = self.peek_char()?;
        let tok = match ch {
            '"' => self.consume_string(),

            'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier_or_keyword(),
            '0'..='9' => self.consume_number(),

            '(' => self.consume_single_char_token(TokenKind::LeftParenthesis),
            ')' => self.consume_single_char_token(TokenKind::RightParenthesis),
            ';' => self.consume_single_char_token(TokenKind::Semicolon),
            ',' => self.consume_single_char_token(TokenKind::Comma),
            '=' => self.consume_single_char_token(TokenKind::Equals),
            '+' => self.consume_single_char_token(TokenKind::Plus),
            '-' => self.consume_single_char_token(TokenKind::Minus),
            '*' => self.consume_single_char_token(TokenKind::Multiply),
            '/' => self.consume_single_char_token(TokenKind::Divide),

            _ => self.consume_single_char_token(TokenKind::Error),
        };

        if let Some(token) = &tok {
            log::trace!("Lexed {} `{}` at {}", token.kind, token.lexeme, token.begin);
        }

        tok
    }

    fn consume_single_char_token(&mut self, kind: TokenKind) -> Option<Token> {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Some(self.token_between(kind, begin, end))
    }

    fn consume_string(&mut self) -> Option<Token> {
        let begin = self.current_location();

        assert_eq!(self.next_char(), Some('"'));

        let offset_begin = self.current_location().offset();

        loop {
            match self.peek_char() {
                Some('"') => break,

                // An unterminated string only runs to the end of its line.
                None | Some('\n') | Some('\r') => {
                    let end = self.current_location();
                    return Some(self.token_between(TokenKind::Error, begin, end));
                }

                Some(..) => self.consume_char(),
            }
        }

        let offset_end = self.current_location().offset();
        let lexeme = self.input[offset_begin..offset_end].to_string();

        self.consume_char();

        let end = self.current_location();

        Some(Token::new(TokenKind::StringConstant, lexeme, begin, end))
    }

    fn consume_identifier_or_keyword(&mut self) -> Option<Token> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match Keyword::parse(str) {
            Some(keyword) => keyword.into(),
            None => TokenKind::Identifier,
        };

        Some(Token::new(kind, str, begin, end))
    }

    fn consume_number(&mut self) -> Option<Token> {
        let begin = self.current_location();

        self.consume_digits();

        let kind = if self.peek_char() == Some('.') {
            self.consume_char();

            if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.consume_digits();
                TokenKind::RealConstant
            } else {
                TokenKind::Error
            }
        } else {
            TokenKind::IntegerConstant
        };

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match kind {
            TokenKind::IntegerConstant if str.parse::<i32>().is_err() => TokenKind::Error,
            kind => kind,
        };

        Some(Token::new(kind, str, begin, end))
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();

            let offset = self.current_location().offset();
            if !self.input[offset..].starts_with("//") {
                break;
            }

            self.consume_until_end_of_line();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }

            if c == '\r' {
                if self.peek_char() == Some('\n') {
                    self.consume_char();
                }

                break;
            }
        }
    }

    fn token_between(&self, kind: TokenKind, begin: FileLocation, end: FileLocation) -> Token {
        Token::new(kind, &self.input[begin.offset()..end.offset()], begin, end)
    }

    pub fn collect_all(self) -> Vec<Token> {
        self.collect()
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<'source_code> TokenSource for Lexer<'source_code> {
    fn next_token(&mut self) -> Token {
        match self.next() {
            Some(token) => token,
            None => Token::end_of_input(self.current_location()),
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
