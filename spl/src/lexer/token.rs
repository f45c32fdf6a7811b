// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::FileLocation;

use super::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, begin: FileLocation, end: FileLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            begin,
            end,
        }
    }

    #[must_use]
    pub fn end_of_input(location: FileLocation) -> Self {
        Self::new(TokenKind::EndOfInput, "", location, location)
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Identifier => Some(&self.lexeme),
            _ => None,
        }
    }

    /// One-based source line on which the token starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.begin.line() + 1
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => self.kind.fmt(f),
            TokenKind::StringConstant => f.write_fmt(format_args!("\"{}\"", self.lexeme)),
            _ => f.write_str(&self.lexeme),
        }
    }
}
