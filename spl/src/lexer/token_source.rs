// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::vec;

use crate::FileLocation;

use super::Token;

/// Anything that hands out tokens one at a time, in source order.
///
/// Once the input is exhausted, every further call must return a token of
/// kind [`TokenKind::EndOfInput`](super::TokenKind::EndOfInput).
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next()
            .unwrap_or_else(|| Token::end_of_input(FileLocation::default()))
    }
}
