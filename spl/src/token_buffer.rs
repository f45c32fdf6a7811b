// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{FileLocation, Token, TokenSource};

/// Gives the grammar a single token of lookahead on top of a [`TokenSource`].
pub struct TokenBuffer<S> {
    source: S,
    pushed_back: Option<Token>,
    location: FileLocation,
}

impl<S: TokenSource> TokenBuffer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pushed_back: None,
            location: FileLocation::default(),
        }
    }

    /// Returns the pushed back token if there is one, otherwise pulls a fresh
    /// token from the source.
    pub fn next(&mut self) -> Token {
        if let Some(token) = self.pushed_back.take() {
            return token;
        }

        let token = self.source.next_token();
        self.location = token.begin;
        token
    }

    /// # Panics
    /// When a token is already held. The grammar never reads more than one
    /// token ahead, so this can only be a bug in the caller.
    pub fn push_back(&mut self, token: Token) {
        if let Some(held) = &self.pushed_back {
            panic!("Cannot push back `{token}`, buffer still holds `{held}`");
        }

        self.pushed_back = Some(token);
    }

    /// Location of the token most recently pulled from the source.
    ///
    /// Pushing a token back does not rewind this.
    #[must_use]
    pub const fn location(&self) -> FileLocation {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lexer, TokenKind};

    #[test]
    fn pushed_back_token_is_returned_once() {
        let mut buffer = TokenBuffer::new(Lexer::new("print x"));

        let print = buffer.next();
        assert_eq!(print.kind, TokenKind::Print);

        buffer.push_back(print.clone());
        assert_eq!(buffer.next(), print);
        assert_eq!(buffer.next().kind, TokenKind::Identifier);
        assert_eq!(buffer.next().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn location_follows_the_source_not_the_pushback() {
        let mut buffer = TokenBuffer::new(Lexer::new("a\nb"));

        assert_eq!(buffer.next().line(), 1);
        assert_eq!(buffer.location().line(), 0);

        let b = buffer.next();
        assert_eq!(buffer.location().line(), 1);

        buffer.push_back(b);
        assert_eq!(buffer.location().line(), 1);
    }

    #[test]
    #[should_panic(expected = "buffer still holds")]
    fn double_pushback_aborts() {
        let mut buffer = TokenBuffer::new(Lexer::new("a b"));

        let a = buffer.next();
        let b = buffer.next();
        buffer.push_back(b);
        buffer.push_back(a);
    }
}
