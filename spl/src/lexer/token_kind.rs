// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum TokenKind {
    #[strum(serialize = "begin")]
    Begin,
    #[strum(serialize = "end")]
    End,
    #[strum(serialize = "print")]
    Print,
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "then")]
    Then,

    #[strum(serialize = "identifier")]
    Identifier,
    #[strum(serialize = "integer constant")]
    IntegerConstant,
    #[strum(serialize = "real constant")]
    RealConstant,
    #[strum(serialize = "string constant")]
    StringConstant,

    #[strum(serialize = "plus")]
    Plus,
    #[strum(serialize = "minus")]
    Minus,
    #[strum(serialize = "asterisk")]
    Multiply,
    #[strum(serialize = "solidus")]
    Divide,
    #[strum(serialize = "left parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "right parenthesis")]
    RightParenthesis,
    #[strum(serialize = "equals sign")]
    Equals,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "semicolon")]
    Semicolon,

    #[strum(serialize = "end of input")]
    EndOfInput,
    #[strum(serialize = "lexical error")]
    Error,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether a statement can start with this kind of token.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self, Self::Print | Self::If | Self::Identifier)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
