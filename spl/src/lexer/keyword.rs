// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

use super::TokenKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Begin,
    End,
    If,
    Print,
    Then,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }
}

impl From<Keyword> for TokenKind {
    fn from(value: Keyword) -> Self {
        match value {
            Keyword::Begin => Self::Begin,
            Keyword::End => Self::End,
            Keyword::If => Self::If,
            Keyword::Print => Self::Print,
            Keyword::Then => Self::Then,
        }
    }
}
