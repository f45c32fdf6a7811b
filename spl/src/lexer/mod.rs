// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod lexer;
mod token;
mod token_kind;
mod token_source;

pub use self::{
    keyword::Keyword,
    lexer::Lexer,
    token::Token,
    token_kind::TokenKind,
    token_source::TokenSource,
};
