// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod diagnostic;
mod interpreter;
mod lexer;
mod symbol_table;
mod token_buffer;
mod util;
mod value;

pub use self::{
    config::{ConfigRoot, ConfigSectionCli, ConfigSectionLog},
    diagnostic::{Diagnostic, DiagnosticCategory, DiagnosticKind, Diagnostics},
    interpreter::{Interpreter, ParseError, ParseResult},
    lexer::{Keyword, Lexer, Token, TokenKind, TokenSource},
    symbol_table::{AssignError, SymbolTable},
    token_buffer::TokenBuffer,
    util::{FileLocation, SourceCode},
    value::{ArithmeticOperator, Value, ValueError, ValueType},
};
