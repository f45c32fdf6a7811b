// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use strum::AsRefStr;
use thiserror::Error;

use crate::{ArithmeticOperator, AssignError, FileLocation, ValueError, ValueType};

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    location: FileLocation,
    kind: DiagnosticKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for Diagnostic {
}

impl Diagnostic {
    #[must_use]
    pub fn new(location: FileLocation, kind: DiagnosticKind) -> Self {
        Self {
            location,
            kind,
        }
    }

    #[must_use]
    pub fn location(&self) -> FileLocation {
        self.location
    }

    /// One-based line number the diagnostic was reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.location.line() + 1
    }

    #[must_use]
    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    #[must_use]
    pub fn category(&self) -> DiagnosticCategory {
        self.kind.category()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DiagnosticCategory {
    Lexical,
    Syntactic,
    RunTime,
}

#[derive(Debug, Clone, PartialEq, Error, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DiagnosticKind {
    #[error("Unrecognized Input Pattern ({lexeme})")]
    UnrecognizedInput { lexeme: String },

    #[error("Invalid constant `{lexeme}`")]
    InvalidConstant { lexeme: String },

    #[error("Missing BEGIN at the start of the program, found `{found}`")]
    MissingBegin { found: String },

    #[error("Missing END at the end of the program, found `{found}`")]
    MissingEnd { found: String },

    #[error("No statements in program")]
    NoStatements,

    #[error("Unexpected BEGIN")]
    UnexpectedBegin,

    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("Missing semicolon, found `{found}`")]
    MissingSemicolon { found: String },

    #[error("Invalid statement starting with `{found}`")]
    InvalidStatement { found: String },

    #[error("Missing expression after print")]
    MissingExpressionAfterPrint,

    #[error("Missing ( after {context}")]
    MissingLeftParenthesis { context: &'static str },

    #[error("Missing ) after {context}")]
    MissingRightParenthesis { context: &'static str },

    #[error("Missing THEN after if condition")]
    MissingThen,

    #[error("Missing statement after If")]
    MissingStatementAfterIf,

    #[error("Missing variable, found `{found}`")]
    MissingVariable { found: String },

    #[error("Missing = after variable `{name}`")]
    MissingEquals { name: String },

    #[error("Unrecognized input `{found}`, expected an operand")]
    MissingOperand { found: String },

    #[error("Run-Time Error-Illegal Type for If Statement Expression, found {found}")]
    IllegalIfConditionType { found: ValueType },

    #[error("Run-Time Error-Illegal Assignment Operation: {reason}")]
    IllegalAssignment { reason: AssignError },

    #[error("Run-Time Error-Illegal String Type operation with `{operator}`")]
    IllegalStringOperation { operator: ArithmeticOperator },

    #[error("Run-Time Error-Illegal Division by Zero")]
    DivisionByZero,

    #[error("Undefined Variable `{name}`")]
    UndefinedVariable { name: String },
}

impl DiagnosticKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn category(&self) -> DiagnosticCategory {
        match self {
            Self::UnrecognizedInput { .. } => DiagnosticCategory::Lexical,
            Self::InvalidConstant { .. } => DiagnosticCategory::Lexical,

            Self::IllegalIfConditionType { .. } => DiagnosticCategory::RunTime,
            Self::IllegalAssignment { .. } => DiagnosticCategory::RunTime,
            Self::IllegalStringOperation { .. } => DiagnosticCategory::RunTime,
            Self::DivisionByZero => DiagnosticCategory::RunTime,
            Self::UndefinedVariable { .. } => DiagnosticCategory::RunTime,

            Self::MissingBegin { .. }
                | Self::MissingEnd { .. }
                | Self::NoStatements
                | Self::UnexpectedBegin
                | Self::UnexpectedEndOfInput
                | Self::MissingSemicolon { .. }
                | Self::InvalidStatement { .. }
                | Self::MissingExpressionAfterPrint
                | Self::MissingLeftParenthesis { .. }
                | Self::MissingRightParenthesis { .. }
                | Self::MissingThen
                | Self::MissingStatementAfterIf
                | Self::MissingVariable { .. }
                | Self::MissingEquals { .. }
                | Self::MissingOperand { .. } => DiagnosticCategory::Syntactic,
        }
    }
}

impl From<ValueError> for DiagnosticKind {
    fn from(value: ValueError) -> Self {
        match value {
            ValueError::IllegalStringOperation { operator } => Self::IllegalStringOperation { operator },
            ValueError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

/// Append-only log of everything that went wrong during a run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    error_count: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and returns a copy for the caller to propagate.
    pub fn report(&mut self, location: FileLocation, kind: DiagnosticKind) -> Diagnostic {
        let diagnostic = Diagnostic::new(location, kind);
        log::debug!("{}: {} ({})", diagnostic.line(), diagnostic, diagnostic.kind().name());

        self.error_count += 1;
        self.entries.push(diagnostic.clone());
        diagnostic
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
