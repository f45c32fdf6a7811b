// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use colored::{ColoredString, Colorize};
use spl::{Diagnostic, DiagnosticCategory, FileLocation, SourceCode};

pub struct ErrorPrinter<'source_code> {
    source_code: &'source_code SourceCode,
    category: DiagnosticCategory,
    location: FileLocation,
    message: String,

    line_number: ColoredString,
}

impl<'source_code> ErrorPrinter<'source_code> {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &'source_code SourceCode, diagnostic: &Diagnostic) -> Self {
        Self {
            source_code,
            category: diagnostic.category(),
            location: diagnostic.location(),
            message: diagnostic.to_string(),

            line_number: diagnostic.line().to_string().blue().bold(),
        }
    }

    pub fn print(self) {
        self.print_prelude();

        self.print_lines();

        self.print_postlude();
    }

    fn print_prelude(&self) {
        let category = match self.category {
            DiagnosticCategory::Lexical => "lexical error",
            DiagnosticCategory::Syntactic => "syntax error",
            DiagnosticCategory::RunTime => "run-time error",
        };

        eprintln!("{}: {}", category.red().bold(), self.message.bold());
        eprintln!();
    }

    fn print_lines(&self) {
        let line = self.location.line();

        if let Some(previous) = line.checked_sub(1).and_then(|previous| self.source_code.line(previous)) {
            if !previous.trim().is_empty() {
                self.print_line(false, previous);
            }
        }

        // The end of input may sit on a line that has no text.
        if let Some(primary) = self.source_code.line(line) {
            self.print_line(true, primary);
            self.print_error_indicator();
        }

        if let Some(next) = self.source_code.line(line + 1) {
            self.print_line(false, next);
        }
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self) {
        let spaces = " ".repeat(self.location.column());
        let caret = "^".red().bold();

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();

        let path = self.source_code.path().display();
        eprintln!("In {path}:{}\n", self.location);
    }
}
