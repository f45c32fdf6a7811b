// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use spl::{Diagnostic, Interpreter, Lexer};

/// Everything observable about a single run of a program.
#[derive(Debug)]
pub struct Interpretation {
    pub succeeded: bool,
    pub stdout: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

fn init_logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

pub fn interpret(input: &str) -> Interpretation {
    init_logger();

    let mut interpreter = Interpreter::new(Lexer::new(input), Vec::new());
    let result = interpreter.program();
    let (_, diagnostics, output) = interpreter.into_parts();

    let stdout = String::from_utf8(output).unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect();

    Interpretation {
        succeeded: result.is_ok(),
        stdout,
        diagnostics: diagnostics.into_vec(),
    }
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    let interpretation = interpret(input);
    assert!(interpretation.succeeded, "Diagnostics: {:#?}", interpretation.diagnostics);
    assert!(interpretation.diagnostics.is_empty());

    interpretation.stdout
}

pub fn interpret_and_return_diagnostics(input: &str) -> Vec<Diagnostic> {
    let interpretation = interpret(input);
    assert!(!interpretation.succeeded, "Program unexpectedly succeeded, stdout: {:#?}", interpretation.stdout);

    interpretation.diagnostics
}
