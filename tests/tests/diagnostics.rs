// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use spl::{AssignError, DiagnosticCategory, DiagnosticKind, ValueType};
use tests::{interpret, interpret_and_return_diagnostics};

#[test]
fn type_locked_assignment() {
    let diagnostics = interpret_and_return_diagnostics(r#"begin x = 1; x = "a"; end"#);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].category(), DiagnosticCategory::RunTime);
    assert_eq!(
        diagnostics[0].kind(),
        &DiagnosticKind::IllegalAssignment {
            reason: AssignError::TypeMismatch {
                name: "x".into(),
                expected: ValueType::Integer,
                found: ValueType::String,
            },
        },
    );
}

#[test]
fn skipped_assignment_leaves_the_variable_undefined() {
    let interpretation = interpret("begin if (0) then x = 5; print x; end");

    assert!(!interpretation.succeeded);
    assert!(interpretation.stdout.is_empty());
    assert!(interpretation.diagnostics.iter().any(|diagnostic| {
        diagnostic.kind() == &DiagnosticKind::UndefinedVariable { name: "x".into() }
    }));
}

#[test]
fn missing_terminator_stops_the_run() {
    let interpretation = interpret("begin x = 1 y = 2; print y; end");

    assert!(!interpretation.succeeded);
    assert!(interpretation.stdout.is_empty());
    assert_eq!(interpretation.diagnostics.len(), 1);
    assert_eq!(
        interpretation.diagnostics[0].kind(),
        &DiagnosticKind::MissingSemicolon { found: "y".into() },
    );
}

#[rstest]
#[case("print 1; end", "missing-begin")]
#[case("begin end", "no-statements")]
#[case("begin print 1;", "unexpected-end-of-input")]
#[case("begin print 1; begin", "unexpected-begin")]
#[case("begin then; end", "invalid-statement")]
#[case("begin x 1; end", "missing-equals")]
#[case("begin x = 1 +; end", "missing-operand")]
#[case("begin if 1 then print 1; end", "missing-left-parenthesis")]
#[case("begin if (1 then print 1; end", "missing-right-parenthesis")]
#[case("begin if (1) print 1; end", "missing-then")]
#[case("begin if (0) then ; end", "missing-statement-after-if")]
#[case("begin if (\"yes\") then print 1; end", "illegal-if-condition-type")]
#[case("begin if (1.5) then print 1; end", "illegal-if-condition-type")]
#[case("begin x = \"a\" * 2; end", "illegal-string-operation")]
#[case("begin x = 1 / 0; end", "division-by-zero")]
#[case("begin x = y; end", "undefined-variable")]
#[case("begin x = #; end", "unrecognized-input")]
#[case("begin x = 99999999999; end", "unrecognized-input")]
#[case("begin if (0) then x = begin; end", "unexpected-begin")]
#[case("begin if (0) then x = @; end", "unrecognized-input")]
#[case("begin if (0) then print 1 end", "missing-semicolon")]
#[case("begin if (0) then print 1", "unexpected-end-of-input")]
fn single_diagnostic(#[case] input: &str, #[case] expected: &str) {
    let diagnostics = interpret_and_return_diagnostics(input);

    let names: Vec<&str> = diagnostics.iter().map(|diagnostic| diagnostic.kind().name()).collect();
    assert_eq!(names, [expected]);
}

#[test]
fn failed_print_reports_missing_expression() {
    let diagnostics = interpret_and_return_diagnostics("begin print 1, ; end");

    let names: Vec<&str> = diagnostics.iter().map(|diagnostic| diagnostic.kind().name()).collect();
    assert_eq!(names, ["missing-operand", "missing-expression-after-print"]);
}

#[test]
fn diagnostics_carry_the_source_line() {
    let diagnostics = interpret_and_return_diagnostics(r#"
        begin
            x = 1;
            x = "a";
        end
    "#);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), 4);
}

#[test]
fn valid_programs_report_nothing() {
    let interpretation = interpret(r#"
        begin
            a = 1;
            b = a * 2.5;
            c = "text";
            if (a) then print c, b;
            if (a - 1) then print "never";
        end
    "#);

    assert!(interpretation.succeeded);
    assert!(interpretation.diagnostics.is_empty());
    assert_eq!(interpretation.stdout, ["text2.5"]);
}
