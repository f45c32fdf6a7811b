// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret, interpret_and_return_stdout};

#[rstest]
#[case(
    "begin print 1+2; end",
    &[
        "3",
    ],
)]
#[case(
    "begin x = 3.5; print x+2; end",
    &[
        "5.5",
    ],
)]
#[case(
    "begin print 7/2; end",
    &[
        "3",
    ],
)]
#[case(
    "begin print 7.0/2; end",
    &[
        "3.5",
    ],
)]
#[case(
    "begin print 1+2*3, (1+2)*3, 10-4-3, 24/4/3; end",
    &[
        "7932",
    ],
)]
#[case(
    r#"
        begin
            print "Hello", " ", "world";
            print "a", 1, "b", 2.5;
        end
    "#,
    &[
        "Hello world",
        "a1b2.5",
    ],
)]
#[case(
    r#"
        begin
            // A running total.
            total = 0;
            total = total + 10;
            total = total * 3;
            print total;
        end
    "#,
    &[
        "30",
    ],
)]
#[case(
    r#"
        begin
            x = 1;
            x = 2.9;
            print x;
            y = 2.0;
            y = 4;
            print y / 8;
        end
    "#,
    &[
        "2",
        "0.5",
    ],
)]
#[case(
    r#"
        begin
            if (1) then print "taken";
            if (0) then print "not taken";
            if (2 - 2) then print "not taken either";
            if (0 - 1) then print "negative is true";
        end
    "#,
    &[
        "taken",
        "negative is true",
    ],
)]
#[case(
    r#"
        begin
            x = 1;
            if (x) then x = x + 1;
            if (x - 2) then x = 100;
            print x;
        end
    "#,
    &[
        "2",
    ],
)]
#[case(
    "begin print 1.0/3, 10000000.0, 0.0001; end",
    &[
        "0.3333331e+070.0001",
    ],
)]
#[case(
    "begin x = \"same\"; x = \"other\"; print x; end",
    &[
        "other",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.into_iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn statements_before_a_failure_keep_their_output() {
    let interpretation = interpret(r#"
        begin
            print "first";
            print "second" + 1;
            print "third";
        end
    "#);

    assert!(!interpretation.succeeded);
    assert_eq!(interpretation.stdout, ["first"]);
}

#[test]
fn statements_after_the_end_are_never_run() {
    assert_eq!(interpret_and_return_stdout("begin print 1; end print 2;"), ["1"]);
}

#[test]
fn long_comment_blocks_are_skipped() {
    let input = format!("begin\n{}print 1;\nend\n", "// c\n".repeat(300_000));
    assert_eq!(interpret_and_return_stdout(&input), ["1"]);
}
