// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod logger;

use std::{io::{stdout, Write}, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use colored::Colorize;
use log::LevelFilter;
use spl::{ConfigRoot, Interpreter, Lexer, ParseError, SourceCode};

use self::{error::ErrorPrinter, logger::Logger};

const CONFIG_FILE_NAME: &str = "spl.toml";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to interpret
    file: PathBuf,

    /// Only one program can be interpreted at a time, a second source file is refused
    #[arg(hide = true)]
    extra: Vec<String>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;

        match Self::try_parse() {
            Ok(args) => args,
            Err(e) if e.use_stderr() => {
                _ = e.print();
                exit(1);
            }
            Err(e) => e.exit(),
        }
    }
}

fn main() {
    let args = Args::parse_args();

    let config = match load_config(Path::new(CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            exit(1);
        }
    };

    let level = if args.verbose || config.log.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    if args.extra.iter().any(|arg| arg.ends_with(&config.cli.reserved_suffix)) {
        println!("ONLY ONE FILE NAME ALLOWED");
        exit(1);
    }

    for arg in &args.extra {
        log::warn!("Ignoring argument `{arg}`");
    }

    let source_code = match std::fs::read_to_string(&args.file) {
        Ok(contents) => SourceCode::new(&args.file, contents),
        Err(e) => {
            log::debug!("Could not read {}: {e}", args.file.display());
            println!("CANNOT OPEN THE FILE {}", args.file.display());
            exit(1);
        }
    };

    exit(interpret(&source_code, stdout()));
}

/// Runs the program and reports the outcome, returning the exit code.
fn interpret(source_code: &SourceCode, output: impl Write) -> i32 {
    let mut interpreter = Interpreter::new(Lexer::new(source_code), output);
    let result = interpreter.program();

    let (_, diagnostics, mut output) = interpreter.into_parts();
    let result = match (result, output.flush()) {
        (Ok(()), Err(e)) => Err(ParseError::Output(e)),
        (result, _) => result,
    };

    match result {
        Ok(()) => {
            println!("Successful Interpretation");
            0
        }

        Err(ParseError::Diagnosed(..)) => {
            for diagnostic in diagnostics.iter() {
                ErrorPrinter::new(source_code, diagnostic).print();
            }

            println!("Unsuccessful Interpretation");
            println!("Number of Syntax Errors: {}", diagnostics.error_count());
            1
        }

        Err(ParseError::Output(e)) => {
            eprintln!("{}: {e}", "error".red().bold());
            1
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<ConfigRoot> {
    if !path.exists() {
        return Ok(ConfigRoot::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Invalid configuration in {}", path.display()))
}

fn parse_config(contents: &str) -> anyhow::Result<ConfigRoot> {
    Ok(toml::from_str(contents)?)
}
