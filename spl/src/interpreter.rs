// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, Write};

use thiserror::Error;

use crate::{
    ArithmeticOperator, Diagnostic, DiagnosticKind, Diagnostics, SymbolTable, Token, TokenBuffer,
    TokenKind, TokenSource, Value,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recognizes the program and executes it in the same pass.
///
/// ```text
/// Program       := begin StatementList end
/// StatementList := Statement ; { Statement ; }
/// Statement     := PrintStatement | IfStatement | AssignStatement
/// PrintStatement  := print ExpressionList
/// IfStatement     := if ( Expression ) then Statement
/// AssignStatement := Variable = Expression
/// ExpressionList  := Expression { , Expression }
/// Expression    := Term { (+|-) Term }
/// Term          := Factor { (*|/) Factor }
/// Factor        := identifier | integer | real | string | ( Expression )
/// ```
///
/// Every production either succeeds after performing its side effects, or
/// records a diagnostic and fails, which aborts all enclosing productions.
pub struct Interpreter<S, W> {
    tokens: TokenBuffer<S>,
    symbols: SymbolTable,
    diagnostics: Diagnostics,
    output: W,
}

impl<S: TokenSource, W: Write> Interpreter<S, W> {
    pub fn new(source: S, output: W) -> Self {
        Self {
            tokens: TokenBuffer::new(source),
            symbols: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
            output,
        }
    }

    /// `begin` StatementList `end`
    pub fn program(&mut self) -> ParseResult<()> {
        log::trace!("Program");

        let token = self.tokens.next();
        match token.kind {
            TokenKind::Begin => (),
            TokenKind::Error => return Err(self.unrecognized(&token)),
            _ => return Err(self.report(DiagnosticKind::MissingBegin { found: token.to_string() })),
        }

        if self.statement_list()? == 0 {
            return Err(self.report(DiagnosticKind::NoStatements));
        }

        let token = self.tokens.next();
        match token.kind {
            TokenKind::End => Ok(()),
            TokenKind::Error => Err(self.unrecognized(&token)),
            _ => Err(self.report(DiagnosticKind::MissingEnd { found: token.to_string() })),
        }
    }

    /// Runs statements up to (not including) the closing `end`, and returns
    /// how many there were.
    fn statement_list(&mut self) -> ParseResult<usize> {
        let mut count = 0;

        loop {
            let token = self.tokens.next();
            match token.kind {
                TokenKind::End => {
                    self.tokens.push_back(token);
                    return Ok(count);
                }

                TokenKind::Begin => return Err(self.report(DiagnosticKind::UnexpectedBegin)),
                TokenKind::EndOfInput => return Err(self.report(DiagnosticKind::UnexpectedEndOfInput)),
                TokenKind::Error => return Err(self.unrecognized(&token)),

                _ => self.tokens.push_back(token),
            }

            self.statement()?;
            count += 1;

            let token = self.tokens.next();
            if token.kind != TokenKind::Semicolon {
                return Err(self.report(DiagnosticKind::MissingSemicolon { found: token.to_string() }));
            }
        }
    }

    fn statement(&mut self) -> ParseResult<()> {
        let token = self.tokens.next();
        log::trace!("Statement starting with {}", token.kind);

        match token.kind {
            TokenKind::Print => self.print_statement(),
            TokenKind::If => self.if_statement(),

            TokenKind::Identifier => {
                self.tokens.push_back(token);
                self.assign_statement()
            }

            // Left for the statement list, which expects a terminator first.
            TokenKind::End => {
                self.tokens.push_back(token);
                Ok(())
            }

            TokenKind::Error => Err(self.unrecognized(&token)),
            _ => Err(self.report(DiagnosticKind::InvalidStatement { found: token.to_string() })),
        }
    }

    /// `print` ExpressionList, with the `print` keyword already consumed.
    fn print_statement(&mut self) -> ParseResult<()> {
        let mut queue = Vec::new();

        if let Err(error) = self.expression_list(&mut queue) {
            return Err(match error {
                ParseError::Diagnosed(..) => self.report(DiagnosticKind::MissingExpressionAfterPrint),
                error => error,
            });
        }

        let token = self.tokens.next();
        if token.kind == TokenKind::Semicolon {
            self.flush(&queue)?;
        }

        self.tokens.push_back(token);
        Ok(())
    }

    fn flush(&mut self, queue: &[Value]) -> io::Result<()> {
        let mut line = String::new();
        for value in queue {
            line += &value.to_string();
        }

        log::debug!("Printing `{line}`");
        writeln!(self.output, "{line}")
    }

    /// `if` `(` Expression `)` `then` Statement, with the `if` keyword already
    /// consumed.
    fn if_statement(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::LeftParenthesis, DiagnosticKind::MissingLeftParenthesis { context: "if" })?;

        let condition = self.expression()?;
        let Value::Integer(condition) = condition else {
            return Err(self.report(DiagnosticKind::IllegalIfConditionType { found: condition.typ() }));
        };

        self.expect(TokenKind::RightParenthesis, DiagnosticKind::MissingRightParenthesis { context: "if condition" })?;
        self.expect(TokenKind::Then, DiagnosticKind::MissingThen)?;

        if condition != 0 {
            return self.statement();
        }

        self.skip_statement()
    }

    /// Steps over a statement without executing it, stopping right before its
    /// terminator.
    fn skip_statement(&mut self) -> ParseResult<()> {
        let token = self.tokens.next();
        if token.kind == TokenKind::Error {
            return Err(self.unrecognized(&token));
        }

        if !token.kind.starts_statement() {
            return Err(self.report(DiagnosticKind::MissingStatementAfterIf));
        }

        log::trace!("Skipping statement starting with {token}");

        loop {
            let token = self.tokens.next();
            match token.kind {
                TokenKind::Semicolon | TokenKind::End => {
                    self.tokens.push_back(token);
                    return Ok(());
                }

                TokenKind::Begin => return Err(self.report(DiagnosticKind::UnexpectedBegin)),
                TokenKind::EndOfInput => return Err(self.report(DiagnosticKind::UnexpectedEndOfInput)),
                TokenKind::Error => return Err(self.unrecognized(&token)),

                _ => (),
            }
        }
    }

    /// Variable `=` Expression
    fn assign_statement(&mut self) -> ParseResult<()> {
        let name = self.variable()?;

        self.expect(TokenKind::Equals, DiagnosticKind::MissingEquals { name: name.clone() })?;

        let value = self.expression()?;

        match self.symbols.assign(&name, value) {
            Ok(value) => {
                log::debug!("Assigned {value} to `{name}`");
                Ok(())
            }

            Err(reason) => Err(self.report(DiagnosticKind::IllegalAssignment { reason })),
        }
    }

    /// Reads an identifier, giving it a symbol table entry if it is new.
    fn variable(&mut self) -> ParseResult<String> {
        let token = self.tokens.next();

        let Some(name) = token.as_identifier() else {
            return Err(self.report(DiagnosticKind::MissingVariable { found: token.to_string() }));
        };

        self.symbols.declare(name);
        Ok(name.to_string())
    }

    fn expression_list(&mut self, queue: &mut Vec<Value>) -> ParseResult<()> {
        queue.push(self.expression()?);

        loop {
            let token = self.tokens.next();
            if token.kind != TokenKind::Comma {
                self.tokens.push_back(token);
                return Ok(());
            }

            queue.push(self.expression()?);
        }
    }

    pub fn expression(&mut self) -> ParseResult<Value> {
        self.binary_expression(Self::term, &[
            (TokenKind::Plus, ArithmeticOperator::Add),
            (TokenKind::Minus, ArithmeticOperator::Subtract),
        ])
    }

    fn term(&mut self) -> ParseResult<Value> {
        self.binary_expression(Self::factor, &[
            (TokenKind::Multiply, ArithmeticOperator::Multiply),
            (TokenKind::Divide, ArithmeticOperator::Divide),
        ])
    }

    /// Left-associative chain of `operand`s, folded as soon as each operator
    /// and its right-hand side are read.
    fn binary_expression<F>(&mut self, mut operand: F, operators: &[(TokenKind, ArithmeticOperator)]) -> ParseResult<Value>
            where F: FnMut(&mut Self) -> ParseResult<Value> {
        let mut lhs = operand(self)?;

        loop {
            let token = self.tokens.next();

            let Some(&(_, operator)) = operators.iter().find(|(kind, _)| *kind == token.kind) else {
                self.tokens.push_back(token);
                return Ok(lhs);
            };

            let rhs = operand(self)?;

            lhs = match lhs.apply(operator, &rhs) {
                Ok(value) => value,
                Err(error) => return Err(self.report(error.into())),
            };
        }
    }

    fn factor(&mut self) -> ParseResult<Value> {
        let token = self.tokens.next();

        match token.kind {
            TokenKind::Identifier => {
                let name = token.lexeme;
                self.symbols.declare(&name);

                match self.symbols.find(&name) {
                    Some(value) => Ok(value.clone()),
                    None => Err(self.report(DiagnosticKind::UndefinedVariable { name })),
                }
            }

            TokenKind::IntegerConstant => match token.lexeme.parse() {
                Ok(integer) => Ok(Value::Integer(integer)),
                Err(..) => Err(self.report(DiagnosticKind::InvalidConstant { lexeme: token.lexeme })),
            },

            TokenKind::RealConstant => match token.lexeme.parse() {
                Ok(real) => Ok(Value::Real(real)),
                Err(..) => Err(self.report(DiagnosticKind::InvalidConstant { lexeme: token.lexeme })),
            },

            TokenKind::StringConstant => Ok(Value::String(token.lexeme)),

            TokenKind::LeftParenthesis => {
                let value = self.expression()?;
                self.expect(TokenKind::RightParenthesis, DiagnosticKind::MissingRightParenthesis { context: "expression" })?;
                Ok(value)
            }

            TokenKind::Error => Err(self.unrecognized(&token)),
            _ => Err(self.report(DiagnosticKind::MissingOperand { found: token.to_string() })),
        }
    }

    fn expect(&mut self, kind: TokenKind, missing: DiagnosticKind) -> ParseResult<Token> {
        let token = self.tokens.next();

        if token.kind == kind {
            return Ok(token);
        }

        if token.kind == TokenKind::Error {
            return Err(self.unrecognized(&token));
        }

        Err(self.report(missing))
    }

    fn report(&mut self, kind: DiagnosticKind) -> ParseError {
        let location = self.tokens.location();
        ParseError::Diagnosed(self.diagnostics.report(location, kind))
    }

    fn unrecognized(&mut self, token: &Token) -> ParseError {
        self.report(DiagnosticKind::UnrecognizedInput { lexeme: token.lexeme.clone() })
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    #[must_use]
    pub fn into_parts(self) -> (SymbolTable, Diagnostics, W) {
        (self.symbols, self.diagnostics, self.output)
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    /// Already recorded in the interpreter's diagnostics.
    #[error("{0}")]
    Diagnosed(Diagnostic),

    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}
