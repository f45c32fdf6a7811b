// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::AsRefStr;
use thiserror::Error;

/// Number of significant digits a real is printed with.
const REAL_PRECISION: i32 = 6;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i32),
    Real(f32),
    String(String),

    /// Produced by arithmetic on operands outside the promotion rules.
    Error,
}

impl Value {
    #[must_use]
    pub const fn typ(&self) -> ValueType {
        match self {
            Self::Integer(..) => ValueType::Integer,
            Self::Real(..) => ValueType::Real,
            Self::String(..) => ValueType::String,
            Self::Error => ValueType::Error,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Applies `operator` using the numeric promotion rules: two integers
    /// give an integer, any real operand makes the result real.
    ///
    /// A string on either side is an error. An [`Value::Error`] operand yields
    /// [`Value::Error`] without reporting anything, so callers that care must
    /// keep such values away from arithmetic themselves.
    pub fn apply(&self, operator: ArithmeticOperator, rhs: &Self) -> Result<Self, ValueError> {
        match (self, rhs) {
            (Self::String(..), _) | (_, Self::String(..)) => {
                Err(ValueError::IllegalStringOperation { operator })
            }

            (Self::Integer(lhs), Self::Integer(rhs)) => apply_integer(operator, *lhs, *rhs),
            (Self::Real(lhs), Self::Real(rhs)) => Ok(Self::Real(apply_real(operator, *lhs, *rhs))),
            (Self::Integer(lhs), Self::Real(rhs)) => Ok(Self::Real(apply_real(operator, *lhs as f32, *rhs))),
            (Self::Real(lhs), Self::Integer(rhs)) => Ok(Self::Real(apply_real(operator, *lhs, *rhs as f32))),

            (Self::Error, _) | (_, Self::Error) => Ok(Self::Error),
        }
    }
}

fn apply_integer(operator: ArithmeticOperator, lhs: i32, rhs: i32) -> Result<Value, ValueError> {
    let result = match operator {
        ArithmeticOperator::Add => lhs.wrapping_add(rhs),
        ArithmeticOperator::Subtract => lhs.wrapping_sub(rhs),
        ArithmeticOperator::Multiply => lhs.wrapping_mul(rhs),
        ArithmeticOperator::Divide => {
            if rhs == 0 {
                return Err(ValueError::DivisionByZero);
            }

            lhs.wrapping_div(rhs)
        }
    };

    Ok(Value::Integer(result))
}

fn apply_real(operator: ArithmeticOperator, lhs: f32, rhs: f32) -> f32 {
    match operator {
        ArithmeticOperator::Add => lhs + rhs,
        ArithmeticOperator::Subtract => lhs - rhs,
        ArithmeticOperator::Multiply => lhs * rhs,
        ArithmeticOperator::Divide => lhs / rhs,
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(integer) => integer.fmt(f),
            Self::Real(real) => f.write_str(&format_real(*real)),
            Self::String(str) => f.write_str(str),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// Formats like C's `%g`: six significant digits without trailing zeros,
/// switching to scientific notation for very small or large magnitudes.
fn format_real(real: f32) -> String {
    if real.is_nan() {
        return "nan".into();
    }

    if real.is_infinite() {
        let infinity = if real > 0.0 { "inf" } else { "-inf" };
        return infinity.into();
    }

    if real == 0.0 {
        let zero = if real.is_sign_negative() { "-0" } else { "0" };
        return zero.into();
    }

    let scientific = format!("{:.*e}", (REAL_PRECISION - 1) as usize, real);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= REAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", strip_fraction_zeros(mantissa), exponent.abs());
    }

    let fixed = format!("{:.*}", (REAL_PRECISION - 1 - exponent) as usize, real);
    strip_fraction_zeros(&fixed).to_string()
}

fn strip_fraction_zeros(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }

    number.trim_end_matches('0').trim_end_matches('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ValueType {
    Integer,
    Real,
    String,
    Error,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbol().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("Operator `{operator}` cannot be applied to a string")]
    IllegalStringOperation { operator: ArithmeticOperator },

    #[error("Integer division by zero")]
    DivisionByZero,
}
