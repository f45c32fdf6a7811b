// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Value, ValueType};

/// Variable bindings of a single run.
///
/// A name can be known without being defined: it gets an entry the first time
/// it is seen, and a value on its first assignment. From then on the entry is
/// locked to that value's type, with integers and reals converting into each
/// other.
#[derive(Default, Debug)]
pub struct SymbolTable {
    variables: HashMap<String, Option<Value>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure `name` has an entry, leaving existing ones untouched.
    pub fn declare(&mut self, name: &str) {
        if !self.variables.contains_key(name) {
            self.variables.insert(name.to_string(), None);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The current value of `name`, if it was ever assigned.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)?.as_ref()
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<&Value, AssignError> {
        if value.is_error() {
            return Err(AssignError::ErrorValue { name: name.to_string() });
        }

        let slot = self.variables.entry(name.to_string()).or_default();

        let value = match slot.as_ref() {
            None => value,
            Some(current) => coerce(name, current.typ(), value)?,
        };

        let value: &Value = slot.insert(value);
        Ok(value)
    }
}

fn coerce(name: &str, current: ValueType, value: Value) -> Result<Value, AssignError> {
    match (current, value) {
        (ValueType::String, value @ Value::String(..)) => Ok(value),

        (ValueType::Integer, value @ Value::Integer(..)) => Ok(value),
        (ValueType::Integer, Value::Real(real)) => Ok(Value::Integer(real as i32)),

        (ValueType::Real, value @ Value::Real(..)) => Ok(value),
        (ValueType::Real, Value::Integer(integer)) => Ok(Value::Real(integer as f32)),

        (expected, value) => Err(AssignError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: value.typ(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("Cannot assign a value of type {found} to `{name}`, which holds a value of type {expected}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error("Cannot assign an erroneous value to `{name}`")]
    ErrorValue { name: String },
}
