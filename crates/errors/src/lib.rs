use tarn_ast::{Location, ValueKind};

use derive_more::{Display, Error};

use std::fmt;

pub struct ErrorHandler {}

impl ErrorHandler {
    pub fn handle_error(file_path: &str, error: &RuntimeError) {
        eprintln!("{} {}", file_path, ErrorHandler::format(error))
    }

    pub fn format(error: &RuntimeError) -> String {
        format!("{} at {}", error.kind(), error)
    }
}

/// The operand kinds an operator was applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    Unary(ValueKind),
    Binary(ValueKind, ValueKind),
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operands::Unary(kind) => write!(f, "on {}", kind),
            Operands::Binary(left, right) => write!(f, "between {} and {}", left, right),
        }
    }
}

/// Every variant is fatal to the running program.
#[derive(Error, Display, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[display(fmt = "{location}: undeclared identifier '{name}'")]
    UndeclaredIdentifier {
        name: String,
        location: Location,
    },

    #[display(fmt = "{location}: uninitialized identifier '{name}'")]
    UninitializedIdentifier {
        name: String,
        location: Location,
    },

    #[display(fmt = "{location}: function '{name}' not declared")]
    UndeclaredFunction {
        name: String,
        location: Location,
    },

    #[display(
        fmt = "{location}: function '{name}' expected {expected} params but {got} arguments were passed"
    )]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
        location: Location,
    },

    #[display(fmt = "{location}: unsupported operator '{operator}' {operands}")]
    UnsupportedOperator {
        operator: String,
        operands: Operands,
        location: Location,
    },

    #[display(fmt = "{location}: division by zero")]
    DivisionByZero { location: Location },

    #[display(fmt = "{location}: {construct} condition is not a boolean expression")]
    NonBooleanCondition {
        construct: &'static str,
        got: ValueKind,
        location: Location,
    },

    #[display(fmt = "{location}: for loop {bound} must be a number, got {got}")]
    NonNumericForBound {
        bound: &'static str,
        got: ValueKind,
        location: Location,
    },

    #[display(fmt = "{location}: function '{name}' did not return a value")]
    MissingReturnValue {
        name: String,
        location: Location,
    },

    #[display(fmt = "{location}: maximum call depth of {limit} exceeded")]
    StackOverflow { limit: usize, location: Location },

    #[display(fmt = "{location}: unable to write output: {content}")]
    Output {
        content: String,
        location: Location,
    },
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UndeclaredIdentifier,
    UninitializedIdentifier,
    UndeclaredFunction,
    ArityMismatch,
    UnsupportedOperator,
    DivisionByZero,
    NonBooleanCondition,
    NonNumericForBound,
    MissingReturnValue,
    StackOverflow,
    Output,
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UndeclaredIdentifier { .. } => ErrorKind::UndeclaredIdentifier,
            RuntimeError::UninitializedIdentifier { .. } => ErrorKind::UninitializedIdentifier,
            RuntimeError::UndeclaredFunction { .. } => ErrorKind::UndeclaredFunction,
            RuntimeError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            RuntimeError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            RuntimeError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            RuntimeError::NonBooleanCondition { .. } => ErrorKind::NonBooleanCondition,
            RuntimeError::NonNumericForBound { .. } => ErrorKind::NonNumericForBound,
            RuntimeError::MissingReturnValue { .. } => ErrorKind::MissingReturnValue,
            RuntimeError::StackOverflow { .. } => ErrorKind::StackOverflow,
            RuntimeError::Output { .. } => ErrorKind::Output,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            RuntimeError::UndeclaredIdentifier { location, .. }
            | RuntimeError::UninitializedIdentifier { location, .. }
            | RuntimeError::UndeclaredFunction { location, .. }
            | RuntimeError::ArityMismatch { location, .. }
            | RuntimeError::UnsupportedOperator { location, .. }
            | RuntimeError::DivisionByZero { location }
            | RuntimeError::NonBooleanCondition { location, .. }
            | RuntimeError::NonNumericForBound { location, .. }
            | RuntimeError::MissingReturnValue { location, .. }
            | RuntimeError::StackOverflow { location, .. }
            | RuntimeError::Output { location, .. } => *location,
        }
    }

    pub fn unsupported_unary(
        operator: impl ToString,
        right: ValueKind,
        location: Location,
    ) -> Self {
        RuntimeError::UnsupportedOperator {
            operator: operator.to_string(),
            operands: Operands::Unary(right),
            location,
        }
    }

    pub fn unsupported_binary(
        operator: impl ToString,
        left: ValueKind,
        right: ValueKind,
        location: Location,
    ) -> Self {
        RuntimeError::UnsupportedOperator {
            operator: operator.to_string(),
            operands: Operands::Binary(left, right),
            location,
        }
    }
}
