use derive_more::Display;

/// A runtime value. Integer and float literals both evaluate to `Number`.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Value {
    Number(f64),

    Bool(bool),

    String(String),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    #[display(fmt = "number")]
    Number,

    #[display(fmt = "boolean")]
    Boolean,

    #[display(fmt = "string")]
    String,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Only consulted by `and`/`or`; conditions of `if` and `while` must be booleans.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(value) => *value != 0.0,
            Value::Bool(value) => *value,
            Value::String(value) => !value.is_empty(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

/// Textual form used by `print` and by string concatenation.
pub fn stringify(value: &Value) -> String {
    value.to_string()
}
