use crate::*;

use std::cmp::Ordering;

pub fn evaluate_unary(
    operator: UnaryOperator,
    right: Value,
    location: Location,
) -> Result<Value, RuntimeError> {
    match (operator, right) {
        (UnaryOperator::Plus, Value::Number(value)) => Ok(Value::Number(value)),
        (UnaryOperator::Minus, Value::Number(value)) => Ok(Value::Number(-value)),
        (UnaryOperator::Not, Value::Bool(value)) => Ok(Value::Bool(!value)),

        (operator, right) => Err(RuntimeError::unsupported_unary(
            operator,
            right.kind(),
            location,
        )),
    }
}

/// Division by zero is reported before operand kinds are checked.
pub fn evaluate_binary(
    operator: BinaryOperator,
    left: Value,
    right: Value,
    location: Location,
) -> Result<Value, RuntimeError> {
    use BinaryOperator::*;

    if operator == ForwardSlash && right == Value::Number(0.0) {
        return Err(RuntimeError::DivisionByZero { location });
    }

    let unsupported =
        || RuntimeError::unsupported_binary(operator, left.kind(), right.kind(), location);

    let value = match (operator, &left, &right) {
        (Plus, Value::Number(left), Value::Number(right)) => Value::Number(left + right),
        (Plus, Value::String(_), _) | (Plus, _, Value::String(_)) => {
            let mut string = stringify(&left);

            string.push_str(&stringify(&right));

            Value::String(string)
        }

        (Minus, Value::Number(left), Value::Number(right)) => Value::Number(left - right),
        (Star, Value::Number(left), Value::Number(right)) => Value::Number(left * right),
        (ForwardSlash, Value::Number(left), Value::Number(right)) => Value::Number(left / right),
        (Percent, Value::Number(left), Value::Number(right)) => {
            Value::Number(floored_modulo(*left, *right))
        }
        (Caret, Value::Number(left), Value::Number(right)) => Value::Number(left.powf(*right)),

        (LessThan | LessEquals | GreaterThan | GreaterEquals, _, _) => {
            let ordering = match (&left, &right) {
                (Value::Number(left), Value::Number(right)) => left.partial_cmp(right),
                (Value::String(left), Value::String(right)) => Some(left.cmp(right)),

                _ => return Err(unsupported()),
            };

            Value::Bool(ordering_holds(operator, ordering))
        }

        (Equals, Value::Number(left), Value::Number(right)) => Value::Bool(left == right),
        (Equals, Value::String(left), Value::String(right)) => Value::Bool(left == right),
        (Equals, Value::Bool(left), Value::Bool(right)) => Value::Bool(left == right),

        (NotEquals, Value::Number(left), Value::Number(right)) => Value::Bool(left != right),
        (NotEquals, Value::String(left), Value::String(right)) => Value::Bool(left != right),
        (NotEquals, Value::Bool(left), Value::Bool(right)) => Value::Bool(left != right),

        _ => return Err(unsupported()),
    };

    Ok(value)
}

fn ordering_holds(operator: BinaryOperator, ordering: Option<Ordering>) -> bool {
    use BinaryOperator::*;

    matches!(
        (operator, ordering),
        (LessThan, Some(Ordering::Less))
            | (LessEquals, Some(Ordering::Less | Ordering::Equal))
            | (GreaterThan, Some(Ordering::Greater))
            | (GreaterEquals, Some(Ordering::Greater | Ordering::Equal))
    )
}

/// The remainder takes the sign of the divisor.
fn floored_modulo(left: f64, right: f64) -> f64 {
    let remainder = left % right;

    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        remainder + right
    } else {
        remainder
    }
}
