use crate::*;

impl<'a, W: Write> Evaluator<'a, W> {
    pub(crate) fn eval_expr(
        &mut self,
        kind: &ExprKind,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        match kind {
            ExprKind::Int { value, .. } => Ok(Value::Number(*value as f64)),
            ExprKind::Float { value, .. } => Ok(Value::Number(*value)),
            ExprKind::Bool { value, .. } => Ok(Value::Bool(*value)),
            ExprKind::String { value, .. } => Ok(Value::String(value.clone())),

            ExprKind::Identifier { name, location } => self.eval_identifier(name, *location, env),

            ExprKind::Grouping { inner, .. } => self.eval_expr(inner, env),

            ExprKind::UnaryOperation {
                operator,
                right,
                location,
            } => {
                let right = self.eval_expr(right, env)?;

                evaluate_unary(*operator, right, *location)
            }

            ExprKind::BinaryOperation {
                left,
                operator,
                right,
                location,
            } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;

                evaluate_binary(*operator, left, right, *location)
            }

            ExprKind::LogicalOperation {
                left,
                operator,
                right,
                ..
            } => self.eval_logical_operation(left, *operator, right, env),

            ExprKind::Call(call) => match self.call_function(call, env)? {
                Some(value) => Ok(value),

                None => Err(RuntimeError::MissingReturnValue {
                    name: call.function_name.clone(),
                    location: call.location,
                }),
            },
        }
    }

    fn eval_identifier(
        &mut self,
        name: &str,
        location: Location,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        match env.get(name) {
            Some(Some(value)) => Ok(value),

            Some(None) => Err(RuntimeError::UninitializedIdentifier {
                name: name.to_owned(),
                location,
            }),

            None => Err(RuntimeError::UndeclaredIdentifier {
                name: name.to_owned(),
                location,
            }),
        }
    }

    /// Short-circuits and yields the deciding operand unchanged.
    fn eval_logical_operation(
        &mut self,
        left: &ExprKind,
        operator: LogicalOperator,
        right: &ExprKind,
        env: &Rc<Environment>,
    ) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(left, env)?;

        match operator {
            LogicalOperator::Or if left.is_truthy() => Ok(left),
            LogicalOperator::And if !left.is_truthy() => Ok(left),

            _ => self.eval_expr(right, env),
        }
    }
}
