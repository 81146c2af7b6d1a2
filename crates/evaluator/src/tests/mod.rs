//! Builders for hand-assembled syntax trees and the shared test driver.


use crate::*;

use tarn_errors::ErrorKind;

fn at(line: usize) -> Location {
    Location::new(line)
}

fn num(value: f64) -> ExprKind {
    ExprKind::Float {
        value,
        location: at(1),
    }
}

fn int(value: i64) -> ExprKind {
    ExprKind::Int {
        value,
        location: at(1),
    }
}

fn boolean(value: bool) -> ExprKind {
    ExprKind::Bool {
        value,
        location: at(1),
    }
}

fn string(value: &str) -> ExprKind {
    ExprKind::String {
        value: value.to_owned(),
        location: at(1),
    }
}

fn ident(name: &str) -> ExprKind {
    ident_at(name, 1)
}

fn ident_at(name: &str, line: usize) -> ExprKind {
    ExprKind::Identifier {
        name: name.to_owned(),
        location: at(line),
    }
}

fn group(inner: ExprKind) -> ExprKind {
    ExprKind::Grouping {
        inner: inner.into(),
        location: at(1),
    }
}

fn unary(operator: &str, right: ExprKind) -> ExprKind {
    ExprKind::UnaryOperation {
        operator: UnaryOperator::try_from(operator).unwrap(),
        right: right.into(),
        location: at(1),
    }
}

fn binary(left: ExprKind, operator: &str, right: ExprKind) -> ExprKind {
    binary_at(left, operator, right, 1)
}

fn binary_at(left: ExprKind, operator: &str, right: ExprKind, line: usize) -> ExprKind {
    ExprKind::BinaryOperation {
        left: left.into(),
        operator: BinaryOperator::try_from(operator).unwrap(),
        right: right.into(),
        location: at(line),
    }
}

fn logical(left: ExprKind, operator: &str, right: ExprKind) -> ExprKind {
    ExprKind::LogicalOperation {
        left: left.into(),
        operator: LogicalOperator::try_from(operator).unwrap(),
        right: right.into(),
        location: at(1),
    }
}

fn call_node(name: &str, arguments: Vec<ExprKind>, line: usize) -> Call {
    Call {
        function_name: name.to_owned(),
        arguments: arguments.into_iter().collect(),
        location: at(line),
    }
}

fn call(name: &str, arguments: Vec<ExprKind>) -> ExprKind {
    ExprKind::Call(call_node(name, arguments, 1))
}

fn call_at(name: &str, arguments: Vec<ExprKind>, line: usize) -> ExprKind {
    ExprKind::Call(call_node(name, arguments, line))
}

fn block(body: Vec<StmtKind>) -> Block {
    Block {
        body: body.into_iter().collect(),
        location: at(1),
    }
}

fn print(value: ExprKind) -> StmtKind {
    StmtKind::Print(Print {
        value,
        line_ending: LineEnding::Newline,
        location: at(1),
    })
}

fn print_inline(value: ExprKind) -> StmtKind {
    StmtKind::Print(Print {
        value,
        line_ending: LineEnding::None,
        location: at(1),
    })
}

fn assign(name: &str, value: ExprKind) -> StmtKind {
    StmtKind::Assignment(Assignment {
        name: name.to_owned(),
        value,
        location: at(1),
    })
}

fn local(name: &str, value: ExprKind) -> StmtKind {
    StmtKind::LocalDeclaration(Variable {
        name: name.to_owned(),
        value: Some(value),
        location: at(1),
    })
}

fn local_unset(name: &str) -> StmtKind {
    StmtKind::LocalDeclaration(Variable {
        name: name.to_owned(),
        value: None,
        location: at(1),
    })
}

fn if_then(
    condition: ExprKind,
    body: Vec<StmtKind>,
    fallback: Option<Vec<StmtKind>>,
) -> StmtKind {
    if_then_at(condition, body, fallback, 1)
}

fn if_then_at(
    condition: ExprKind,
    body: Vec<StmtKind>,
    fallback: Option<Vec<StmtKind>>,
    line: usize,
) -> StmtKind {
    StmtKind::Conditional(Conditional {
        condition,
        body: block(body),
        fallback: fallback.map(block),
        location: at(line),
    })
}

fn while_loop(condition: ExprKind, body: Vec<StmtKind>) -> StmtKind {
    StmtKind::While(While {
        condition,
        body: block(body),
        location: at(1),
    })
}

fn for_loop(
    variable: &str,
    start: ExprKind,
    end: ExprKind,
    step: Option<ExprKind>,
    body: Vec<StmtKind>,
) -> StmtKind {
    StmtKind::For(For {
        variable: variable.to_owned(),
        start,
        end,
        step,
        body: block(body),
        location: at(1),
    })
}

fn function(name: &str, parameters: &[&str], body: Vec<StmtKind>) -> StmtKind {
    StmtKind::FunctionDeclaration(Rc::new(Function {
        name: name.to_owned(),
        parameters: parameters
            .iter()
            .map(|name| FunctionParameter {
                name: (*name).to_owned(),
                location: at(1),
            })
            .collect(),
        body: block(body),
        location: at(1),
    }))
}

fn call_stmt(name: &str, arguments: Vec<ExprKind>) -> StmtKind {
    StmtKind::FunctionCall(call_node(name, arguments, 1))
}

fn call_stmt_at(name: &str, arguments: Vec<ExprKind>, line: usize) -> StmtKind {
    StmtKind::FunctionCall(call_node(name, arguments, line))
}

fn ret(value: Option<ExprKind>) -> StmtKind {
    StmtKind::Return(Return {
        value,
        location: at(1),
    })
}

fn program(body: Vec<StmtKind>) -> Node {
    StmtKind::Block(block(body)).into()
}

/// Printed output up to the end of the program or the first error.
fn execute_partial(body: Vec<StmtKind>) -> (String, Result<(), RuntimeError>) {
    let mut output: Vec<u8> = Vec::new();

    let result = run_with_output(&program(body), &mut output);

    (String::from_utf8(output).unwrap(), result)
}

fn execute(body: Vec<StmtKind>) -> String {
    let (output, result) = execute_partial(body);

    if let Err(err) = result {
        panic!("program failed: {err}\noutput so far: {output:?}");
    }

    output
}

fn execute_err(body: Vec<StmtKind>) -> RuntimeError {
    match execute_partial(body) {
        (_, Err(err)) => err,
        (output, Ok(())) => panic!("expected an error, program printed {output:?}"),
    }
}

fn evaluate(expr: ExprKind) -> Result<Value, RuntimeError> {
    let mut output: Vec<u8> = Vec::new();

    let env = Environment::global();

    let value = Evaluator::new(&mut output).eval(&expr.into(), &env)?;

    Ok(value.unwrap())
}

fn evaluate_err(expr: ExprKind) -> RuntimeError {
    match evaluate(expr) {
        Err(err) => err,
        Ok(value) => panic!("expected an error, got {value:?}"),
    }
}
