//! Tree-walking evaluator for tarn programs.
//!
//! An external parser hands over a [`Node`]; [`run`] creates the global
//! [`Environment`] and walks the tree, writing `print` output to a sink.

mod env;
pub use env::{Closure, Environment};

mod escape;
pub use escape::decode_escapes;

mod operators;
pub use operators::{evaluate_binary, evaluate_unary};

pub mod runner;
pub use runner::{run, run_with_output};

mod expr;
mod stmt;

#[cfg(test)]
mod tests;

use tarn_ast::*;
use tarn_errors::RuntimeError;

use thin_vec::ThinVec;

use std::io::Write;
use std::rc::Rc;

/// How a statement finished. `Return` unwinds to the nearest call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal,
    Return(Option<Value>),
}

pub struct Evaluator<'a, W: Write> {
    output: &'a mut W,

    depth: usize,
    max_call_depth: usize,
}

impl<'a, W: Write> Evaluator<'a, W> {
    /// Each call also recurses through the statements nested in its body, so
    /// the default leaves room for a 2 MiB thread stack in unoptimised builds.
    /// Raise it only when the evaluator runs on a larger stack.
    pub const MAX_CALL_DEPTH: usize = 100;

    pub fn new(output: &'a mut W) -> Evaluator<'a, W> {
        Evaluator {
            output,

            depth: 0,
            max_call_depth: Self::MAX_CALL_DEPTH,
        }
    }

    pub fn max_call_depth(mut self, limit: usize) -> Evaluator<'a, W> {
        self.max_call_depth = limit;

        self
    }

    /// Evaluates `root` in a fresh global environment.
    pub fn run(&mut self, root: &Node) -> Result<(), RuntimeError> {
        tracing::debug!("run started");

        let env = Environment::global();

        let result = self.eval(root, &env).map(|_| ());

        let flushed = self.output.flush();

        match result {
            Ok(()) => {
                flushed.map_err(|err| RuntimeError::Output {
                    content: err.to_string(),
                    location: root_location(root),
                })?;

                tracing::debug!("run finished");

                Ok(())
            }

            Err(err) => {
                tracing::debug!(error = %err, "run aborted");

                Err(err)
            }
        }
    }

    /// Statements yield the value of a `return` they execute, if any.
    pub fn eval(
        &mut self,
        node: &Node,
        env: &Rc<Environment>,
    ) -> Result<Option<Value>, RuntimeError> {
        match node {
            Node::Stmt(kind) => match self.eval_stmt(kind, env)? {
                Flow::Normal => Ok(None),
                Flow::Return(value) => Ok(value),
            },

            Node::Expr(kind) => self.eval_expr(kind, env).map(Some),
        }
    }
}

fn root_location(root: &Node) -> Location {
    match root {
        Node::Stmt(kind) => kind.location(),
        Node::Expr(kind) => kind.location(),
    }
}
