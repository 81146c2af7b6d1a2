use crate::*;

impl<'a, W: Write> Evaluator<'a, W> {
    pub(crate) fn eval_stmt(
        &mut self,
        kind: &StmtKind,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        match kind {
            StmtKind::Block(block) => self.eval_block(block, env),
            StmtKind::Print(print) => self.eval_print(print, env),
            StmtKind::Conditional(conditional) => self.eval_conditional(conditional, env),
            StmtKind::While(while_loop) => self.eval_while(while_loop, env),
            StmtKind::For(for_loop) => self.eval_for(for_loop, env),
            StmtKind::Assignment(assignment) => self.eval_assignment(assignment, env),
            StmtKind::LocalDeclaration(variable) => self.eval_local_declaration(variable, env),
            StmtKind::FunctionDeclaration(function) => {
                env.declare_function(Rc::clone(function));

                Ok(Flow::Normal)
            }
            StmtKind::FunctionCall(call) => {
                self.call_function(call, env)?;

                Ok(Flow::Normal)
            }
            StmtKind::Return(ret) => self.eval_return(ret, env),
        }
    }

    /// Runs `block` in `env` as given; callers decide whether it gets a new scope.
    pub(crate) fn eval_block(
        &mut self,
        block: &Block,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        for stmt in &block.body {
            if let Flow::Return(value) = self.eval_stmt(stmt, env)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    fn eval_print(&mut self, print: &Print, env: &Rc<Environment>) -> Result<Flow, RuntimeError> {
        let value = self.eval_expr(&print.value, env)?;

        let text = decode_escapes(&stringify(&value));

        write!(self.output, "{}{}", text, print.line_ending).map_err(|err| {
            RuntimeError::Output {
                content: err.to_string(),
                location: print.location,
            }
        })?;

        Ok(Flow::Normal)
    }

    fn eval_condition(
        &mut self,
        condition: &ExprKind,
        env: &Rc<Environment>,
        construct: &'static str,
        location: Location,
    ) -> Result<bool, RuntimeError> {
        match self.eval_expr(condition, env)? {
            Value::Bool(value) => Ok(value),

            value => Err(RuntimeError::NonBooleanCondition {
                construct,
                got: value.kind(),
                location,
            }),
        }
    }

    fn eval_conditional(
        &mut self,
        conditional: &Conditional,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        if self.eval_condition(&conditional.condition, env, "if", conditional.location)? {
            return self.eval_block(&conditional.body, &env.child());
        }

        match &conditional.fallback {
            Some(fallback) => self.eval_block(fallback, &env.child()),

            None => Ok(Flow::Normal),
        }
    }

    /// The body scope is created once and kept across iterations, while the
    /// condition is always evaluated in `env`. Names the body shadows are
    /// therefore invisible to the condition.
    fn eval_while(
        &mut self,
        while_loop: &While,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        let scope = env.child();

        while self.eval_condition(&while_loop.condition, env, "while", while_loop.location)? {
            if let Flow::Return(value) = self.eval_block(&while_loop.body, &scope)? {
                return Ok(Flow::Return(value));
            }
        }

        Ok(Flow::Normal)
    }

    fn eval_for_bound(
        &mut self,
        bound: &ExprKind,
        env: &Rc<Environment>,
        name: &'static str,
    ) -> Result<f64, RuntimeError> {
        match self.eval_expr(bound, env)? {
            Value::Number(value) => Ok(value),

            value => Err(RuntimeError::NonNumericForBound {
                bound: name,
                got: value.kind(),
                location: bound.location(),
            }),
        }
    }

    /// An explicit step is used as written, even when its sign points away
    /// from `end`.
    fn eval_for(&mut self, for_loop: &For, env: &Rc<Environment>) -> Result<Flow, RuntimeError> {
        let start = self.eval_for_bound(&for_loop.start, env, "start")?;
        let end = self.eval_for_bound(&for_loop.end, env, "end")?;

        let ascending = start < end;

        let step = match &for_loop.step {
            Some(step) => self.eval_for_bound(step, env, "step")?,

            None if ascending => 1.0,
            None => -1.0,
        };

        let scope = env.child();

        let mut current = start;

        while (ascending && current <= end) || (!ascending && current >= end) {
            env.assign(&for_loop.variable, Value::Number(current));

            if let Flow::Return(value) = self.eval_block(&for_loop.body, &scope)? {
                return Ok(Flow::Return(value));
            }

            current += step;
        }

        Ok(Flow::Normal)
    }

    fn eval_assignment(
        &mut self,
        assignment: &Assignment,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        let value = self.eval_expr(&assignment.value, env)?;

        env.assign(&assignment.name, value);

        Ok(Flow::Normal)
    }

    fn eval_local_declaration(
        &mut self,
        variable: &Variable,
        env: &Rc<Environment>,
    ) -> Result<Flow, RuntimeError> {
        let value = match &variable.value {
            Some(expr) => Some(self.eval_expr(expr, env)?),

            None => None,
        };

        env.declare_local(variable.name.clone(), value);

        Ok(Flow::Normal)
    }

    /// `return f()` passes on whatever `f` produced, including no value; the
    /// error is raised only where the result is consumed.
    fn eval_return(&mut self, ret: &Return, env: &Rc<Environment>) -> Result<Flow, RuntimeError> {
        let value = match &ret.value {
            Some(ExprKind::Call(call)) => self.call_function(call, env)?,
            Some(expr) => Some(self.eval_expr(expr, env)?),

            None => None,
        };

        Ok(Flow::Return(value))
    }

    /// Yields `None` when the body finishes without returning a value.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(name = %call.function_name, arity = call.arguments.len())
    )]
    pub(crate) fn call_function(
        &mut self,
        call: &Call,
        env: &Rc<Environment>,
    ) -> Result<Option<Value>, RuntimeError> {
        let Some(closure) = env.get_function(&call.function_name) else {
            return Err(RuntimeError::UndeclaredFunction {
                name: call.function_name.clone(),
                location: call.location,
            });
        };

        let function = &closure.function;

        if function.parameters.len() != call.arguments.len() {
            return Err(RuntimeError::ArityMismatch {
                name: function.name.clone(),
                expected: function.parameters.len(),
                got: call.arguments.len(),
                location: call.location,
            });
        }

        let mut arguments = ThinVec::with_capacity(call.arguments.len());

        for argument in &call.arguments {
            arguments.push(self.eval_expr(argument, env)?);
        }

        if self.depth >= self.max_call_depth {
            return Err(RuntimeError::StackOverflow {
                limit: self.max_call_depth,
                location: call.location,
            });
        }

        let scope = closure.env.child();

        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            scope.declare_local(parameter.name.clone(), Some(argument));
        }

        self.depth += 1;

        let flow = self.eval_block(&function.body, &scope);

        self.depth -= 1;

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(None),
        }
    }
}
