use std::{collections::HashMap, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDecl, Program, Statement, Type},
    error::{ErrorHandler, RuntimeError},
    interpreter::{
        evaluator::{
            function::builtin::StandardLibrary,
            scope::{ScopeArena, Variable},
            utils::expect_bool,
        },
        value::core::RuntimeValue,
    },
};

/// Result type used by the evaluator.
///
/// The error side is a [`Signal`], so `?` unwinds both failures and `return`
/// statements up to the nearest function call.
pub type EvalResult<T> = Result<T, Signal>;

/// Non-local control flow produced while evaluating.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A `return` statement, carrying the returned value up to the call.
    Return(RuntimeValue),
    /// A runtime error. It ends the run once it reaches the top level.
    Failure(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Failure(error)
    }
}

/// Default limit for nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of nested user function calls before the run fails
    /// with [`RuntimeError::StackOverflow`].
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// Walks a [`Program`] and executes it.
///
/// The interpreter owns the scope arena, the table of user functions and the
/// standard library it performs I/O through. Runtime errors are reported to
/// the [`ErrorHandler`] exactly once, after which the run stops.
pub struct Interpreter<'h, 'io> {
    handler:              &'h mut dyn ErrorHandler,
    pub(crate) stdlib:    StandardLibrary<'io>,
    pub(crate) scopes:    ScopeArena,
    pub(crate) functions: HashMap<String, Rc<FunctionDecl>>,
    pub(crate) config:    InterpreterConfig,
    /// Number of user function calls currently executing.
    pub(crate) depth:     usize,
}

impl<'h, 'io> Interpreter<'h, 'io> {
    pub fn new(handler: &'h mut dyn ErrorHandler,
               stdlib: StandardLibrary<'io>,
               config: InterpreterConfig)
               -> Self {
        Self { handler,
               stdlib,
               scopes: ScopeArena::new(),
               functions: HashMap::new(),
               config,
               depth: 0 }
    }

    /// Runs a whole program.
    ///
    /// Registers every function declaration first, so calls may precede
    /// declarations in the source. A declaration that reuses a standard
    /// library name is reported and skipped; the run goes on. Top-level
    /// statements then execute in order until the end, a top-level `return`,
    /// or the first runtime error.
    ///
    /// # Example
    /// ```
    /// use nulla::{
    ///     ast::{Expr, Program, Statement},
    ///     error::Diagnostics,
    ///     interpreter::evaluator::{
    ///         core::{Interpreter, InterpreterConfig},
    ///         function::builtin::StandardLibrary,
    ///     },
    /// };
    ///
    /// let program = Program { statements: vec![Statement::Expression {
    ///                             expression: Expr::call("print", vec![Expr::literal("hi")]),
    ///                             assigned:   None,
    ///                         }],
    ///                         ..Program::default() };
    ///
    /// let mut out = Vec::new();
    /// let mut diagnostics = Diagnostics::default();
    /// let stdlib = StandardLibrary::with_io(&b""[..], &mut out);
    /// Interpreter::new(&mut diagnostics, stdlib, InterpreterConfig::default()).interpret(&program);
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
    /// ```
    pub fn interpret(&mut self, program: &Program) {
        let mut declarations = program.functions.values().collect::<Vec<_>>();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));

        for declaration in declarations {
            if StandardLibrary::try_get_function(&declaration.name).is_some() {
                let function = declaration.name.clone();
                self.handler
                    .on_interpreter_error(RuntimeError::StandardLibraryFunctionOverridden { function });
                continue;
            }
            debug!(function = %declaration.name, "registered function");
            self.functions
                .insert(declaration.name.clone(), Rc::new(declaration.clone()));
        }

        for statement in &program.statements {
            match self.execute(statement) {
                Ok(()) => {},
                Err(Signal::Return(value)) => {
                    debug!(%value, "top-level return");
                    return;
                },
                Err(Signal::Failure(error)) => {
                    debug!(%error, "run aborted");
                    self.handler.on_interpreter_error(error);
                    return;
                },
            }
        }
    }

    /// Executes one statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::If { condition,
                            body,
                            else_body, } => {
                if self.evaluate_condition(condition)? {
                    self.execute_block(body)
                } else if let Some(else_body) = else_body {
                    self.execute_block(else_body)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition, body } => {
                while self.evaluate_condition(condition)? {
                    self.execute_block(body)?;
                }
                Ok(())
            },
            Statement::Return(expression) => {
                let value = match expression {
                    Some(expression) => self.evaluate(expression)?,
                    None => RuntimeValue::void(),
                };
                Err(Signal::Return(value))
            },
            Statement::Expression { expression,
                                    assigned: None, } => self.evaluate(expression).map(drop),
            Statement::Expression { expression,
                                    assigned: Some(value), } => self.assign(expression, value),
            Statement::VariableDeclaration { immutable,
                                             name,
                                             ty,
                                             initial_value, } => {
                self.declare_variable(*immutable, name, *ty, initial_value.as_ref())
            },
        }
    }

    /// Executes statements inside a fresh block scope. The scope is closed
    /// again however the block ends.
    pub fn execute_block(&mut self, body: &[Statement]) -> EvalResult<()> {
        self.scopes.push_local();
        let outcome = body.iter().try_for_each(|statement| self.execute(statement));
        self.scopes.pop();
        outcome
    }

    /// Evaluates an expression to a value.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<RuntimeValue> {
        match expr {
            Expr::Disjunction { left, right } => self.eval_disjunction(left, right),
            Expr::Conjunction { left, right } => self.eval_conjunction(left, right),
            Expr::Comparison { left,
                               operator,
                               right, } => self.eval_comparison(left, *operator, right),
            Expr::NullSafety { left, right } => self.eval_null_safety(left, right),
            Expr::Additive { left, right } => self.eval_additive(left, right),
            Expr::Multiplicative { left, right } => self.eval_multiplicative(left, right),
            Expr::As { left, target } => self.eval_as(left, *target),
            Expr::Unary { operator, operand } => self.eval_unary(*operator, operand),
            Expr::Literal(literal) => Ok(RuntimeValue::from(literal)),
            Expr::Identifier(name) => self.eval_identifier(name),
            Expr::FunctionCall { name, arguments } => self.call_function(name, arguments),
        }
    }

    fn eval_identifier(&self, name: &str) -> EvalResult<RuntimeValue> {
        self.scopes
            .lookup(name)
            .map(|variable| variable.value.clone())
            .ok_or_else(|| RuntimeError::VariableNotFound { name: name.to_string() }.into())
    }

    fn evaluate_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        let value = self.evaluate(condition)?;
        Ok(expect_bool(&value)?)
    }

    /// Declares a variable in the innermost scope. Without an initializer the
    /// variable starts as `null`, which only a nullable type accepts.
    fn declare_variable(&mut self,
                        immutable: bool,
                        name: &str,
                        ty: Type,
                        initial_value: Option<&Expr>)
                        -> EvalResult<()> {
        let value = match initial_value {
            Some(expression) => self.evaluate(expression)?,
            None => RuntimeValue::void(),
        };
        if !value.can_be_assigned_to(ty) {
            return Err(RuntimeError::InvalidRuntimeType { expected: ty.to_string(),
                                                          actual:   value.ty.to_string(), }.into());
        }

        trace!(variable = name, %ty, %value, immutable, "declared variable");
        self.scopes.declare(Variable { name: name.to_string(),
                                       ty,
                                       immutable,
                                       value })?;
        Ok(())
    }

    /// Assigns to an existing variable. Only identifiers can be targets.
    fn assign(&mut self, target: &Expr, value: &Expr) -> EvalResult<()> {
        let Expr::Identifier(name) = target else {
            return Err(RuntimeError::InvalidOperation { operation: "=".to_string(),
                                                        left_type: "expression".to_string(), }.into());
        };

        let Some(variable) = self.scopes.lookup(name) else {
            return Err(RuntimeError::VariableNotFound { name: name.clone() }.into());
        };
        if variable.immutable {
            return Err(RuntimeError::ImmutableVariable { name: name.clone() }.into());
        }

        let value = self.evaluate(value)?;
        let Some(variable) = self.scopes.lookup_mut(name) else {
            return Err(RuntimeError::VariableNotFound { name: name.clone() }.into());
        };
        if !value.can_be_assigned_to(variable.ty) {
            return Err(RuntimeError::InvalidRuntimeType { expected: variable.ty.to_string(),
                                                          actual:   value.ty.to_string(), }.into());
        }
        trace!(variable = %name, %value, "assigned variable");
        variable.value = value;
        Ok(())
    }
}
