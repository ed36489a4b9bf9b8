use std::{fmt, rc::Rc};

use tracing::debug;

use crate::{
    ast::{Expr, FunctionDecl, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, Signal},
            function::builtin::{BuiltinFunction, StandardLibrary},
            scope::Variable,
        },
        value::core::RuntimeValue,
    },
};

/// What a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Values assignable to the type.
    Typed(Type),
    /// Any value at all, `null` included.
    Any,
}

impl ParamKind {
    #[must_use]
    pub fn accepts(self, value: &RuntimeValue) -> bool {
        match self {
            Self::Typed(ty) => value.can_be_assigned_to(ty),
            Self::Any => true,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed(ty) => write!(f, "{ty}"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// A resolved call target.
#[derive(Debug, Clone)]
pub enum Callable {
    Builtin(&'static BuiltinFunction),
    User(Rc<FunctionDecl>),
}

impl Callable {
    #[must_use]
    pub fn parameters(&self) -> Vec<ParamKind> {
        match self {
            Self::Builtin(builtin) => builtin.parameters.to_vec(),
            Self::User(function) => {
                function.parameters.iter().map(|p| ParamKind::Typed(p.ty)).collect()
            },
        }
    }
}

/// Checks argument count, then each argument against its parameter.
///
/// # Errors
/// [`RuntimeError::InvalidFunctionArgumentsNumber`] on a count mismatch,
/// [`RuntimeError::InvalidRuntimeType`] for the first argument its parameter
/// does not accept.
pub fn check_arguments(parameters: &[ParamKind],
                       arguments: &[RuntimeValue])
                       -> Result<(), RuntimeError> {
    if parameters.len() != arguments.len() {
        return Err(RuntimeError::InvalidFunctionArgumentsNumber { expected: parameters.len(),
                                                                  actual:   arguments.len(), });
    }

    for (parameter, argument) in parameters.iter().zip(arguments) {
        if !parameter.accepts(argument) {
            return Err(RuntimeError::InvalidRuntimeType { expected: parameter.to_string(),
                                                          actual:   argument.ty.to_string(), });
        }
    }
    Ok(())
}

impl Interpreter<'_, '_> {
    /// Evaluates a function call.
    ///
    /// The name is looked up among the built-ins first, then among the user
    /// functions. Arguments are evaluated left to right and checked before
    /// the body runs.
    pub(crate) fn call_function(&mut self,
                                name: &str,
                                arguments: &[Expr])
                                -> EvalResult<RuntimeValue> {
        let callable = self.resolve_function(name)?;

        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;
        check_arguments(&callable.parameters(), &arguments)?;

        match callable {
            Callable::Builtin(builtin) => Ok(self.stdlib.call(builtin, &arguments)?),
            Callable::User(function) => self.call_user_defined_function(&function, arguments),
        }
    }

    fn resolve_function(&self, name: &str) -> Result<Callable, RuntimeError> {
        if let Some(builtin) = StandardLibrary::try_get_function(name) {
            return Ok(Callable::Builtin(builtin));
        }
        self.functions
            .get(name)
            .map(|function| Callable::User(Rc::clone(function)))
            .ok_or_else(|| RuntimeError::FunctionNotFound { name: name.to_string() })
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound as mutable variables in a scope whose parent is
    /// the global scope. A function that declares a return type must end in a
    /// `return` whose value fits that type.
    ///
    /// # Errors
    /// - `StackOverflow` once the call depth limit is reached.
    /// - `NoReturnFromFunction` when a non-void function falls off its end.
    /// - `InvalidRuntimeType` when the returned value does not fit.
    fn call_user_defined_function(&mut self,
                                  function: &FunctionDecl,
                                  arguments: Vec<RuntimeValue>)
                                  -> EvalResult<RuntimeValue> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::StackOverflow { function: function.name.clone(),
                                                     limit:    self.config.max_call_depth, }.into());
        }

        debug!(function = %function.name, depth = self.depth + 1, "calling function");
        let bindings = function.parameters
                               .iter()
                               .zip(arguments)
                               .map(|(parameter, value)| Variable { name: parameter.name.clone(),
                                                                    ty: parameter.ty,
                                                                    immutable: false,
                                                                    value });

        self.scopes.push_function(bindings);
        self.depth += 1;
        let outcome = self.execute_block(&function.body);
        self.depth -= 1;
        self.scopes.pop();

        match outcome {
            Ok(()) if function.return_type.is_void() => Ok(RuntimeValue::void()),
            Ok(()) => {
                Err(RuntimeError::NoReturnFromFunction { function: function.name.clone() }.into())
            },
            Err(Signal::Return(value)) if function.return_type.is_void() && value.is_null() => {
                Ok(RuntimeValue::void())
            },
            Err(Signal::Return(value)) if value.can_be_assigned_to(function.return_type) => {
                Ok(value)
            },
            Err(Signal::Return(value)) => {
                Err(RuntimeError::InvalidRuntimeType { expected: function.return_type.to_string(),
                                                       actual:   value.ty.to_string(), }.into())
            },
            Err(failure) => Err(failure),
        }
    }
}
