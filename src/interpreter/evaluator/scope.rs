use std::collections::HashMap;

use tracing::trace;

use crate::{ast::Type, error::RuntimeError, interpreter::value::core::RuntimeValue};

/// A named storage slot.
///
/// `ty` is the declared type; every value stored here must be assignable to
/// it. `value` keeps its own runtime type.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name:      String,
    pub ty:        Type,
    pub immutable: bool,
    pub value:     RuntimeValue,
}

#[derive(Debug, Default)]
struct Scope {
    parent:    Option<usize>,
    variables: HashMap<String, Variable>,
}

/// All live scopes, innermost last.
///
/// Scope `0` is the global scope and is never popped. Lookups follow parent
/// links from the innermost scope, so a function body sees its own locals,
/// its parameters and the globals, but never the locals of its caller.
///
/// # Example
/// ```
/// use nulla::{
///     ast::Type,
///     interpreter::{
///         evaluator::scope::{ScopeArena, Variable},
///         value::core::RuntimeValue,
///     },
/// };
///
/// let variable = |name: &str, value: i64| Variable { name:      name.to_string(),
///                                                   ty:        Type::INT,
///                                                   immutable: false,
///                                                   value:     RuntimeValue::int(value), };
///
/// let mut scopes = ScopeArena::new();
/// scopes.declare(variable("x", 1)).unwrap();
///
/// scopes.push_local();
/// scopes.declare(variable("x", 2)).unwrap();
/// assert_eq!(scopes.lookup("x").unwrap().value, RuntimeValue::int(2));
/// assert!(scopes.declare(variable("x", 3)).is_err());
///
/// scopes.push_function([variable("y", 4)]);
/// assert_eq!(scopes.depth(), 3);
/// assert_eq!(scopes.lookup("x").unwrap().value, RuntimeValue::int(1));
///
/// scopes.pop();
/// scopes.pop();
/// assert_eq!(scopes.lookup("x").unwrap().value, RuntimeValue::int(1));
/// assert!(scopes.lookup("y").is_none());
/// ```
#[derive(Debug)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeArena {
    /// Creates an arena holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Opens a block scope nested in the current one.
    pub fn push_local(&mut self) {
        let parent = self.current();
        self.scopes.push(Scope { parent:    Some(parent),
                                 variables: HashMap::new(), });
        trace!(depth = self.scopes.len(), "pushed local scope");
    }

    /// Opens a function scope whose parent is the global scope and binds the
    /// parameters in it.
    pub fn push_function(&mut self, parameters: impl IntoIterator<Item = Variable>) {
        let variables = parameters.into_iter()
                                  .map(|variable| (variable.name.clone(), variable))
                                  .collect();
        self.scopes.push(Scope { parent: Some(0),
                                 variables });
        trace!(depth = self.scopes.len(), "pushed function scope");
    }

    /// Closes the innermost scope. The global scope stays.
    pub fn pop(&mut self) {
        debug_assert!(self.scopes.len() > 1, "the global scope cannot be popped");
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
        trace!(depth = self.scopes.len(), "popped scope");
    }

    /// Number of live scopes, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declares a variable in the innermost scope.
    ///
    /// # Errors
    /// [`RuntimeError::DuplicateVariable`] when the innermost scope already
    /// holds a variable with that name. Shadowing a variable of an enclosing
    /// scope is allowed.
    pub fn declare(&mut self, variable: Variable) -> Result<(), RuntimeError> {
        let current = self.current();
        let scope = &mut self.scopes[current];

        if scope.variables.contains_key(&variable.name) {
            return Err(RuntimeError::DuplicateVariable { name: variable.name });
        }
        scope.variables.insert(variable.name.clone(), variable);
        Ok(())
    }

    /// Finds the nearest visible variable with the given name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        let index = self.resolve(name)?;
        self.scopes[index].variables.get(name)
    }

    /// Mutable counterpart of [`ScopeArena::lookup`].
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Variable> {
        let index = self.resolve(name)?;
        self.scopes[index].variables.get_mut(name)
    }

    fn current(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Index of the scope that holds `name`, walking parent links outwards.
    fn resolve(&self, name: &str) -> Option<usize> {
        let mut index = Some(self.current());
        while let Some(i) = index {
            let scope = &self.scopes[i];
            if scope.variables.contains_key(name) {
                return Some(i);
            }
            index = scope.parent;
        }
        None
    }
}
