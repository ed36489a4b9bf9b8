#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during interpretation.
pub enum RuntimeError {
    /// A value had a type that the operation does not accept.
    InvalidRuntimeType {
        /// The type (or list of types) the operation expected.
        expected: String,
        /// The type that was found.
        actual:   String,
    },
    /// Read or assignment of an undeclared variable.
    VariableNotFound {
        /// The name of the variable.
        name: String,
    },
    /// Call of a function that is neither user-defined nor built in.
    FunctionNotFound {
        /// The name of the function.
        name: String,
    },
    /// A call passed the wrong number of arguments.
    InvalidFunctionArgumentsNumber {
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments passed.
        actual:   usize,
    },
    /// An `as` conversion that cannot be performed.
    InvalidCast {
        /// The target type.
        expected: String,
        /// The value that could not be converted.
        actual:   String,
    },
    /// Division or remainder by zero.
    ZeroDivision,
    /// Assignment to a `const` variable.
    ImmutableVariable {
        /// The name of the variable.
        name: String,
    },
    /// A function with a non-void return type finished without `return`.
    NoReturnFromFunction {
        /// The name of the function.
        function: String,
    },
    /// A user function tried to take the name of a built-in.
    StandardLibraryFunctionOverridden {
        /// The name of the function.
        function: String,
    },
    /// An operator applied to an operand type it does not support.
    InvalidOperation {
        /// The operator.
        operation: String,
        /// The type of the left operand.
        left_type: String,
    },
    /// A variable declared twice in the same scope.
    DuplicateVariable {
        /// The name of the variable.
        name: String,
    },
    /// The call depth limit was reached.
    StackOverflow {
        /// The function whose call exceeded the limit.
        function: String,
        /// The configured maximum depth.
        limit:    usize,
    },
    /// The standard library failed to read input or write output.
    Io {
        /// The underlying error message.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRuntimeType { expected, actual } => {
                write!(f, "Invalid type: expected {expected}, found {actual}.")
            },
            Self::VariableNotFound { name } => write!(f, "Variable '{name}' not found."),
            Self::FunctionNotFound { name } => write!(f, "Function '{name}' not found."),
            Self::InvalidFunctionArgumentsNumber { expected, actual } => {
                write!(f, "Invalid number of arguments: expected {expected}, found {actual}.")
            },
            Self::InvalidCast { expected, actual } => {
                write!(f, "Cannot cast '{actual}' to {expected}.")
            },
            Self::ZeroDivision => write!(f, "Division by zero."),
            Self::ImmutableVariable { name } => {
                write!(f, "Cannot assign to immutable variable '{name}'.")
            },
            Self::NoReturnFromFunction { function } => {
                write!(f, "Function '{function}' finished without returning a value.")
            },
            Self::StandardLibraryFunctionOverridden { function } => {
                write!(f, "Cannot override standard library function '{function}'.")
            },
            Self::InvalidOperation { operation, left_type } => {
                write!(f, "Operation '{operation}' is not supported for {left_type}.")
            },
            Self::DuplicateVariable { name } => {
                write!(f, "Variable '{name}' is already declared in this scope.")
            },
            Self::StackOverflow { function, limit } => write!(f,
                                                              "Call to '{function}' exceeds the \
                                                               maximum call depth of {limit}."),
            Self::Io { details } => write!(f, "I/O failure: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
