use std::{collections::HashMap, fmt};

/// The primitive part of a type, without nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point number.
    Double,
    /// UTF-8 text.
    String,
    /// `true` or `false`.
    Bool,
    /// The type of `null` and of functions that return nothing.
    Void,
}

impl Primitive {
    /// The keyword spelling of the primitive (`int`, `double`, ...).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Void => "void",
        }
    }
}

/// A primitive type together with its nullability.
///
/// `int` and `int?` are different types: a nullable value can never flow into
/// a non-nullable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type {
    pub primitive: Primitive,
    pub nullable:  bool,
}

impl Type {
    pub const INT: Self = Self::new(Primitive::Int, false);
    pub const DOUBLE: Self = Self::new(Primitive::Double, false);
    pub const STRING: Self = Self::new(Primitive::String, false);
    pub const BOOL: Self = Self::new(Primitive::Bool, false);
    /// The type of `null` literals and the default return type of functions.
    pub const VOID: Self = Self::new(Primitive::Void, true);

    #[must_use]
    pub const fn new(primitive: Primitive, nullable: bool) -> Self {
        Self { primitive, nullable }
    }

    /// The same primitive with nullability switched on.
    #[must_use]
    pub const fn to_nullable(self) -> Self {
        Self::new(self.primitive, true)
    }

    /// The same primitive with nullability switched off.
    #[must_use]
    pub const fn to_non_nullable(self) -> Self {
        Self::new(self.primitive, false)
    }

    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self.primitive, Primitive::Void)
    }

    /// Returns `true` when a value of type `self` may be stored in a slot of
    /// type `target`.
    ///
    /// The primitives must agree, except that `void` (the type of `null`) fits
    /// any nullable slot. A nullable type never fits a non-nullable slot.
    ///
    /// # Example
    /// ```
    /// use nulla::ast::Type;
    ///
    /// assert!(Type::INT.is_assignable_to(Type::INT.to_nullable()));
    /// assert!(Type::VOID.is_assignable_to(Type::STRING.to_nullable()));
    /// assert!(!Type::INT.to_nullable().is_assignable_to(Type::INT));
    /// assert!(!Type::INT.is_assignable_to(Type::DOUBLE));
    /// ```
    #[must_use]
    pub fn is_assignable_to(self, target: Self) -> bool {
        let primitive_fits = self.primitive == target.primitive
                             || (target.nullable && self.primitive == Primitive::Void);
        primitive_fits && (!self.nullable || target.nullable)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable && !self.is_void() {
            write!(f, "{}?", self.primitive.keyword())
        } else {
            write!(f, "{}", self.primitive.keyword())
        }
    }
}

/// A constant written directly in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Double(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// `==`, `!=`, `<`, `<=`, `>` and `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOperator {
    Plus,
    Minus,
}

impl AdditiveOperator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplicativeOperator {
    Multiply,
    Divide,
    Modulo,
}

/// Prefix operators: logical `!` and arithmetic `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Minus,
}

/// An expression node.
///
/// Chains of the same precedence level keep their first operand in `left` and
/// every following operand, in source order, in `right`. A chain always holds
/// at least one operand in `right`; a lone operand is stored as itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `a || b || ...`
    Disjunction {
        left:  Box<Expr>,
        right: Vec<Expr>,
    },
    /// `a && b && ...`
    Conjunction {
        left:  Box<Expr>,
        right: Vec<Expr>,
    },
    /// A single, non-chaining comparison.
    Comparison {
        left:     Box<Expr>,
        operator: ComparisonOperator,
        right:    Box<Expr>,
    },
    /// `left ?: right`; `right` is only evaluated when `left` is null.
    NullSafety {
        left:  Box<Expr>,
        right: Box<Expr>,
    },
    Additive {
        left:  Box<Expr>,
        right: Vec<(AdditiveOperator, Expr)>,
    },
    Multiplicative {
        left:  Box<Expr>,
        right: Vec<(MultiplicativeOperator, Expr)>,
    },
    /// `expr as Type`
    As {
        left:   Box<Expr>,
        target: Type,
    },
    Unary {
        operator: UnaryOperator,
        operand:  Box<Expr>,
    },
    Literal(LiteralValue),
    Identifier(String),
    FunctionCall {
        name:      String,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    /// Shorthand for an identifier node.
    #[must_use]
    pub fn identifier(name: &str) -> Self {
        Self::Identifier(name.to_string())
    }

    /// Shorthand for a literal node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Shorthand for a call node.
    #[must_use]
    pub fn call(name: &str, arguments: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.to_string(),
                             arguments }
    }
}

/// A statement node. Blocks are plain statement lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    If {
        condition: Expr,
        body:      Vec<Statement>,
        else_body: Option<Vec<Statement>>,
    },
    While {
        condition: Expr,
        body:      Vec<Statement>,
    },
    Return(Option<Expr>),
    /// An expression evaluated for its effect, or an assignment when
    /// `assigned` holds a value. Assignment targets are always identifiers.
    Expression {
        expression: Expr,
        assigned:   Option<Expr>,
    },
    /// `var T name = init` or `const T name = init`.
    VariableDeclaration {
        immutable:     bool,
        name:          String,
        ty:            Type,
        initial_value: Option<Expr>,
    },
}

/// A formal parameter: `type name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty:   Type,
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name:        String,
    pub parameters:  Vec<Parameter>,
    pub return_type: Type,
    pub body:        Vec<Statement>,
}

/// The result of parsing a whole source: top-level statements in source order
/// and every function declaration keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub functions:  HashMap<String, FunctionDecl>,
}
