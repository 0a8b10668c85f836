use serde::Serialize;

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// `A|B`, at least two members.
    Union(Vec<Type>),
    /// `A&B`, at least two members.
    Intersect(Vec<Type>),
    /// `(T)`
    Paren(Box<Type>),
    /// `T[]`
    Array(Box<Type>),
    /// `?T`
    Nullable(Box<Type>),
    /// `array` or `array{key: T, ...}`
    ArrayShape(Vec<ShapeElem>),
    /// `object` or `object{key: T, ...}`
    ObjectShape(Vec<ShapeElem>),
    /// `Base<A, B>`
    Generic { base: Box<Type>, params: Vec<Type> },
    Named(Name),
    /// `Class::NAME`, `Class::PREFIX*` or `Class::*`
    ConstFetch { class: Box<Type>, name: String },
    Literal(Literal),
    /// `$this`
    This,
    /// `callable` or `callable(params): Result`
    Callable {
        params: Vec<Param>,
        result: Option<Box<Type>>,
    },
}

impl Type {
    /// An unqualified single-segment name.
    pub fn named(name: &str) -> Type {
        Type::Named(Name {
            parts: vec![name.to_string()],
            fully_qualified: false,
        })
    }

    /// A name built from segments.
    pub fn qualified(parts: &[&str], fully_qualified: bool) -> Type {
        Type::Named(Name {
            parts: parts.iter().map(|s| s.to_string()).collect(),
            fully_qualified,
        })
    }

    pub fn array(elem: Type) -> Type {
        Type::Array(Box::new(elem))
    }

    pub fn nullable(inner: Type) -> Type {
        Type::Nullable(Box::new(inner))
    }

    pub fn generic(base: Type, params: Vec<Type>) -> Type {
        Type::Generic {
            base: Box::new(base),
            params,
        }
    }
}

/// A possibly namespaced name such as `\Foo\Bar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    pub parts: Vec<String>,
    pub fully_qualified: bool,
}

impl Name {
    /// The name is a single segment without a leading `\`.
    pub fn is_simple(&self) -> bool {
        !self.fully_qualified && self.parts.len() == 1
    }
}

/// One `key?: Type` entry of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeElem {
    /// Identifier, integer or quoted string, as written.
    pub key: String,
    pub optional: bool,
    pub ty: Type,
}

/// A literal as written in the source, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A parameter of `@param`, a callable type or a `@method` signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub ty: Type,
    pub by_ref: bool,
    pub variadic: bool,
    /// Name without `$`. Only signature parameters may omit it.
    pub name: Option<String>,
    pub default: Option<Literal>,
}
