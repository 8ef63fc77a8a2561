//! Member declarations
//!
//! Rust cannot introspect a type's methods at runtime, so members are declared
//! as data: a method lists its parameters and return annotation, a property
//! lists its getter/setter/deleter, and anything else is a plain value.

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A declared type annotation.
///
/// A forward reference names a type by string before it exists. It is kept
/// distinct from a direct reference to the same type: `Type("Shape")` and
/// `Forward("Shape")` never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Annotation {
    Type(String),
    Forward(String),
}

impl Annotation {
    pub fn ty(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }

    pub fn forward(name: impl Into<String>) -> Self {
        Self::Forward(name.into())
    }

    /// The referenced type name, without forward-reference quoting
    pub fn name(&self) -> &str {
        match self {
            Self::Type(name) | Self::Forward(name) => name,
        }
    }
}

impl FromStr for Annotation {
    type Err = Error;

    /// `'Shape'` (single-quoted) is a forward reference, `Shape` is direct.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (inner, forward) = match trimmed
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            Some(inner) => (inner.trim(), true),
            None => (trimmed, false),
        };

        if inner.is_empty() || inner.contains('\'') {
            return Err(Error::InvalidAnnotation(format!("`{}`", s)));
        }

        Ok(if forward {
            Self::Forward(inner.to_string())
        } else {
            Self::Type(inner.to_string())
        })
    }
}

impl TryFrom<String> for Annotation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Annotation> for String {
    fn from(annotation: Annotation) -> Self {
        annotation.to_string()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => write!(f, "{}", name),
            Self::Forward(name) => write!(f, "'{}'", name),
        }
    }
}

/// How an argument binds to a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamKind {
    PositionalOnly,
    #[default]
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

/// Plain data compared by value.
///
/// Numbers compare across representations the way a dynamic host does:
/// `Int(1)`, `Float(1.0)` and `Bool(true)` are all equal. Integer and float
/// comparison is exact, and a NaN equals any other NaN so that every value
/// equals itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

fn floats_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// `i == f` without rounding `i` through `f64`
fn integer_equals_float(i: i64, f: f64) -> bool {
    // 2^63, the first float past i64::MAX
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-BOUND..BOUND).contains(&f) && f as i64 == i
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => floats_equal(*a, *b),
            _ => match (self.as_integer(), other.as_integer()) {
                (Some(a), Some(b)) => a == b,
                (Some(i), None) => other.as_float().is_some_and(|f| integer_equals_float(i, f)),
                (None, Some(i)) => self.as_float().is_some_and(|f| integer_equals_float(i, f)),
                (None, None) => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "None"),
            Self::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Str(s) => write!(f, "{:?}", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(default)]
    pub kind: ParamKind,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::default(),
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Declared shape of something invocable
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallableDecl {
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Annotation>,
}

impl CallableDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unannotated positional-or-keyword parameter
    pub fn param(self, name: impl Into<String>) -> Self {
        self.with_param(ParamDecl::new(name))
    }

    /// Parameter annotated with a direct type reference
    pub fn typed_param(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.with_param(ParamDecl::new(name).with_annotation(Annotation::ty(ty)))
    }

    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Return annotation as a direct type reference
    pub fn returns(self, ty: impl Into<String>) -> Self {
        self.returns_annotation(Annotation::ty(ty))
    }

    pub fn returns_annotation(mut self, annotation: Annotation) -> Self {
        self.returns = Some(annotation);
        self
    }
}

/// A property-like member with independent get/set/delete behavior
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessorDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<CallableDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<CallableDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleter: Option<CallableDecl>,
}

impl AccessorDecl {
    pub fn getter(getter: CallableDecl) -> Self {
        Self {
            getter: Some(getter),
            ..Self::default()
        }
    }

    pub fn with_setter(mut self, setter: CallableDecl) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn with_deleter(mut self, deleter: CallableDecl) -> Self {
        self.deleter = Some(deleter);
        self
    }
}

/// Everything a type member can be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Member {
    Method(CallableDecl),
    Property(AccessorDecl),
    Value { value: Value },
}

/// A named member as written on one type, with its default tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    /// Optionally inherited: nominal subtypes need not override it
    #[serde(default)]
    pub default: bool,
    #[serde(flatten)]
    pub member: Member,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>, member: Member) -> Self {
        Self {
            name: name.into(),
            default: false,
            member,
        }
    }

    pub fn tagged_default(mut self) -> Self {
        self.default = true;
        self
    }
}
