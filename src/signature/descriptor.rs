//! Signature descriptors
//!
//! Extracts a comparable fingerprint from a declared member:
//! - Methods → parameter list plus return annotation
//! - Properties → getter, setter and deleter signatures
//! - Plain values → the value itself
//!
//! Extraction only reads declarations; it never runs anything.

use crate::reflect::{AccessorDecl, Annotation, CallableDecl, Member, ParamDecl, ParamKind, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether parameter names take part in signature equality.
///
/// `Sensitive` matches how signature objects compare in a dynamic host:
/// renaming a parameter changes the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterNames {
    #[default]
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSignature {
    /// `None` when names are erased by [`ParameterNames::Insensitive`]
    pub name: Option<String>,
    pub kind: ParamKind,
    pub annotation: Option<Annotation>,
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocableSignature {
    pub parameters: Vec<ParameterSignature>,
    pub returns: Option<Annotation>,
}

/// Getter, setter and deleter signatures; `None` is the absent placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessorSignature {
    pub getter: Option<InvocableSignature>,
    pub setter: Option<InvocableSignature>,
    pub deleter: Option<InvocableSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignatureDescriptor {
    Invocable(InvocableSignature),
    Accessor(AccessorSignature),
    Opaque { value: Value },
}

/// Describe a member's declared shape
pub fn describe(member: &Member, names: ParameterNames) -> SignatureDescriptor {
    match member {
        Member::Property(accessor) => {
            SignatureDescriptor::Accessor(describe_accessor(accessor, names))
        }
        Member::Method(callable) => {
            SignatureDescriptor::Invocable(describe_callable(callable, names))
        }
        Member::Value { value } => SignatureDescriptor::Opaque {
            value: value.clone(),
        },
    }
}

fn describe_accessor(accessor: &AccessorDecl, names: ParameterNames) -> AccessorSignature {
    let part = |callable: &Option<CallableDecl>| {
        callable
            .as_ref()
            .map(|callable| describe_callable(callable, names))
    };

    AccessorSignature {
        getter: part(&accessor.getter),
        setter: part(&accessor.setter),
        deleter: part(&accessor.deleter),
    }
}

fn describe_callable(callable: &CallableDecl, names: ParameterNames) -> InvocableSignature {
    InvocableSignature {
        parameters: callable
            .params
            .iter()
            .map(|param| describe_param(param, names))
            .collect(),
        returns: callable.returns.clone(),
    }
}

fn describe_param(param: &ParamDecl, names: ParameterNames) -> ParameterSignature {
    ParameterSignature {
        name: match names {
            ParameterNames::Sensitive => Some(param.name.clone()),
            ParameterNames::Insensitive => None,
        },
        kind: param.kind,
        annotation: param.annotation.clone(),
        default: param.default.clone(),
    }
}

impl fmt::Display for ParameterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParamKind::VarPositional => write!(f, "*")?,
            ParamKind::VarKeyword => write!(f, "**")?,
            _ => {}
        }
        write!(f, "{}", self.name.as_deref().unwrap_or("_"))?;
        if let Some(annotation) = &self.annotation {
            write!(f, ": {}", annotation)?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

impl fmt::Display for InvocableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut keyword_marker_written = false;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if param.kind == ParamKind::KeywordOnly && !keyword_marker_written {
                let after_var_positional = self.parameters[..i]
                    .iter()
                    .any(|p| p.kind == ParamKind::VarPositional);
                if !after_var_positional {
                    write!(f, "*, ")?;
                }
                keyword_marker_written = true;
            }
            write!(f, "{}", param)?;
            let next_kind = self.parameters.get(i + 1).map(|p| p.kind);
            if param.kind == ParamKind::PositionalOnly
                && next_kind != Some(ParamKind::PositionalOnly)
            {
                write!(f, ", /")?;
            }
        }
        write!(f, ")")?;
        if let Some(returns) = &self.returns {
            write!(f, " -> {}", returns)?;
        }
        Ok(())
    }
}

impl fmt::Display for AccessorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            ("get", &self.getter),
            ("set", &self.setter),
            ("del", &self.deleter),
        ];
        write!(f, "property {{ ")?;
        for (i, (label, part)) in parts.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match part {
                Some(signature) => write!(f, "{}{}", label, signature)?,
                None => write!(f, "{} <absent>", label)?,
            }
        }
        write!(f, " }}")
    }
}

impl fmt::Display for SignatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invocable(signature) => write!(f, "{}", signature),
            Self::Accessor(signature) => write!(f, "{}", signature),
            Self::Opaque { value } => write!(f, "= {}", value),
        }
    }
}
