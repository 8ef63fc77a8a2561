use super::member::{AccessorDecl, CallableDecl, Member, MemberDecl, Value};
use serde::{Deserialize, Serialize};

/// A type as registered: its name, declared parents and own members.
///
/// Parents are referenced by name and resolved when the declaration is
/// registered, so they have to be registered first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    /// Tagged as a contract; the tag is inherited by nominal subtypes
    #[serde(default)]
    pub interface: bool,
    /// Defines its own initializer, which lifts the interface construction guard
    #[serde(default)]
    pub initializer: bool,
}

impl TypeDecl {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            members: Vec::new(),
            interface: false,
            initializer: false,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            interface: true,
            ..Self::class(name)
        }
    }

    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parents.push(name.into());
        self
    }

    pub fn method(self, name: impl Into<String>, callable: CallableDecl) -> Self {
        self.member(MemberDecl::new(name, Member::Method(callable)))
    }

    /// Method with a provided implementation that nominal subtypes may skip
    pub fn default_method(self, name: impl Into<String>, callable: CallableDecl) -> Self {
        self.member(MemberDecl::new(name, Member::Method(callable)).tagged_default())
    }

    pub fn property(self, name: impl Into<String>, accessor: AccessorDecl) -> Self {
        self.member(MemberDecl::new(name, Member::Property(accessor)))
    }

    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.member(MemberDecl::new(
            name,
            Member::Value {
                value: value.into(),
            },
        ))
    }

    pub fn member(mut self, member: MemberDecl) -> Self {
        self.members.push(member);
        self
    }

    pub fn initializer(mut self) -> Self {
        self.initializer = true;
        self
    }
}
