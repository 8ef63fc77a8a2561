// Export modules for library usage
pub mod cli;
pub mod config;
pub mod conformance;
pub mod errors;
pub mod interface;
pub mod manifest;
pub mod reflect;
pub mod signature;

// Re-export commonly used types
pub use crate::conformance::{
    declares_parent, is_conformant, signatures_equal, Branch, ConformanceEngine,
    ConformanceReport, DefaultPolicy, MatchOptions, Mismatch,
};

pub use crate::errors::{Error, Result};

pub use crate::interface::{instantiate, Instance};

pub use crate::manifest::{load_manifest, Manifest, ManifestFormat};

pub use crate::reflect::{
    AccessorDecl, Annotation, CallableDecl, Member, MemberDecl, ParamDecl, ParamKind, TypeDecl,
    TypeId, TypeRegistry, Value,
};

pub use crate::signature::{describe, ParameterNames, SignatureDescriptor, TypeSignature};

/// Whether `candidate` names `parent` among its immediate declared parents.
///
/// Purely nominal, so it answers the plain subclass question even for
/// interfaces, whose conformance checks are structural.
pub fn bases(registry: &TypeRegistry, candidate: TypeId, parent: TypeId) -> bool {
    declares_parent(registry, candidate, parent)
}
