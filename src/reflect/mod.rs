//! Reflection over registered types
//!
//! Supplies what conformance checking needs to know about a type:
//! - its ordinary member names, with special names filtered out
//! - the declared shape of each member
//! - which members carry the `default` tag
//! - its immediate declared parents

pub mod decl;
pub mod member;
pub mod registry;
pub mod special;

pub use decl::TypeDecl;
pub use member::{
    AccessorDecl, Annotation, CallableDecl, Member, MemberDecl, ParamDecl, ParamKind, Value,
};
pub use registry::{ResolvedMember, TypeId, TypeRegistry};
pub use special::is_special_name;
