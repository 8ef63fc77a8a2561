// Test utility module for interfaced integration tests
#![allow(dead_code)]

use interfaced::{CallableDecl, TypeDecl, TypeId, TypeRegistry};
use std::path::PathBuf;

/// `(self) -> returns`
pub fn method(returns: &str) -> CallableDecl {
    CallableDecl::new().param("self").returns(returns)
}

/// `(self, a: int) -> returns`
pub fn int_method(returns: &str) -> CallableDecl {
    CallableDecl::new()
        .param("self")
        .typed_param("a", "int")
        .returns(returns)
}

pub fn registry_of(decls: impl IntoIterator<Item = TypeDecl>) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for decl in decls {
        let name = decl.name.clone();
        registry
            .register(decl)
            .unwrap_or_else(|e| panic!("failed to register {}: {}", name, e));
    }
    registry
}

pub fn id(registry: &TypeRegistry, name: &str) -> TypeId {
    registry
        .lookup(name)
        .unwrap_or_else(|| panic!("{} is not registered", name))
}

/// `Shape { area() -> float; describe() -> str (default) }` and five candidates
pub fn shapes_registry() -> TypeRegistry {
    registry_of([
        TypeDecl::interface("Shape")
            .method("area", method("float"))
            .default_method("describe", method("str")),
        TypeDecl::class("Circle")
            .parent("Shape")
            .method("area", method("float")),
        TypeDecl::class("Circle2")
            .parent("Shape")
            .method("area", method("str")),
        TypeDecl::class("DuckShape")
            .method("area", method("float"))
            .method("describe", method("str")),
        TypeDecl::class("PartialDuck").method("area", method("float")),
    ])
}

pub fn demo_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(file)
}
