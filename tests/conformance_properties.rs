//! Property-based tests for conformance checking
//!
//! These tests verify invariants that should hold for all declared shapes:
//! - Every type conforms to itself
//! - A declared child that re-declares every required member conforms,
//!   whatever it does with defaults
//! - An undeclared copy conforms; dropping any member breaks it
//! - Extra members never break conformance
//! - The explaining check agrees with the predicate, and repeats agree

mod common;

use common::{id, registry_of};
use interfaced::{is_conformant, CallableDecl, ConformanceEngine, TypeDecl};
use proptest::prelude::*;
use std::collections::BTreeMap;

const NAMES: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon"];
const TYPES: &[&str] = &["int", "str", "float", "Self"];

#[derive(Debug, Clone)]
struct MemberShape {
    returns: &'static str,
    default: bool,
}

fn member_shapes() -> impl Strategy<Value = BTreeMap<&'static str, MemberShape>> {
    prop::collection::btree_map(
        prop::sample::select(NAMES),
        (prop::sample::select(TYPES), any::<bool>())
            .prop_map(|(returns, default)| MemberShape { returns, default }),
        1..NAMES.len(),
    )
}

fn callable(returns: &str) -> CallableDecl {
    CallableDecl::new().param("self").returns(returns)
}

fn interface_decl(shapes: &BTreeMap<&'static str, MemberShape>) -> TypeDecl {
    shapes
        .iter()
        .fold(TypeDecl::interface("Contract"), |decl, (name, shape)| {
            if shape.default {
                decl.default_method(*name, callable(shape.returns))
            } else {
                decl.method(*name, callable(shape.returns))
            }
        })
}

/// Plain copy of every member, no declared parent
fn duck_decl(name: &str, shapes: &BTreeMap<&'static str, MemberShape>) -> TypeDecl {
    shapes.iter().fold(TypeDecl::class(name), |decl, (member, shape)| {
        decl.method(*member, callable(shape.returns))
    })
}

proptest! {
    #[test]
    fn prop_every_type_conforms_to_itself(shapes in member_shapes()) {
        let registry = registry_of([interface_decl(&shapes), duck_decl("Duck", &shapes)]);
        for ty in registry.ids() {
            prop_assert!(is_conformant(&registry, ty, ty));
        }
    }

    #[test]
    fn prop_declared_child_needs_only_required_members(
        shapes in member_shapes(),
        mangle_defaults in any::<bool>(),
    ) {
        let child = shapes.iter().fold(
            TypeDecl::class("Child").parent("Contract"),
            |decl, (name, shape)| match (shape.default, mangle_defaults) {
                (false, _) => decl.method(*name, callable(shape.returns)),
                (true, true) => decl.method(*name, callable("Mangled")),
                (true, false) => decl,
            },
        );
        let registry = registry_of([interface_decl(&shapes), child]);

        prop_assert!(is_conformant(
            &registry,
            id(&registry, "Child"),
            id(&registry, "Contract")
        ));
    }

    #[test]
    fn prop_undeclared_copy_conforms_and_any_omission_breaks_it(
        shapes in member_shapes(),
        omit in prop::sample::select(NAMES),
    ) {
        let mut partial_shapes = shapes.clone();
        let omitted = partial_shapes.remove(omit).is_some();

        let registry = registry_of([
            interface_decl(&shapes),
            duck_decl("Duck", &shapes),
            duck_decl("Partial", &partial_shapes),
        ]);
        let contract = id(&registry, "Contract");

        prop_assert!(is_conformant(&registry, id(&registry, "Duck"), contract));
        prop_assert_eq!(
            is_conformant(&registry, id(&registry, "Partial"), contract),
            !omitted
        );
    }

    #[test]
    fn prop_extra_members_never_break_conformance(
        shapes in member_shapes(),
        extra in "[a-z]{1,8}_extra",
    ) {
        let wider = duck_decl("Wider", &shapes).method(extra, callable("bytes"));
        let registry = registry_of([interface_decl(&shapes), wider]);

        prop_assert!(is_conformant(
            &registry,
            id(&registry, "Wider"),
            id(&registry, "Contract")
        ));
    }

    #[test]
    fn prop_check_agrees_with_predicate_and_is_idempotent(
        shapes in member_shapes(),
        other in member_shapes(),
    ) {
        let child = other.iter().fold(
            TypeDecl::class("Child").parent("Contract"),
            |decl, (name, shape)| decl.method(*name, callable(shape.returns)),
        );
        let registry = registry_of([
            interface_decl(&shapes),
            duck_decl("Duck", &other),
            child,
        ]);
        let engine = ConformanceEngine::new(&registry);

        for candidate in registry.ids() {
            for interface in registry.ids() {
                let first = engine.is_conformant(candidate, interface);
                prop_assert_eq!(first, engine.is_conformant(candidate, interface));
                prop_assert_eq!(first, engine.check(candidate, interface).conforms);
            }
        }
    }
}
