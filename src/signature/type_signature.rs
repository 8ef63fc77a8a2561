use super::descriptor::{describe, ParameterNames, SignatureDescriptor};
use crate::conformance::{self, DefaultPolicy};
use crate::reflect::{TypeId, TypeRegistry};
use std::collections::BTreeSet;

/// Structural fingerprint of one type, frozen when built.
///
/// Holds every ordinary member (inherited ones included) with its descriptor,
/// in ascending name order, plus the names tagged `default`. Nothing here
/// tracks later changes to the registry; build a new signature instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSignature {
    type_id: TypeId,
    name: String,
    parents: Vec<TypeId>,
    members: Vec<(String, SignatureDescriptor)>,
    defaults: BTreeSet<String>,
}

impl TypeSignature {
    pub fn build(registry: &TypeRegistry, id: TypeId, names: ParameterNames) -> Self {
        let resolved = registry.members_of(id);

        let defaults = resolved
            .iter()
            .filter(|member| member.default)
            .map(|member| member.name.to_string())
            .collect();
        let members = resolved
            .iter()
            .map(|member| (member.name.to_string(), describe(member.member, names)))
            .collect();

        Self {
            type_id: id,
            name: registry.name(id).to_string(),
            parents: registry.parents_of(id).to_vec(),
            members,
            defaults,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> &[TypeId] {
        &self.parents
    }

    pub fn members(&self) -> &[(String, SignatureDescriptor)] {
        &self.members
    }

    pub fn defaults(&self) -> &BTreeSet<String> {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.defaults.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&SignatureDescriptor> {
        // members are enumerated in name order
        self.members
            .binary_search_by(|(member, _)| member.as_str().cmp(name))
            .ok()
            .map(|index| &self.members[index].1)
    }

    /// Whether this signature has `name` with exactly `descriptor`
    pub fn has_matching(&self, name: &str, descriptor: &SignatureDescriptor) -> bool {
        self.get(name) == Some(descriptor)
    }

    /// Identical (name, descriptor) sequences, element for element.
    ///
    /// Exact-shape equality; conformance uses the weaker [`Self::contains`].
    pub fn equals(&self, other: &TypeSignature) -> bool {
        self.members == other.members
    }

    /// `other` is literally one of this type's immediate declared parents
    pub fn declares_as_parent(&self, other: &TypeSignature) -> bool {
        self.parents.contains(&other.type_id)
    }

    /// Every member of `other` is present here with an equal descriptor.
    /// Extra members on `self` are allowed.
    pub fn contains(&self, other: &TypeSignature) -> bool {
        other
            .members
            .iter()
            .all(|(name, descriptor)| self.has_matching(name, descriptor))
    }

    /// Conformance of this type to `interface`, trusting declared parentage
    /// for default members
    pub fn implements(&self, interface: &TypeSignature) -> bool {
        conformance::satisfies(self, interface, DefaultPolicy::TrustParent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{CallableDecl, TypeDecl};

    fn method() -> CallableDecl {
        CallableDecl::new().param("self")
    }

    fn signature(registry: &TypeRegistry, name: &str) -> TypeSignature {
        let id = registry.lookup(name).unwrap();
        TypeSignature::build(registry, id, ParameterNames::Sensitive)
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                TypeDecl::interface("Shape")
                    .method("area", method().returns("float"))
                    .default_method("describe", method().returns("str")),
            )
            .unwrap();
        registry
            .register(
                TypeDecl::class("Circle")
                    .parent("Shape")
                    .method("area", method().returns("float"))
                    .value("sides", 0),
            )
            .unwrap();
        registry
            .register(
                TypeDecl::class("Duck")
                    .method("area", method().returns("float"))
                    .method("describe", method().returns("str")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_build_collects_inherited_members_in_name_order() {
        let registry = registry();
        let circle = signature(&registry, "Circle");

        let names: Vec<_> = circle.members().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["area", "describe", "sides"]);
        assert!(circle.is_default("describe"));
        assert!(!circle.is_default("area"));
        assert_eq!(circle.len(), 3);
    }

    #[test]
    fn test_special_members_never_appear() {
        let mut registry = TypeRegistry::new();
        let id = registry
            .register(
                TypeDecl::class("A")
                    .method("__init__", method())
                    .method("__eq__", method().param("other")),
            )
            .unwrap();

        let sig = TypeSignature::build(&registry, id, ParameterNames::Sensitive);
        assert!(sig.is_empty());
        assert!(sig.get("__init__").is_none());
    }

    #[test]
    fn test_equals_is_exact_shape() {
        let registry = registry();
        let shape = signature(&registry, "Shape");
        let duck = signature(&registry, "Duck");
        let circle = signature(&registry, "Circle");

        assert!(shape.equals(&duck));
        assert!(duck.equals(&shape));
        assert!(!circle.equals(&shape));
    }

    #[test]
    fn test_contains_is_asymmetric() {
        let registry = registry();
        let shape = signature(&registry, "Shape");
        let circle = signature(&registry, "Circle");

        assert!(circle.contains(&shape));
        assert!(!shape.contains(&circle));
        assert!(shape.contains(&shape));
    }

    #[test]
    fn test_declares_as_parent_is_nominal() {
        let registry = registry();
        let shape = signature(&registry, "Shape");
        let circle = signature(&registry, "Circle");
        let duck = signature(&registry, "Duck");

        assert!(circle.declares_as_parent(&shape));
        assert!(!duck.declares_as_parent(&shape));
        assert!(!shape.declares_as_parent(&circle));
    }

    #[test]
    fn test_implements_uses_conformance_rule() {
        let registry = registry();
        let shape = signature(&registry, "Shape");

        assert!(signature(&registry, "Circle").implements(&shape));
        assert!(signature(&registry, "Duck").implements(&shape));
    }
}
