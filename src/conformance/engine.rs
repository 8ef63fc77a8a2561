use super::report::{explain, ConformanceReport};
use super::{satisfies, MatchOptions};
use crate::reflect::{TypeId, TypeRegistry};
use crate::signature::TypeSignature;

/// Answers conformance queries against one registry.
///
/// Every query builds fresh signatures for both sides; nothing is cached, so
/// repeated queries over unchanged types always agree.
#[derive(Debug, Clone, Copy)]
pub struct ConformanceEngine<'r> {
    registry: &'r TypeRegistry,
    options: MatchOptions,
}

impl<'r> ConformanceEngine<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_options(registry, MatchOptions::default())
    }

    pub fn with_options(registry: &'r TypeRegistry, options: MatchOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn signature(&self, id: TypeId) -> TypeSignature {
        TypeSignature::build(self.registry, id, self.options.parameter_names)
    }

    /// Does `candidate` structurally satisfy `interface`
    pub fn is_conformant(&self, candidate: TypeId, interface: TypeId) -> bool {
        let candidate_sig = self.signature(candidate);
        let interface_sig = self.signature(interface);
        satisfies(&candidate_sig, &interface_sig, self.options.defaults)
    }

    /// Same decision as [`Self::is_conformant`], with the reasons
    pub fn check(&self, candidate: TypeId, interface: TypeId) -> ConformanceReport {
        let report = explain(
            &self.signature(candidate),
            &self.signature(interface),
            self.options.defaults,
        );
        for mismatch in &report.mismatches {
            tracing::debug!(
                candidate = %report.candidate,
                interface = %report.interface,
                "{}",
                mismatch
            );
        }
        report
    }

    /// Exact-shape equality, ignoring special members
    pub fn signatures_equal(&self, a: TypeId, b: TypeId) -> bool {
        self.signature(a).equals(&self.signature(b))
    }

    /// `parent` is one of `candidate`'s immediate declared parents
    pub fn declares_parent(&self, candidate: TypeId, parent: TypeId) -> bool {
        self.registry.parents_of(candidate).contains(&parent)
    }

    /// Every registered type that conforms to `interface`, in registration order
    pub fn conforming_types(&self, interface: TypeId) -> Vec<TypeId> {
        let interface_sig = self.signature(interface);
        self.registry
            .ids()
            .filter(|&id| {
                satisfies(&self.signature(id), &interface_sig, self.options.defaults)
            })
            .collect()
    }
}

/// Conformance with default matching options
pub fn is_conformant(registry: &TypeRegistry, candidate: TypeId, interface: TypeId) -> bool {
    ConformanceEngine::new(registry).is_conformant(candidate, interface)
}

/// Exact-shape equality with default matching options
pub fn signatures_equal(registry: &TypeRegistry, a: TypeId, b: TypeId) -> bool {
    ConformanceEngine::new(registry).signatures_equal(a, b)
}

/// Nominal immediate-parent check
pub fn declares_parent(registry: &TypeRegistry, candidate: TypeId, parent: TypeId) -> bool {
    ConformanceEngine::new(registry).declares_parent(candidate, parent)
}
