//! Interface construction guard and instance checks
//!
//! Interface-tagged types are abstract: constructing one fails unless the type
//! defines its own initializer. The tag is inherited, so a nominal subtype of
//! an interface needs its own initializer too.

use crate::conformance::ConformanceEngine;
use crate::errors::{Error, Result};
use crate::reflect::{TypeId, TypeRegistry};

/// A constructed value of a registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
    type_id: TypeId,
}

impl Instance {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Instance check: the instance's type conforms to `interface`
    pub fn is_instance_of(&self, engine: &ConformanceEngine<'_>, interface: TypeId) -> bool {
        engine.is_conformant(self.type_id, interface)
    }
}

pub fn instantiate(registry: &TypeRegistry, id: TypeId) -> Result<Instance> {
    if registry.is_interface(id) && !registry.decl(id).initializer {
        tracing::debug!(type_name = registry.name(id), "construction denied");
        return Err(Error::ConstructionDenied {
            type_name: registry.name(id).to_string(),
        });
    }
    Ok(Instance { type_id: id })
}
