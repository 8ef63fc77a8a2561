/// Registry of declared types and their member resolution
///
/// This module stands in for host reflection:
/// - Types are registered once, parents before children
/// - Each registration computes a C3 member resolution order
/// - Member lookup walks that order, so inherited members are visible
/// - Special names are filtered out of every member listing
use super::decl::TypeDecl;
use super::member::Member;
use super::special::is_special_name;
use crate::errors::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Handle to a registered type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(usize);

#[derive(Debug, Clone)]
struct TypeEntry {
    decl: TypeDecl,
    parents: Vec<TypeId>,
    /// Starts with the type itself
    mro: Vec<TypeId>,
    interface: bool,
}

/// A member as seen through a type, possibly inherited
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMember<'a> {
    pub name: &'a str,
    pub member: &'a Member,
    /// Tag carried over from the declaration that supplied the member
    pub default: bool,
    /// Type whose declaration supplied the member
    pub owner: TypeId,
}

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
    by_name: HashMap<String, TypeId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type declaration.
    ///
    /// Fails on a duplicate name, an unknown or repeated parent, or a
    /// hierarchy with no consistent resolution order. Since parents must
    /// already be registered, hierarchies are acyclic.
    pub fn register(&mut self, decl: TypeDecl) -> Result<TypeId> {
        if self.by_name.contains_key(&decl.name) {
            return Err(Error::DuplicateType(decl.name));
        }

        let parents = self.resolve_parents(&decl)?;
        let id = TypeId(self.entries.len());
        let mro = self
            .linearize(id, &parents)
            .ok_or_else(|| Error::InconsistentHierarchy(decl.name.clone()))?;
        let interface = decl.interface || parents.iter().any(|p| self.entry(*p).interface);

        tracing::trace!(
            type_name = %decl.name,
            parents = parents.len(),
            interface,
            "registered type"
        );

        self.by_name.insert(decl.name.clone(), id);
        self.entries.push(TypeEntry {
            decl,
            parents,
            mro,
            interface,
        });
        Ok(id)
    }

    fn resolve_parents(&self, decl: &TypeDecl) -> Result<Vec<TypeId>> {
        let mut seen = HashSet::new();
        decl.parents
            .iter()
            .map(|parent| {
                let id = self
                    .lookup(parent)
                    .ok_or_else(|| Error::UnknownParent {
                        type_name: decl.name.clone(),
                        parent: parent.clone(),
                    })?;
                if !seen.insert(id) {
                    return Err(Error::DuplicateParent {
                        type_name: decl.name.clone(),
                        parent: parent.clone(),
                    });
                }
                Ok(id)
            })
            .collect()
    }

    /// C3 linearization of a not-yet-registered type over registered parents
    fn linearize(&self, id: TypeId, parents: &[TypeId]) -> Option<Vec<TypeId>> {
        let mut sequences: Vec<VecDeque<TypeId>> = parents
            .iter()
            .map(|p| self.entry(*p).mro.iter().copied().collect())
            .collect();
        sequences.push(parents.iter().copied().collect());

        let mut order = vec![id];
        loop {
            sequences.retain(|seq| !seq.is_empty());
            if sequences.is_empty() {
                return Some(order);
            }

            // A head is eligible when it appears in no sequence's tail
            let head = sequences
                .iter()
                .map(|seq| seq[0])
                .find(|candidate| {
                    !sequences
                        .iter()
                        .any(|seq| seq.iter().skip(1).any(|t| t == candidate))
                })?;

            order.push(head);
            for seq in &mut sequences {
                if seq.front() == Some(&head) {
                    seq.pop_front();
                }
            }
        }
    }

    fn entry(&self, id: TypeId) -> &TypeEntry {
        &self.entries[id.0]
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, name: &str) -> Result<TypeId> {
        self.lookup(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    pub fn name(&self, id: TypeId) -> &str {
        &self.entry(id).decl.name
    }

    pub fn decl(&self, id: TypeId) -> &TypeDecl {
        &self.entry(id).decl
    }

    /// Immediate declared parents, in declaration order
    pub fn parents_of(&self, id: TypeId) -> &[TypeId] {
        &self.entry(id).parents
    }

    /// Member resolution order, starting with the type itself
    pub fn mro(&self, id: TypeId) -> &[TypeId] {
        &self.entry(id).mro
    }

    /// Declared an interface, or derived from one
    pub fn is_interface(&self, id: TypeId) -> bool {
        self.entry(id).interface
    }

    /// Whether the type itself carries the interface tag
    pub fn declares_interface(&self, id: TypeId) -> bool {
        self.entry(id).decl.interface
    }

    /// Ordinary members visible on a type, in ascending name order.
    ///
    /// The first type in the resolution order that declares a name supplies
    /// it. Within one declaration a later member shadows an earlier one of
    /// the same name.
    pub fn members_of(&self, id: TypeId) -> Vec<ResolvedMember<'_>> {
        let mut resolved: BTreeMap<&str, ResolvedMember<'_>> = BTreeMap::new();

        for &owner in self.mro(id) {
            for decl in self.entry(owner).decl.members.iter().rev() {
                if is_special_name(&decl.name) {
                    continue;
                }
                resolved.entry(decl.name.as_str()).or_insert(ResolvedMember {
                    name: &decl.name,
                    member: &decl.member,
                    default: decl.default,
                    owner,
                });
            }
        }

        resolved.into_values().collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.entries.len()).map(TypeId)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
