//! Structural conformance
//!
//! Decides whether a candidate type satisfies an interface by comparing member
//! signatures. Two rules apply, chosen per query:
//!
//! - **Declared parent**: the candidate lists the interface as an immediate
//!   parent and the interface has at most one parent of its own. Inheritance
//!   is trusted to supply `default` members, so only the others are checked.
//! - **Full containment**: every other case. Every interface member, default
//!   or not, must be present on the candidate with an equal descriptor.
//!
//! Matching is exact. A narrowed return type or a renamed parameter (under
//! the default name policy) is a mismatch, not a compatible override.

pub mod engine;
pub mod report;

pub use engine::{declares_parent, is_conformant, signatures_equal, ConformanceEngine};
pub use report::{explain, ConformanceReport, Mismatch};

use crate::signature::{ParameterNames, SignatureDescriptor, TypeSignature};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule a query was decided by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    DeclaredParent,
    FullContainment,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeclaredParent => write!(f, "declared-parent branch"),
            Self::FullContainment => write!(f, "full containment branch"),
        }
    }
}

/// Treatment of `default` members on the declared-parent branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultPolicy {
    /// Exempt them; declared parentage is trusted to provide them
    #[default]
    TrustParent,
    /// Require the candidate's resolved member to match as well
    VerifyReachable,
}

/// Knobs for how strictly descriptors are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub parameter_names: ParameterNames,
    pub defaults: DefaultPolicy,
}

pub fn select_branch(candidate: &TypeSignature, interface: &TypeSignature) -> Branch {
    if candidate.declares_as_parent(interface) && interface.parents().len() <= 1 {
        Branch::DeclaredParent
    } else {
        Branch::FullContainment
    }
}

pub(crate) fn is_exempt(
    interface: &TypeSignature,
    name: &str,
    branch: Branch,
    policy: DefaultPolicy,
) -> bool {
    branch == Branch::DeclaredParent
        && policy == DefaultPolicy::TrustParent
        && interface.is_default(name)
}

/// Interface members the candidate must match, exemptions removed
pub(crate) fn required_members<'a>(
    interface: &'a TypeSignature,
    branch: Branch,
    policy: DefaultPolicy,
) -> impl Iterator<Item = (&'a str, &'a SignatureDescriptor)> + 'a {
    interface
        .members()
        .iter()
        .filter(move |(name, _)| !is_exempt(interface, name, branch, policy))
        .map(|(name, descriptor)| (name.as_str(), descriptor))
}

/// The conformance predicate over already-built signatures
pub fn satisfies(
    candidate: &TypeSignature,
    interface: &TypeSignature,
    policy: DefaultPolicy,
) -> bool {
    let branch = select_branch(candidate, interface);
    tracing::debug!(
        candidate = candidate.name(),
        interface = interface.name(),
        %branch,
        "selected conformance branch"
    );

    required_members(interface, branch, policy)
        .all(|(name, descriptor)| candidate.has_matching(name, descriptor))
}
