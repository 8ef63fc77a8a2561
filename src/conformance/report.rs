use super::{is_exempt, required_members, select_branch, Branch, DefaultPolicy};
use crate::signature::TypeSignature;
use serde::Serialize;
use std::fmt;

/// One interface member the candidate fails to match
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Mismatch {
    /// No member of that name on the candidate
    Missing {
        member: String,
        default: bool,
        expected: String,
    },
    /// Present, but with a different descriptor
    SignatureMismatch {
        member: String,
        default: bool,
        expected: String,
        found: String,
    },
}

impl Mismatch {
    pub fn member(&self) -> &str {
        match self {
            Self::Missing { member, .. } | Self::SignatureMismatch { member, .. } => member,
        }
    }

    /// The interface tagged this member `default`
    pub fn is_default(&self) -> bool {
        match self {
            Self::Missing { default, .. } | Self::SignatureMismatch { default, .. } => *default,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_default() { " (default)" } else { "" };
        match self {
            Self::Missing {
                member, expected, ..
            } => write!(f, "missing `{}`{}: expected {}", member, tag, expected),
            Self::SignatureMismatch {
                member,
                expected,
                found,
                ..
            } => write!(
                f,
                "`{}`{} differs: expected {}, found {}",
                member, tag, expected, found
            ),
        }
    }
}

/// Why a candidate does or does not conform to an interface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformanceReport {
    pub candidate: String,
    pub interface: String,
    pub branch: Branch,
    pub conforms: bool,
    /// Default members skipped on the declared-parent branch
    pub exempted: Vec<String>,
    pub mismatches: Vec<Mismatch>,
}

/// Walk every interface member and record what the candidate lacks
pub fn explain(
    candidate: &TypeSignature,
    interface: &TypeSignature,
    policy: DefaultPolicy,
) -> ConformanceReport {
    let branch = select_branch(candidate, interface);
    let exempted = interface
        .members()
        .iter()
        .filter(|(name, _)| is_exempt(interface, name, branch, policy))
        .map(|(name, _)| name.clone())
        .collect();

    let mut mismatches = Vec::new();
    for (name, expected) in required_members(interface, branch, policy) {
        let default = interface.is_default(name);
        match candidate.get(name) {
            None => mismatches.push(Mismatch::Missing {
                member: name.to_string(),
                default,
                expected: expected.to_string(),
            }),
            Some(found) if found != expected => mismatches.push(Mismatch::SignatureMismatch {
                member: name.to_string(),
                default,
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            Some(_) => {}
        }
    }

    ConformanceReport {
        candidate: candidate.name().to_string(),
        interface: interface.name().to_string(),
        branch,
        conforms: mismatches.is_empty(),
        exempted,
        mismatches,
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.conforms {
            "conforms to"
        } else {
            "does not conform to"
        };
        write!(
            f,
            "{} {} {} ({})",
            self.candidate, verdict, self.interface, self.branch
        )?;
        for mismatch in &self.mismatches {
            write!(f, "\n  - {}", mismatch)?;
        }
        Ok(())
    }
}
