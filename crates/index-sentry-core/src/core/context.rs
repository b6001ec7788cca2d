// index-sentry-core/src/core/context.rs
// ============================================================================
// Module: Index Sentry Evaluation Context
// Description: Per-call caller identity and cluster-catalog snapshot.
// Purpose: Carry the immutable inputs shared by evaluator and collaborators.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The evaluation context is assembled by the surrounding privilege pipeline
//! once per request: the caller's identity with effective roles, plus a
//! snapshot of the cluster's known indices obtained from the metadata
//! accessor. The snapshot may be eventually consistent; it is read once per
//! call and never refreshed mid-evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;
use crate::core::identifiers::RoleName;

// ============================================================================
// SECTION: Caller
// ============================================================================

/// Caller identity for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// Caller name.
    pub name: String,
    /// Effective role names, sorted.
    pub roles: BTreeSet<RoleName>,
}

impl Caller {
    /// Creates a caller with the given name and roles.
    #[must_use]
    pub fn new<I, R>(name: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleName>,
    {
        Self {
            name: name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the role set for log messages.
    #[must_use]
    pub fn roles_label(&self) -> String {
        let names: Vec<&str> = self.roles.iter().map(RoleName::as_str).collect();
        format!("[{}]", names.join(", "))
    }
}

// ============================================================================
// SECTION: Index Catalog
// ============================================================================

/// Snapshot of the cluster's known index names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexCatalog {
    /// Known index names, sorted.
    names: BTreeSet<IndexName>,
}

impl IndexCatalog {
    /// Creates a catalog from index names.
    #[must_use]
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<IndexName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the known index names.
    pub fn names(&self) -> impl Iterator<Item = &IndexName> {
        self.names.iter()
    }

    /// Returns true when the name is known to the cluster.
    #[must_use]
    pub fn contains(&self, name: &IndexName) -> bool {
        self.names.contains(name)
    }
}

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// Per-call context handed to the evaluator and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Caller identity.
    pub caller: Caller,
    /// Cluster catalog snapshot for this call.
    pub catalog: IndexCatalog,
}

impl EvaluationContext {
    /// Creates a context from caller and catalog snapshot.
    #[must_use]
    pub const fn new(caller: Caller, catalog: IndexCatalog) -> Self {
        Self {
            caller,
            catalog,
        }
    }
}
