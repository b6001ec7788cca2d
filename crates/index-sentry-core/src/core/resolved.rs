// index-sentry-core/src/core/resolved.rs
// ============================================================================
// Module: Index Sentry Resolved Targets
// Description: The upstream-resolved set of indices a request targets.
// Purpose: Represent concrete target sets and the wildcard-all marker.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Upstream request resolution produces either the wildcard-all marker or a
//! concrete set of index names. The set is immutable once produced; the
//! evaluator only reads it. Names are kept sorted so log and audit output is
//! deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::IndexName;

// ============================================================================
// SECTION: Resolved Indices
// ============================================================================

/// The set of indices a request targets after upstream resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedIndices {
    /// The wildcard `_all` marker: the request targets every local index.
    All,
    /// Concrete index names, sorted.
    Named(BTreeSet<IndexName>),
}

impl ResolvedIndices {
    /// Builds a concrete target set from index names.
    #[must_use]
    pub fn named<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<IndexName>,
    {
        Self::Named(names.into_iter().map(Into::into).collect())
    }

    /// Returns true when this is the wildcard-all marker.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the concrete names, empty for the wildcard marker.
    #[must_use]
    pub fn names(&self) -> Vec<&IndexName> {
        match self {
            Self::All => Vec::new(),
            Self::Named(names) => names.iter().collect(),
        }
    }
}
