// index-sentry-core/src/core/action.rs
// ============================================================================
// Module: Index Sentry Action Classes
// Description: Protected/unprotected classification for action names.
// Purpose: Tag actions by sensitivity for the tier decision table.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Actions are opaque names classified into two sensitivity classes. The
//! classification predicate itself belongs to the surrounding privilege
//! pipeline and reaches the evaluator through the
//! [`ActionClassifier`](crate::interfaces::ActionClassifier) collaborator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Action Class
// ============================================================================

/// Sensitivity class of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionClass {
    /// Mutating or administrative action.
    Protected,
    /// Read-like action.
    Unprotected,
}

impl ActionClass {
    /// Returns true for mutating or administrative actions.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Protected)
    }
}
