// index-sentry-core/src/runtime/verdict.rs
// ============================================================================
// Module: Index Sentry Verdicts
// Description: Evaluation outcomes returned by the access-tier evaluator.
// Purpose: Encode at-most-one-verdict semantics as a return type.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The evaluator returns a verdict instead of mutating a shared response
//! object; the caller applies the verdict exactly once, which makes the
//! at-most-one-verdict invariant a property of the type rather than a runtime
//! discipline. The evaluator itself only produces [`Verdict::PassThrough`]
//! and [`Verdict::Deny`]; [`Verdict::Allow`] exists for later pipeline
//! stages that share the verdict type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Denial
// ============================================================================

/// Reason label for a denial, stable for audit correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Protected action targeted the wildcard `_all` marker.
    WildcardAllProtectedAction,
    /// Target set included the protected-system index.
    ProtectedSystemIndex,
    /// System-tier target while system-index permissions are disabled.
    SystemIndexFeature,
    /// Caller lacks the system-index-access grant for the target.
    MissingSystemIndexGrant,
}

/// Denial outcome with the exact message that was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    /// Stable reason label.
    pub reason: DenialReason,
    /// Human-readable message, identical to the log line.
    pub message: String,
}

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Outcome of one evaluator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No decision rendered; later pipeline stages continue evaluation.
    PassThrough,
    /// Explicit allow, reserved for later pipeline stages.
    Allow,
    /// Operation must not proceed.
    Deny(Denial),
}

impl Verdict {
    /// Returns true for a denial.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Deny(_))
    }

    /// Returns true for a pass-through.
    #[must_use]
    pub const fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// Returns the denial, if any.
    #[must_use]
    pub const fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Deny(denial) => Some(denial),
            Self::PassThrough | Self::Allow => None,
        }
    }
}
