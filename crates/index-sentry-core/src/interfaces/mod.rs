// index-sentry-core/src/interfaces/mod.rs
// ============================================================================
// Module: Index Sentry Interfaces
// Description: Collaborator traits for audit, grants, classification, and requests.
// Purpose: Define the contract surfaces the evaluator calls out to.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! Interfaces define how the evaluator integrates with the surrounding
//! privilege pipeline without embedding engine-specific details.
//! Implementations must be deterministic; the evaluator fails closed on its
//! own and never depends on a collaborator to deny.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Serialize;

use crate::core::ActionClass;
use crate::core::EvaluationContext;
use crate::core::SystemIndexRegistry;
use crate::core::identifiers::ActionName;
use crate::core::identifiers::IndexName;
use crate::core::identifiers::TaskId;
use crate::core::resolved::ResolvedIndices;

// ============================================================================
// SECTION: Access Request
// ============================================================================

/// Shape of an inbound request as far as the evaluator cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Search-style request with a result cache.
    Search,
    /// Multi-get-style request with real-time visibility.
    MultiGet,
    /// Any other request type.
    Other,
}

/// Mutable request surface exposed to the evaluator.
///
/// The toggles are meaningful only for the matching [`RequestKind`]; the
/// default implementations are no-ops so plain requests need not implement
/// them.
pub trait AccessRequest {
    /// Returns the request shape.
    fn kind(&self) -> RequestKind;

    /// Forces the search result cache off for this request.
    fn disable_request_cache(&mut self) {}

    /// Forces real-time reads off for this request.
    fn disable_realtime(&mut self) {}
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Audit event describing an access attempt against a sensitive index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityIndexAttempt {
    /// Event identifier.
    pub event: &'static str,
    /// Action name of the attempt.
    pub action: ActionName,
    /// Request shape.
    pub request_kind: RequestKind,
    /// Indices the attempt targeted.
    pub indices: ResolvedIndices,
    /// Caller name.
    pub caller: String,
    /// Task handle when the pipeline supplied one.
    pub task: Option<TaskId>,
}

/// Audit sink for security-index access attempts.
///
/// Called exactly once per denial path that involves a system- or
/// protected-system-tier index, never on plain pass-through. Delivery
/// failures are a sink concern and must not influence the verdict.
pub trait AuditSink: Send + Sync {
    /// Records an access attempt against a sensitive index.
    fn log_security_index_attempt(&self, attempt: &SecurityIndexAttempt);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn log_security_index_attempt(&self, attempt: &SecurityIndexAttempt) {
        if let Ok(payload) = serde_json::to_string(attempt) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn log_security_index_attempt(&self, _attempt: &SecurityIndexAttempt) {}
}

// ============================================================================
// SECTION: Grant Resolver
// ============================================================================

/// Lookup for the distinguished system-index-access capability.
///
/// Computed by the external privileges engine from the caller's effective
/// permission set; consumed here as a single capability check over the
/// targeted indices.
pub trait GrantResolver {
    /// Returns true when the caller holds the system-index-access grant for
    /// every one of the given indices.
    fn has_system_index_grant(&self, ctx: &EvaluationContext, indices: &[&IndexName]) -> bool;
}

// ============================================================================
// SECTION: Action Classifier
// ============================================================================

/// Predicate classifying actions by sensitivity.
pub trait ActionClassifier: Send + Sync {
    /// Classifies the action as protected or unprotected.
    fn classify(&self, action: &ActionName) -> ActionClass;
}

// ============================================================================
// SECTION: Index Resolver
// ============================================================================

/// Index-resolution helper used by the read-shaping path.
///
/// Maps a resolved target set to the concrete system-tier names it touches,
/// expanding the wildcard marker against the per-call catalog.
pub trait IndexResolver: Send + Sync {
    /// Returns the system-tier indices the resolved set touches.
    fn system_indices_in(
        &self,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
    ) -> Vec<IndexName>;
}

/// [`IndexResolver`] backed by the configured system-index registry.
#[derive(Debug, Clone)]
pub struct RegistryIndexResolver {
    /// Registry used for tier checks.
    registry: SystemIndexRegistry,
}

impl RegistryIndexResolver {
    /// Creates a resolver over the given registry.
    #[must_use]
    pub const fn new(registry: SystemIndexRegistry) -> Self {
        Self {
            registry,
        }
    }
}

impl IndexResolver for RegistryIndexResolver {
    fn system_indices_in(
        &self,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
    ) -> Vec<IndexName> {
        match resolved {
            ResolvedIndices::All => ctx
                .catalog
                .names()
                .filter(|name| self.registry.is_system_index(name))
                .cloned()
                .collect(),
            ResolvedIndices::Named(names) => names
                .iter()
                .filter(|name| self.registry.is_system_index(name))
                .cloned()
                .collect(),
        }
    }
}
