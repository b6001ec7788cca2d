// index-sentry-core/src/lib.rs
// ============================================================================
// Module: Index Sentry Core Library
// Description: Public API surface for the Index Sentry core.
// Purpose: Expose core types, collaborator interfaces, and the evaluator.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Index Sentry core provides the system-index access evaluator that sits in
//! front of a distributed search engine's request-execution path. It
//! classifies target indices into ordinary, system, and protected-system
//! tiers and applies a layered, fail-closed permission model. Integration
//! with the surrounding privilege pipeline happens through explicit
//! interfaces rather than shared mutable state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::AccessRequest;
pub use interfaces::ActionClassifier;
pub use interfaces::AuditSink;
pub use interfaces::GrantResolver;
pub use interfaces::IndexResolver;
pub use interfaces::NoopAuditSink;
pub use interfaces::RegistryIndexResolver;
pub use interfaces::RequestKind;
pub use interfaces::SecurityIndexAttempt;
pub use interfaces::StderrAuditSink;
pub use runtime::AccessTierEvaluator;
pub use runtime::Denial;
pub use runtime::DenialReason;
pub use runtime::Verdict;
