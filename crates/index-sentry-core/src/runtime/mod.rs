// index-sentry-core/src/runtime/mod.rs
// ============================================================================
// Module: Index Sentry Runtime
// Description: The access-tier evaluator and its verdict types.
// Purpose: Host the per-request decision engine.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime components evaluate one request at a time against the tiered
//! access rules and return a verdict the caller applies exactly once.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod evaluator;
pub mod verdict;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluator::AccessTierEvaluator;
pub use verdict::Denial;
pub use verdict::DenialReason;
pub use verdict::Verdict;
