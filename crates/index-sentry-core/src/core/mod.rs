// index-sentry-core/src/core/mod.rs
// ============================================================================
// Module: Index Sentry Core Types
// Description: Canonical identifier, tier, and configuration structures.
// Purpose: Provide stable, serializable types for access-tier evaluation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types define the identifiers, target sets, tier taxonomy, and
//! configuration consumed by the evaluator. These types are the canonical
//! source of truth for any derived surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod action;
pub mod config;
pub mod context;
pub mod identifiers;
pub mod resolved;
pub mod tier;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use action::ActionClass;
pub use config::ConfigError;
pub use config::EvaluatorConfig;
pub use context::Caller;
pub use context::EvaluationContext;
pub use context::IndexCatalog;
pub use identifiers::ActionName;
pub use identifiers::IndexName;
pub use identifiers::RoleName;
pub use identifiers::TaskId;
pub use resolved::ResolvedIndices;
pub use tier::IndexPattern;
pub use tier::IndexTier;
pub use tier::PROTECTED_SYSTEM_INDEX;
pub use tier::PatternError;
pub use tier::SystemIndexRegistry;
