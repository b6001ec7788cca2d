// index-sentry-core/src/core/config.rs
// ============================================================================
// Module: Index Sentry Configuration
// Description: Process-wide evaluator configuration and eager validation.
// Purpose: Carry the feature flags and system-index pattern list.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Evaluator configuration is immutable after construction. Malformed
//! configuration fails eagerly when the evaluator is built; it never surfaces
//! as a per-request error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::tier::PatternError;
use crate::core::tier::SystemIndexRegistry;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A system-index pattern failed to parse.
    #[error("invalid system index pattern: {0}")]
    Pattern(#[from] PatternError),
}

// ============================================================================
// SECTION: Evaluator Configuration
// ============================================================================

/// Feature flags and the declared system-index pattern set.
///
/// # Invariants
/// - Immutable after construction; shared freely across request threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Whether system-index special handling is enabled at all.
    pub system_indices_enabled: bool,
    /// Whether the finer-grained system-index permission override is enabled.
    pub system_index_permissions_enabled: bool,
    /// Configured system-index name patterns.
    pub system_index_patterns: Vec<String>,
}

impl EvaluatorConfig {
    /// Creates a configuration from flags and raw pattern strings.
    #[must_use]
    pub fn new<I, S>(
        system_indices_enabled: bool,
        system_index_permissions_enabled: bool,
        system_index_patterns: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            system_indices_enabled,
            system_index_permissions_enabled,
            system_index_patterns: system_index_patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates the pattern list into a classification registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for the first malformed pattern.
    pub fn build_registry(&self) -> Result<SystemIndexRegistry, ConfigError> {
        Ok(SystemIndexRegistry::from_patterns(
            self.system_index_patterns.iter().cloned(),
        )?)
    }
}
