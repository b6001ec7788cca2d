// index-sentry-core/src/core/tier.rs
// ============================================================================
// Module: Index Sentry Tier Classification
// Description: Index tier taxonomy and the configured system-index registry.
// Purpose: Classify index names into ordinary, system, and protected-system tiers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every index name classifies into exactly one tier. Classification is a pure
//! function of the name and the static registry; caller identity never
//! participates. The protected-system name is fixed and non-configurable: it
//! is the index holding the access-control engine's own configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::IndexName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed name of the access-control configuration store.
///
/// Never configurable; access by a regular caller is always denied.
pub const PROTECTED_SYSTEM_INDEX: &str = ".sentry-security-config";

// ============================================================================
// SECTION: Index Tier
// ============================================================================

/// Access tier derived from an index name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexTier {
    /// No elevated handling.
    Ordinary,
    /// Operationally sensitive internal index matched by a configured pattern.
    System,
    /// The access-control configuration store itself.
    ProtectedSystem,
}

// ============================================================================
// SECTION: Pattern Errors
// ============================================================================

/// Errors raised while parsing system-index name patterns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// Pattern string was empty.
    #[error("system index pattern must not be empty")]
    Empty,
    /// Pattern contained whitespace or a list separator.
    #[error("system index pattern {0:?} contains an invalid character")]
    InvalidCharacter(String),
}

// ============================================================================
// SECTION: Index Pattern
// ============================================================================

/// Validated index name pattern: literal segments separated by `*` wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPattern {
    /// Raw pattern text, validated at parse time.
    raw: String,
}

impl IndexPattern {
    /// Parses and validates a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the pattern is empty or contains
    /// whitespace or a list separator.
    pub fn parse(raw: impl Into<String>) -> Result<Self, PatternError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if raw.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(PatternError::InvalidCharacter(raw));
        }
        Ok(Self {
            raw,
        })
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true when the pattern matches the index name.
    #[must_use]
    pub fn matches(&self, name: &IndexName) -> bool {
        wildcard_match(&self.raw, name.as_str())
    }
}

/// Matches `pattern` against `candidate`, treating `*` as any run of characters.
fn wildcard_match(pattern: &str, candidate: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == candidate;
    }
    let mut rest = candidate;
    let mut segments = pattern.split('*').peekable();
    let mut first = true;
    while let Some(segment) = segments.next() {
        if segment.is_empty() {
            first = false;
            continue;
        }
        if first {
            // Leading literal segment must anchor at the start.
            let Some(stripped) = rest.strip_prefix(segment) else {
                return false;
            };
            rest = stripped;
        } else if segments.peek().is_none() && !pattern.ends_with('*') {
            // Trailing literal segment must anchor at the end.
            return rest.ends_with(segment);
        } else {
            let Some(at) = rest.find(segment) else {
                return false;
            };
            rest = &rest[at + segment.len()..];
        }
        first = false;
    }
    true
}

// ============================================================================
// SECTION: System Index Registry
// ============================================================================

/// Configured system-index pattern set plus the fixed protected name.
///
/// # Invariants
/// - Patterns are validated before the registry exists.
/// - Classification depends only on the name and this registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemIndexRegistry {
    /// Ordered system-index name patterns.
    patterns: Vec<IndexPattern>,
    /// Fixed protected-system index name.
    protected: IndexName,
}

impl SystemIndexRegistry {
    /// Builds a registry from raw pattern strings.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for the first malformed pattern.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(IndexPattern::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
            protected: IndexName::new(PROTECTED_SYSTEM_INDEX),
        })
    }

    /// Returns the configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[IndexPattern] {
        &self.patterns
    }

    /// Returns the fixed protected-system index name.
    #[must_use]
    pub const fn protected_index(&self) -> &IndexName {
        &self.protected
    }

    /// Classifies an index name into its tier.
    ///
    /// The protected name wins even when it also matches a configured
    /// pattern.
    #[must_use]
    pub fn classify(&self, name: &IndexName) -> IndexTier {
        if name == &self.protected {
            return IndexTier::ProtectedSystem;
        }
        if self.patterns.iter().any(|pattern| pattern.matches(name)) {
            return IndexTier::System;
        }
        IndexTier::Ordinary
    }

    /// Returns true when the name is system-tier in the broad sense, which
    /// includes the protected-system index.
    #[must_use]
    pub fn is_system_index(&self, name: &IndexName) -> bool {
        self.classify(name) != IndexTier::Ordinary
    }
}
