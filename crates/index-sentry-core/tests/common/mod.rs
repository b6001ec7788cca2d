// index-sentry-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for access-tier evaluator tests.
// Purpose: Provide recording collaborators and probe requests.
// Dependencies: index-sentry-core
// ============================================================================

//! ## Overview
//! Provides recording audit sinks, fixed-grant resolvers, probe requests,
//! and evaluator builders shared by the evaluator test suites.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]
#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only panic-based assertions are permitted."
)]

use std::sync::Arc;
use std::sync::Mutex;

use index_sentry_core::AccessRequest;
use index_sentry_core::AccessTierEvaluator;
use index_sentry_core::ActionClass;
use index_sentry_core::ActionClassifier;
use index_sentry_core::ActionName;
use index_sentry_core::AuditSink;
use index_sentry_core::Caller;
use index_sentry_core::ConfigError;
use index_sentry_core::EvaluationContext;
use index_sentry_core::EvaluatorConfig;
use index_sentry_core::GrantResolver;
use index_sentry_core::IndexCatalog;
use index_sentry_core::IndexName;
use index_sentry_core::PROTECTED_SYSTEM_INDEX;
use index_sentry_core::RequestKind;
use index_sentry_core::SecurityIndexAttempt;

/// Read-like action used across the suites.
pub const UNPROTECTED_ACTION: &str = "indices:data/read";

/// Mutating action used across the suites.
pub const PROTECTED_ACTION: &str = "indices:data/write";

/// Ordinary index present in the catalog.
pub const TEST_INDEX: &str = ".test";

/// Index matching the configured system-index pattern.
pub const TEST_SYSTEM_INDEX: &str = ".test_system_index";

/// Audit sink that records every attempt for assertion.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded attempts in call order.
    attempts: Mutex<Vec<SecurityIndexAttempt>>,
}

impl RecordingAuditSink {
    /// Returns the number of recorded attempts.
    pub fn count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    /// Returns a copy of the recorded attempts.
    pub fn attempts(&self) -> Vec<SecurityIndexAttempt> {
        self.attempts.lock().unwrap().clone()
    }
}

impl AuditSink for RecordingAuditSink {
    fn log_security_index_attempt(&self, attempt: &SecurityIndexAttempt) {
        self.attempts.lock().unwrap().push(attempt.clone());
    }
}

/// Classifier that treats write and admin actions as protected.
pub struct WriteActionClassifier;

impl ActionClassifier for WriteActionClassifier {
    fn classify(&self, action: &ActionName) -> ActionClass {
        if action.as_str().contains("/write") || action.as_str().starts_with("indices:admin") {
            ActionClass::Protected
        } else {
            ActionClass::Unprotected
        }
    }
}

/// Grant resolver with a fixed answer.
pub struct FixedGrants(
    /// Answer returned for every lookup.
    pub bool,
);

impl GrantResolver for FixedGrants {
    fn has_system_index_grant(&self, _ctx: &EvaluationContext, _indices: &[&IndexName]) -> bool {
        self.0
    }
}

/// Plain request without shaping hooks.
pub struct PlainRequest;

impl AccessRequest for PlainRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Other
    }
}

/// Search-style probe counting cache toggles.
#[derive(Default)]
pub struct SearchProbe {
    /// Times the cache was forced off.
    pub cache_disabled: u32,
}

impl AccessRequest for SearchProbe {
    fn kind(&self) -> RequestKind {
        RequestKind::Search
    }

    fn disable_request_cache(&mut self) {
        self.cache_disabled += 1;
    }
}

/// Multi-get-style probe counting realtime toggles.
#[derive(Default)]
pub struct MultiGetProbe {
    /// Times realtime was forced off.
    pub realtime_disabled: u32,
}

impl AccessRequest for MultiGetProbe {
    fn kind(&self) -> RequestKind {
        RequestKind::MultiGet
    }

    fn disable_realtime(&mut self) {
        self.realtime_disabled += 1;
    }
}

/// Builds an evaluator over the standard test pattern set.
pub fn evaluator(
    system_indices_enabled: bool,
    system_index_permissions_enabled: bool,
) -> Result<(AccessTierEvaluator, Arc<RecordingAuditSink>), ConfigError> {
    let audit = Arc::new(RecordingAuditSink::default());
    let config = EvaluatorConfig::new(
        system_indices_enabled,
        system_index_permissions_enabled,
        [TEST_SYSTEM_INDEX],
    );
    let evaluator = AccessTierEvaluator::with_registry_resolver(
        config,
        audit.clone(),
        Arc::new(WriteActionClassifier),
    )?;
    Ok((evaluator, audit))
}

/// Builds the standard evaluation context: one caller role, full catalog.
pub fn ctx() -> EvaluationContext {
    EvaluationContext::new(
        Caller::new("user_a", ["role_a"]),
        IndexCatalog::new([TEST_INDEX, TEST_SYSTEM_INDEX, PROTECTED_SYSTEM_INDEX]),
    )
}
