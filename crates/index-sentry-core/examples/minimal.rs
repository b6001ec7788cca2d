// crates/index-sentry-core/examples/minimal.rs
// ============================================================================
// Module: Index Sentry Minimal Example
// Description: Minimal end-to-end evaluation using in-memory collaborators.
// Purpose: Demonstrate evaluator construction and a denial verdict.
// Dependencies: index-sentry-core
// ============================================================================

//! ## Overview
//! Builds an evaluator with simple in-memory collaborators and evaluates a
//! read against a system index without the system-index-access grant.

use std::sync::Arc;

use index_sentry_core::AccessRequest;
use index_sentry_core::AccessTierEvaluator;
use index_sentry_core::ActionClass;
use index_sentry_core::ActionClassifier;
use index_sentry_core::ActionName;
use index_sentry_core::Caller;
use index_sentry_core::EvaluationContext;
use index_sentry_core::EvaluatorConfig;
use index_sentry_core::GrantResolver;
use index_sentry_core::IndexCatalog;
use index_sentry_core::IndexName;
use index_sentry_core::RequestKind;
use index_sentry_core::ResolvedIndices;
use index_sentry_core::StderrAuditSink;

/// Classifies write actions as protected.
struct WriteClassifier;

impl ActionClassifier for WriteClassifier {
    fn classify(&self, action: &ActionName) -> ActionClass {
        if action.as_str().contains("/write") {
            ActionClass::Protected
        } else {
            ActionClass::Unprotected
        }
    }
}

/// Grant resolver that never grants system-index access.
struct NoGrants;

impl GrantResolver for NoGrants {
    fn has_system_index_grant(&self, _ctx: &EvaluationContext, _indices: &[&IndexName]) -> bool {
        false
    }
}

/// Plain request without shaping hooks.
struct PlainRequest;

impl AccessRequest for PlainRequest {
    fn kind(&self) -> RequestKind {
        RequestKind::Other
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EvaluatorConfig::new(true, true, [".internal-*"]);
    let evaluator = AccessTierEvaluator::with_registry_resolver(
        config,
        Arc::new(StderrAuditSink),
        Arc::new(WriteClassifier),
    )?;

    let ctx = EvaluationContext::new(
        Caller::new("demo_user", ["demo_role"]),
        IndexCatalog::new([".internal-state", "orders"]),
    );

    let verdict = evaluator.evaluate(
        &mut PlainRequest,
        None,
        &ActionName::from("indices:data/read"),
        &ResolvedIndices::named([".internal-state"]),
        &ctx,
        &NoGrants,
    );

    let _ = verdict.denial();
    Ok(())
}
