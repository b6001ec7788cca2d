// index-sentry-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Index Sentry Access-Tier Evaluator
// Description: Layered allow/deny decisions over index tiers.
// Purpose: Decide whether an operation proceeds, is denied, or is reshaped.
// Dependencies: crate::core, crate::interfaces, tracing
// ============================================================================

//! ## Overview
//! The access-tier evaluator is invoked once per request after upstream
//! resolution. It walks a guarded rule sequence with a fixed priority:
//! feature-disabled short circuit, wildcard-all handling, protected-tier
//! absolute denial, then the system-tier flag/grant rules. Read shaping on
//! system-tier targets is orthogonal to the verdict and may fire on a call
//! that is about to be denied.
//!
//! Per-call state is none; the evaluator reads only its immutable
//! configuration and the inputs of the current call, so it is safe for
//! concurrent invocation without locking.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use tracing::Level;

use crate::core::ActionClass;
use crate::core::ConfigError;
use crate::core::EvaluationContext;
use crate::core::EvaluatorConfig;
use crate::core::IndexTier;
use crate::core::SystemIndexRegistry;
use crate::core::identifiers::ActionName;
use crate::core::identifiers::IndexName;
use crate::core::identifiers::TaskId;
use crate::core::resolved::ResolvedIndices;
use crate::interfaces::AccessRequest;
use crate::interfaces::ActionClassifier;
use crate::interfaces::AuditSink;
use crate::interfaces::GrantResolver;
use crate::interfaces::IndexResolver;
use crate::interfaces::RegistryIndexResolver;
use crate::interfaces::RequestKind;
use crate::interfaces::SecurityIndexAttempt;
use crate::runtime::verdict::Denial;
use crate::runtime::verdict::DenialReason;
use crate::runtime::verdict::Verdict;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Tracing target for evaluator log lines.
const LOG_TARGET: &str = "index_sentry::evaluator";

/// Audit event identifier for security-index attempts.
const ATTEMPT_EVENT: &str = "security_index_attempt";

// ============================================================================
// SECTION: Evaluator
// ============================================================================

/// Stateless per-call access-tier decision engine.
///
/// # Invariants
/// - Configuration and registry are immutable after construction.
/// - At most one audit record is emitted per call.
pub struct AccessTierEvaluator {
    /// Feature flags captured at construction.
    config: EvaluatorConfig,
    /// Validated classification registry.
    registry: SystemIndexRegistry,
    /// Audit sink for denial paths.
    audit: Arc<dyn AuditSink>,
    /// External protected/unprotected action predicate.
    classifier: Arc<dyn ActionClassifier>,
    /// Index-resolution helper for the read-shaping path.
    resolver: Arc<dyn IndexResolver>,
}

impl AccessTierEvaluator {
    /// Builds an evaluator, validating the configured pattern set eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a system-index pattern is malformed.
    pub fn new(
        config: EvaluatorConfig,
        audit: Arc<dyn AuditSink>,
        classifier: Arc<dyn ActionClassifier>,
        resolver: Arc<dyn IndexResolver>,
    ) -> Result<Self, ConfigError> {
        let registry = config.build_registry()?;
        Ok(Self {
            config,
            registry,
            audit,
            classifier,
            resolver,
        })
    }

    /// Builds an evaluator whose read-shaping helper is backed by the
    /// configured registry itself.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a system-index pattern is malformed.
    pub fn with_registry_resolver(
        config: EvaluatorConfig,
        audit: Arc<dyn AuditSink>,
        classifier: Arc<dyn ActionClassifier>,
    ) -> Result<Self, ConfigError> {
        let registry = config.build_registry()?;
        let resolver = Arc::new(RegistryIndexResolver::new(registry.clone()));
        Ok(Self {
            config,
            registry,
            audit,
            classifier,
            resolver,
        })
    }

    /// Returns the validated classification registry.
    #[must_use]
    pub const fn registry(&self) -> &SystemIndexRegistry {
        &self.registry
    }

    /// Evaluates one request against the tiered access rules.
    ///
    /// Returns [`Verdict::PassThrough`] when later pipeline stages must
    /// continue evaluation, or a denial the caller applies exactly once.
    /// The read-shaping side effect on `request` is orthogonal to the
    /// returned verdict.
    pub fn evaluate<R: AccessRequest>(
        &self,
        request: &mut R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
        grants: &dyn GrantResolver,
    ) -> Verdict {
        if !self.config.system_indices_enabled {
            return Verdict::PassThrough;
        }

        let class = self.classifier.classify(action);

        if resolved.is_all() {
            return self.evaluate_wildcard_all(request, task, action, resolved, ctx, class);
        }

        let system_indices: Vec<&IndexName> = resolved
            .names()
            .into_iter()
            .filter(|name| self.registry.classify(name) != IndexTier::Ordinary)
            .collect();

        self.shape_system_read(request, resolved, ctx);

        let protected: Vec<&IndexName> = system_indices
            .iter()
            .copied()
            .filter(|name| self.registry.classify(name) == IndexTier::ProtectedSystem)
            .collect();
        if !protected.is_empty() {
            return self.deny_protected_system(request, task, action, resolved, ctx, &protected);
        }

        if system_indices.is_empty() {
            return Verdict::PassThrough;
        }

        if !self.config.system_index_permissions_enabled {
            return self.deny_system_feature(request, task, action, resolved, ctx, &system_indices);
        }

        if grants.has_system_index_grant(ctx, &system_indices) {
            // Later stages allow or deny on their own merits.
            return Verdict::PassThrough;
        }

        self.deny_missing_grant(request, task, action, resolved, ctx, &system_indices)
    }

    /// Handles the wildcard `_all` marker: protected actions are denied,
    /// read-like actions receive no special handling in this layer.
    fn evaluate_wildcard_all<R: AccessRequest>(
        &self,
        request: &R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
        class: ActionClass,
    ) -> Verdict {
        if !class.is_protected() {
            return Verdict::PassThrough;
        }
        self.record_attempt(request, task, action, resolved, ctx);
        let message = format!("{action} for '_all' indices is not allowed for a regular user");
        if tracing::enabled!(target: LOG_TARGET, Level::WARN) {
            tracing::warn!(target: LOG_TARGET, "{message}");
        }
        Verdict::Deny(Denial {
            reason: DenialReason::WildcardAllProtectedAction,
            message,
        })
    }

    /// Applies the read-shaping side effect when the target touches a
    /// system-tier index: search caches and real-time reads must not serve
    /// stale system-index content.
    fn shape_system_read<R: AccessRequest>(
        &self,
        request: &mut R,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
    ) {
        if matches!(request.kind(), RequestKind::Other) {
            return;
        }
        if self.resolver.system_indices_in(resolved, ctx).is_empty() {
            return;
        }
        match request.kind() {
            RequestKind::Search => {
                request.disable_request_cache();
                if tracing::enabled!(target: LOG_TARGET, Level::DEBUG) {
                    tracing::debug!(
                        target: LOG_TARGET,
                        "Disable search request cache for this request"
                    );
                }
            }
            RequestKind::MultiGet => {
                request.disable_realtime();
                if tracing::enabled!(target: LOG_TARGET, Level::DEBUG) {
                    tracing::debug!(target: LOG_TARGET, "Disable realtime for this request");
                }
            }
            RequestKind::Other => {}
        }
    }

    /// Denies access to the protected-system index. Absolute: independent of
    /// the permissions flag and of any caller grant.
    fn deny_protected_system<R: AccessRequest>(
        &self,
        request: &R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
        protected: &[&IndexName],
    ) -> Verdict {
        self.record_attempt(request, task, action, resolved, ctx);
        let message = format!(
            "{action} not permitted for a regular user {roles} on protected system indices {indices}",
            roles = ctx.caller.roles_label(),
            indices = join_names(protected),
        );
        if tracing::enabled!(target: LOG_TARGET, Level::INFO) {
            tracing::info!(target: LOG_TARGET, "{message}");
        }
        Verdict::Deny(Denial {
            reason: DenialReason::ProtectedSystemIndex,
            message,
        })
    }

    /// Denies system-tier access while the permissions override is disabled.
    fn deny_system_feature<R: AccessRequest>(
        &self,
        request: &R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
        system_indices: &[&IndexName],
    ) -> Verdict {
        self.record_attempt(request, task, action, resolved, ctx);
        let message = format!(
            "{action} for '{indices}' index is not allowed for a regular user",
            indices = join_names(system_indices),
        );
        if tracing::enabled!(target: LOG_TARGET, Level::WARN) {
            tracing::warn!(target: LOG_TARGET, "{message}");
        }
        Verdict::Deny(Denial {
            reason: DenialReason::SystemIndexFeature,
            message,
        })
    }

    /// Denies system-tier access for a caller without the distinguished
    /// system-index-access grant.
    fn deny_missing_grant<R: AccessRequest>(
        &self,
        request: &R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
        system_indices: &[&IndexName],
    ) -> Verdict {
        self.record_attempt(request, task, action, resolved, ctx);
        let message = format!(
            "No {action} permission for user roles {roles} to System Indices {indices}",
            roles = ctx.caller.roles_label(),
            indices = join_names(system_indices),
        );
        if tracing::enabled!(target: LOG_TARGET, Level::INFO) {
            tracing::info!(target: LOG_TARGET, "{message}");
        }
        Verdict::Deny(Denial {
            reason: DenialReason::MissingSystemIndexGrant,
            message,
        })
    }

    /// Emits the single audit record for a denial path.
    fn record_attempt<R: AccessRequest>(
        &self,
        request: &R,
        task: Option<&TaskId>,
        action: &ActionName,
        resolved: &ResolvedIndices,
        ctx: &EvaluationContext,
    ) {
        let attempt = SecurityIndexAttempt {
            event: ATTEMPT_EVENT,
            action: action.clone(),
            request_kind: request.kind(),
            indices: resolved.clone(),
            caller: ctx.caller.name.clone(),
            task: task.cloned(),
        };
        self.audit.log_security_index_attempt(&attempt);
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Joins index names for log messages, preserving sorted input order.
fn join_names(names: &[&IndexName]) -> String {
    let parts: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
    parts.join(", ")
}
