// index-sentry-core/tests/evaluator_matrix.rs
// ============================================================================
// Module: Evaluator Matrix Tests
// Description: Decision-table coverage for the access-tier evaluator.
// Purpose: Pin the tier x flag x grant x action-class outcomes.
// Dependencies: index-sentry-core
// ============================================================================

//! ## Overview
//! Walks the full decision table: feature flags, wildcard-all targeting,
//! ordinary / system / protected-system tiers, and grant presence, asserting
//! verdicts, audit counts, and exact denial messages.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap on deterministic fixtures.")]

mod common;

use common::FixedGrants;
use common::PROTECTED_ACTION;
use common::PlainRequest;
use common::TEST_INDEX;
use common::TEST_SYSTEM_INDEX;
use common::UNPROTECTED_ACTION;
use common::ctx;
use common::evaluator;
use index_sentry_core::ActionName;
use index_sentry_core::DenialReason;
use index_sentry_core::PROTECTED_SYSTEM_INDEX;
use index_sentry_core::ResolvedIndices;
use index_sentry_core::TaskId;
use index_sentry_core::Verdict;

// ============================================================================
// SECTION: Feature Disabled
// ============================================================================

#[test]
fn feature_disabled_is_a_no_op_for_every_target() {
    let (evaluator, audit) = evaluator(false, false).unwrap();
    let ctx = ctx();
    let grants = FixedGrants(false);
    let targets = [
        ResolvedIndices::named([TEST_INDEX]),
        ResolvedIndices::named([TEST_SYSTEM_INDEX]),
        ResolvedIndices::named([PROTECTED_SYSTEM_INDEX]),
        ResolvedIndices::All,
    ];

    for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
        for resolved in &targets {
            let verdict = evaluator.evaluate(
                &mut PlainRequest,
                None,
                &ActionName::from(action),
                resolved,
                &ctx,
                &grants,
            );
            assert_eq!(verdict, Verdict::PassThrough);
        }
    }
    assert_eq!(audit.count(), 0);
}

// ============================================================================
// SECTION: Wildcard All
// ============================================================================

#[test]
fn protected_action_on_wildcard_all_is_denied() {
    for permissions_enabled in [false, true] {
        let (evaluator, audit) = evaluator(true, permissions_enabled).unwrap();
        let task = TaskId::from("task-1");
        let verdict = evaluator.evaluate(
            &mut PlainRequest,
            Some(&task),
            &ActionName::from(PROTECTED_ACTION),
            &ResolvedIndices::All,
            &ctx(),
            &FixedGrants(true),
        );

        let denial = verdict.denial().unwrap();
        assert_eq!(denial.reason, DenialReason::WildcardAllProtectedAction);
        assert_eq!(
            denial.message,
            "indices:data/write for '_all' indices is not allowed for a regular user"
        );
        assert_eq!(audit.count(), 1);
        assert_eq!(audit.attempts()[0].task, Some(task.clone()));
    }
}

#[test]
fn unprotected_action_on_wildcard_all_passes_through() {
    let (evaluator, audit) = evaluator(true, true).unwrap();
    let verdict = evaluator.evaluate(
        &mut PlainRequest,
        None,
        &ActionName::from(UNPROTECTED_ACTION),
        &ResolvedIndices::All,
        &ctx(),
        &FixedGrants(false),
    );

    assert_eq!(verdict, Verdict::PassThrough);
    assert_eq!(audit.count(), 0);
}

// ============================================================================
// SECTION: Ordinary Indices
// ============================================================================

#[test]
fn ordinary_index_targets_always_pass_through() {
    for (enabled, permissions) in [(true, false), (true, true)] {
        let (evaluator, audit) = evaluator(enabled, permissions).unwrap();
        for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
            let verdict = evaluator.evaluate(
                &mut PlainRequest,
                None,
                &ActionName::from(action),
                &ResolvedIndices::named([TEST_INDEX]),
                &ctx(),
                &FixedGrants(false),
            );
            assert_eq!(verdict, Verdict::PassThrough);
        }
        assert_eq!(audit.count(), 0);
    }
}

// ============================================================================
// SECTION: System Tier
// ============================================================================

#[test]
fn system_index_with_permissions_disabled_is_denied_for_both_action_classes() {
    for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
        let (evaluator, audit) = evaluator(true, false).unwrap();
        let verdict = evaluator.evaluate(
            &mut PlainRequest,
            None,
            &ActionName::from(action),
            &ResolvedIndices::named([TEST_SYSTEM_INDEX]),
            &ctx(),
            &FixedGrants(true),
        );

        let denial = verdict.denial().unwrap();
        assert_eq!(denial.reason, DenialReason::SystemIndexFeature);
        assert_eq!(
            denial.message,
            format!("{action} for '{TEST_SYSTEM_INDEX}' index is not allowed for a regular user")
        );
        assert_eq!(audit.count(), 1);
    }
}

#[test]
fn system_index_without_grant_is_denied_with_no_permission_message() {
    for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
        let (evaluator, audit) = evaluator(true, true).unwrap();
        let verdict = evaluator.evaluate(
            &mut PlainRequest,
            None,
            &ActionName::from(action),
            &ResolvedIndices::named([TEST_SYSTEM_INDEX]),
            &ctx(),
            &FixedGrants(false),
        );

        let denial = verdict.denial().unwrap();
        assert_eq!(denial.reason, DenialReason::MissingSystemIndexGrant);
        assert_eq!(
            denial.message,
            format!(
                "No {action} permission for user roles [role_a] to System Indices {TEST_SYSTEM_INDEX}"
            )
        );
        assert_eq!(audit.count(), 1);
        assert_eq!(audit.attempts()[0].task, None);
    }
}

#[test]
fn system_index_with_grant_passes_through_for_both_action_classes() {
    for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
        let (evaluator, audit) = evaluator(true, true).unwrap();
        let verdict = evaluator.evaluate(
            &mut PlainRequest,
            None,
            &ActionName::from(action),
            &ResolvedIndices::named([TEST_SYSTEM_INDEX]),
            &ctx(),
            &FixedGrants(true),
        );

        assert_eq!(verdict, Verdict::PassThrough);
        assert_eq!(audit.count(), 0);
    }
}

// ============================================================================
// SECTION: Protected System Tier
// ============================================================================

#[test]
fn protected_system_index_is_denied_regardless_of_flags_and_grant() {
    for permissions_enabled in [false, true] {
        for grant in [false, true] {
            for action in [UNPROTECTED_ACTION, PROTECTED_ACTION] {
                let (evaluator, audit) = evaluator(true, permissions_enabled).unwrap();
                let task = TaskId::from("task-9");
                let verdict = evaluator.evaluate(
                    &mut PlainRequest,
                    Some(&task),
                    &ActionName::from(action),
                    &ResolvedIndices::named([PROTECTED_SYSTEM_INDEX]),
                    &ctx(),
                    &FixedGrants(grant),
                );

                let denial = verdict.denial().unwrap();
                assert_eq!(denial.reason, DenialReason::ProtectedSystemIndex);
                assert_eq!(
                    denial.message,
                    format!(
                        "{action} not permitted for a regular user [role_a] on protected system indices {PROTECTED_SYSTEM_INDEX}"
                    )
                );
                assert_eq!(audit.count(), 1);
                assert_eq!(audit.attempts()[0].task, Some(task.clone()));
            }
        }
    }
}

#[test]
fn protected_system_denial_takes_priority_over_system_tier_rules() {
    let (evaluator, audit) = evaluator(true, true).unwrap();
    let verdict = evaluator.evaluate(
        &mut PlainRequest,
        None,
        &ActionName::from(PROTECTED_ACTION),
        &ResolvedIndices::named([TEST_SYSTEM_INDEX, PROTECTED_SYSTEM_INDEX]),
        &ctx(),
        &FixedGrants(true),
    );

    let denial = verdict.denial().unwrap();
    assert_eq!(denial.reason, DenialReason::ProtectedSystemIndex);
    assert_eq!(audit.count(), 1);
}

// ============================================================================
// SECTION: Audit Payload
// ============================================================================

#[test]
fn audit_record_carries_action_indices_and_caller() {
    let (evaluator, audit) = evaluator(true, true).unwrap();
    let resolved = ResolvedIndices::named([TEST_SYSTEM_INDEX]);
    let verdict = evaluator.evaluate(
        &mut PlainRequest,
        None,
        &ActionName::from(UNPROTECTED_ACTION),
        &resolved,
        &ctx(),
        &FixedGrants(false),
    );

    assert!(verdict.is_denied());
    let attempts = audit.attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].action, ActionName::from(UNPROTECTED_ACTION));
    assert_eq!(attempts[0].indices, resolved);
    assert_eq!(attempts[0].caller, "user_a");
}
