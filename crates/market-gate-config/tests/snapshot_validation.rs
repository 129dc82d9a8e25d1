//! Snapshot wrapper validation and succession tests.
// market-gate-config/tests/snapshot_validation.rs
// =============================================================================
// Module: Snapshot Validation Tests
// Description: Validate snapshot identity, timestamps, and succession.
// Purpose: Ensure snapshots only exist around fully valid configuration.
// =============================================================================

use market_gate_config::ConfigError;
use market_gate_config::validate_snapshot_value;
use serde_json::json;

mod common;

type TestResult = Result<(), String>;

#[test]
fn minimal_snapshot_validates() -> TestResult {
    let snapshot =
        validate_snapshot_value(&common::minimal_snapshot_value()).map_err(|err| err.to_string())?;
    if snapshot.subreddit_id.as_str() != "t5_abc123" {
        return Err(format!("unexpected subreddit {}", snapshot.subreddit_id));
    }
    if snapshot.config.starting_balance != 100 {
        return Err("nested config was not preserved".to_string());
    }
    Ok(())
}

#[test]
fn empty_subreddit_id_is_rejected() -> TestResult {
    let mut raw = common::minimal_snapshot_value();
    raw["subredditId"] = json!("");
    match validate_snapshot_value(&raw) {
        Err(ConfigError::Violations(report)) => {
            if report.violations().iter().any(|violation| violation.path == "/subredditId") {
                Ok(())
            } else {
                Err(format!("report {report} did not mention subredditId"))
            }
        }
        Err(error) => Err(format!("expected violation report, got {error}")),
        Ok(snapshot) => Err(format!("expected violations, got {snapshot:?}")),
    }
}

#[test]
fn malformed_fetched_at_is_rejected() -> TestResult {
    let mut raw = common::minimal_snapshot_value();
    raw["fetchedAt"] = json!("yesterday");
    match validate_snapshot_value(&raw) {
        Err(ConfigError::Violations(report)) => {
            if report.violations().iter().any(|violation| violation.path == "/fetchedAt") {
                Ok(())
            } else {
                Err(format!("report {report} did not mention fetchedAt"))
            }
        }
        Err(error) => Err(format!("expected violation report, got {error}")),
        Ok(snapshot) => Err(format!("expected violations, got {snapshot:?}")),
    }
}

#[test]
fn nested_config_violation_fails_the_snapshot() -> TestResult {
    let mut raw = common::minimal_snapshot_value();
    raw["config"]["minBet"] = json!(0);
    match validate_snapshot_value(&raw) {
        Err(ConfigError::Violations(report)) => {
            if report.violations().iter().any(|violation| violation.path == "/config/minBet") {
                Ok(())
            } else {
                Err(format!("report {report} did not mention /config/minBet"))
            }
        }
        Err(error) => Err(format!("expected violation report, got {error}")),
        Ok(snapshot) => Err(format!("expected violations, got {snapshot:?}")),
    }
}

#[test]
fn snapshot_validation_is_idempotent() -> TestResult {
    let first =
        validate_snapshot_value(&common::minimal_snapshot_value()).map_err(|err| err.to_string())?;
    let reserialized = serde_json::to_value(&first).map_err(|err| err.to_string())?;
    let second = validate_snapshot_value(&reserialized).map_err(|err| err.to_string())?;
    if first != second {
        return Err(format!("idempotence broken: {first:?} vs {second:?}"));
    }
    Ok(())
}

#[test]
fn later_snapshot_supersedes_earlier() -> TestResult {
    let earlier =
        validate_snapshot_value(&common::minimal_snapshot_value()).map_err(|err| err.to_string())?;
    let mut raw = common::minimal_snapshot_value();
    raw["fetchedAt"] = json!("2026-02-02T00:00:00Z");
    let later = validate_snapshot_value(&raw).map_err(|err| err.to_string())?;
    if !later.supersedes(&earlier).map_err(|err| err.to_string())? {
        return Err("later snapshot must supersede earlier".to_string());
    }
    if earlier.supersedes(&later).map_err(|err| err.to_string())? {
        return Err("earlier snapshot must not supersede later".to_string());
    }
    if earlier.supersedes(&earlier).map_err(|err| err.to_string())? {
        return Err("succession must be strict".to_string());
    }
    Ok(())
}
