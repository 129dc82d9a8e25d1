// market-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared raw documents for config validation tests.
// Purpose: Reduce duplication across integration tests for market-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use serde_json::Value;
use serde_json::json;

/// Returns a minimal raw config document exercising default substitution.
pub fn minimal_config_value() -> Value {
    json!({
        "startingBalance": 100,
        "minBet": 1,
        "maxBet": null,
        "maxOpenMarkets": 5,
        "featureFlags": {}
    })
}

/// Returns a minimal raw snapshot document wrapping the minimal config.
pub fn minimal_snapshot_value() -> Value {
    json!({
        "subredditId": "t5_abc123",
        "fetchedAt": "2026-02-01T00:00:00Z",
        "config": minimal_config_value()
    })
}
