// market-gate-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example snapshot document.
// Purpose: Provide a known-valid document for docs, tooling, and tests.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The example snapshot is the canonical fully-populated document. Tests
//! assert it validates against the schema so the example can never drift from
//! the model.

use serde_json::Value;
use serde_json::json;

/// Returns the canonical example snapshot document.
#[must_use]
pub fn snapshot_json_example() -> Value {
    json!({
        "subredditId": "t5_2qh1i",
        "fetchedAt": "2026-01-15T08:30:00Z",
        "config": {
            "startingBalance": 1000,
            "minBet": 1,
            "maxBet": 500,
            "maxOpenMarkets": null,
            "leaderboardWindow": "weekly",
            "autoCloseGraceMinutes": 5,
            "featureFlags": {
                "maintenanceMode": false,
                "enableRealtimeUpdates": true,
                "enableLeaderboard": true
            }
        }
    })
}
