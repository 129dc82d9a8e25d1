// market-gate-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON Schema builders for snapshot and config documents.
// Purpose: Provide the canonical declarative validation schema.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for persisted configuration snapshots.
//! The schema is the single declarative source of validation rules: every
//! nesting level is closed (`additionalProperties: false`), so adding a field
//! to the model without declaring it here keeps it rejected. Defaults recorded
//! in the schema match the substitution performed during typed decoding.

use serde_json::Value;
use serde_json::json;

use crate::config::DEFAULT_AUTO_CLOSE_GRACE_MINUTES;
use crate::config::MAX_AUTO_CLOSE_GRACE_MINUTES;
use crate::config::MIN_BET_FLOOR;
use crate::config::MIN_CAP_VALUE;

/// Returns the JSON schema for a persisted configuration snapshot.
#[must_use]
pub fn snapshot_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "market-gate://schemas/snapshot.schema.json",
        "title": "Market Gate Configuration Snapshot",
        "description": "Timestamped configuration snapshot for one subreddit install.",
        "type": "object",
        "properties": {
            "subredditId": {
                "type": "string",
                "minLength": 1,
                "description": "Owning subreddit install."
            },
            "fetchedAt": {
                "type": "string",
                "minLength": 1,
                "description": "RFC 3339 instant at which the snapshot was fetched."
            },
            "config": app_config_schema()
        },
        "required": ["subredditId", "fetchedAt", "config"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Application Configuration
// ============================================================================

/// Returns the JSON schema for the application configuration section.
#[must_use]
pub fn app_config_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "startingBalance": {
                "type": "integer",
                "minimum": 0,
                "description": "Balance granted to each new participant."
            },
            "minBet": {
                "type": "integer",
                "minimum": MIN_BET_FLOOR,
                "description": "Smallest accepted bet."
            },
            "maxBet": {
                "oneOf": [
                    { "type": "null" },
                    { "type": "integer", "minimum": MIN_CAP_VALUE }
                ],
                "default": null,
                "description": "Largest accepted bet; null means unbounded."
            },
            "maxOpenMarkets": {
                "oneOf": [
                    { "type": "null" },
                    { "type": "integer", "minimum": MIN_CAP_VALUE }
                ],
                "default": null,
                "description": "Cap on concurrently open markets; null means unbounded."
            },
            "leaderboardWindow": {
                "type": "string",
                "enum": ["weekly", "monthly", "alltime"],
                "default": "weekly",
                "description": "Leaderboard aggregation window."
            },
            "autoCloseGraceMinutes": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_AUTO_CLOSE_GRACE_MINUTES,
                "default": DEFAULT_AUTO_CLOSE_GRACE_MINUTES,
                "description": "Grace period before expired markets auto-close, in minutes."
            },
            "featureFlags": feature_flags_schema()
        },
        "required": ["startingBalance", "minBet"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Feature Flags
// ============================================================================

/// Returns the JSON schema for the feature flags section.
#[must_use]
pub fn feature_flags_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "maintenanceMode": {
                "type": "boolean",
                "default": false,
                "description": "Suspends betting while moderators intervene."
            },
            "enableRealtimeUpdates": {
                "type": "boolean",
                "default": false,
                "description": "Pushes live market updates over the realtime channel."
            },
            "enableLeaderboard": {
                "type": "boolean",
                "default": true,
                "description": "Shows the points leaderboard."
            }
        },
        "default": {},
        "additionalProperties": false
    })
}
