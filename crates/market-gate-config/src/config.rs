// market-gate-config/src/config.rs
// ============================================================================
// Module: Market Gate Configuration
// Description: Configuration model, snapshot loading, and error taxonomy.
// Purpose: Provide strict, fail-closed config types with hard limits.
// Dependencies: market-gate-core, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! Configuration is persisted as a JSON snapshot per subreddit install and
//! revalidated in full on every load. Missing or invalid configuration fails
//! closed; a snapshot is never constructed around a failed validation, and a
//! reload supersedes the previous snapshot rather than mutating it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use market_gate_core::SubredditId;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::validate::ValidationReport;
use crate::validate::validate_snapshot_value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default snapshot filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "market-gate.json";
/// Environment variable used to override the snapshot path.
pub(crate) const CONFIG_ENV_VAR: &str = "MARKET_GATE_CONFIG";
/// Maximum snapshot file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Minimum allowed bet amount floor.
pub(crate) const MIN_BET_FLOOR: u64 = 1;
/// Minimum bound for explicit bet and market caps.
pub(crate) const MIN_CAP_VALUE: u64 = 1;
/// Maximum auto-close grace period in minutes (one week).
pub(crate) const MAX_AUTO_CLOSE_GRACE_MINUTES: u32 = 10_080;
/// Default auto-close grace period in minutes.
pub(crate) const DEFAULT_AUTO_CLOSE_GRACE_MINUTES: u32 = 5;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Leaderboard aggregation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardWindow {
    /// Points aggregated over the current week.
    #[default]
    Weekly,
    /// Points aggregated over the current month.
    Monthly,
    /// Points aggregated over the install lifetime.
    Alltime,
}

/// Independent feature toggles for one install.
///
/// # Invariants
/// - Unknown keys are rejected; absent keys take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureFlags {
    /// Suspends betting while moderators intervene.
    #[serde(default)]
    pub maintenance_mode: bool,
    /// Pushes live market updates over the realtime channel.
    #[serde(default)]
    pub enable_realtime_updates: bool,
    /// Shows the points leaderboard.
    #[serde(default = "default_enable_leaderboard")]
    pub enable_leaderboard: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            enable_realtime_updates: false,
            enable_leaderboard: default_enable_leaderboard(),
        }
    }
}

/// Validated, defaulted configuration for one application install.
///
/// # Invariants
/// - Instances only exist after full schema validation; unknown keys and
///   out-of-range values never reach this type.
/// - `max_bet`/`max_open_markets` of `None` mean unbounded and serialize back
///   as explicit `null`, keeping validation idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    /// Balance granted to each new participant.
    pub starting_balance: u64,
    /// Smallest accepted bet.
    pub min_bet: u64,
    /// Largest accepted bet, or `None` for unbounded.
    #[serde(default)]
    pub max_bet: Option<u64>,
    /// Cap on concurrently open markets, or `None` for unbounded.
    #[serde(default)]
    pub max_open_markets: Option<u64>,
    /// Leaderboard aggregation window.
    #[serde(default)]
    pub leaderboard_window: LeaderboardWindow,
    /// Grace period before expired markets auto-close, in minutes.
    #[serde(default = "default_auto_close_grace_minutes")]
    pub auto_close_grace_minutes: u32,
    /// Feature toggles.
    #[serde(default)]
    pub feature_flags: FeatureFlags,
}

/// Immutable, timestamped configuration snapshot for one install.
///
/// # Invariants
/// - `config` is always a fully valid [`AppConfig`]; a snapshot is never
///   constructed around a failed validation.
/// - Reload replaces the snapshot; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigSnapshot {
    /// Owning subreddit install.
    pub subreddit_id: SubredditId,
    /// RFC 3339 instant at which the snapshot was fetched.
    pub fetched_at: String,
    /// Validated configuration.
    pub config: AppConfig,
}

impl ConfigSnapshot {
    /// Loads and validates a snapshot from disk.
    ///
    /// Resolution order: explicit path, then [`CONFIG_ENV_VAR`], then
    /// `market-gate.json` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("snapshot file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("snapshot file must be utf-8".to_string()))?;
        let raw: serde_json::Value =
            serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        validate_snapshot_value(&raw)
    }

    /// Returns the fetch instant parsed from the RFC 3339 field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the stored instant is malformed.
    pub fn fetched_at_instant(&self) -> Result<OffsetDateTime, ConfigError> {
        OffsetDateTime::parse(&self.fetched_at, &Rfc3339)
            .map_err(|_| ConfigError::Invalid("fetchedAt must be an RFC 3339 instant".to_string()))
    }

    /// Returns true when this snapshot was fetched strictly after `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when either instant is malformed.
    pub fn supersedes(&self, other: &Self) -> Result<bool, ConfigError> {
        Ok(self.fetched_at_instant()? > other.fetched_at_instant()?)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading a snapshot.
    #[error("config io error: {0}")]
    Io(String),
    /// JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Schema compilation failure.
    #[error("config schema error: {0}")]
    Schema(String),
    /// Snapshot violated the declarative schema.
    #[error("invalid config: {0}")]
    Violations(ValidationReport),
    /// Invalid snapshot data outside the schema surface.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default for [`FeatureFlags::enable_leaderboard`].
pub(crate) const fn default_enable_leaderboard() -> bool {
    true
}

/// Default for [`AppConfig::auto_close_grace_minutes`].
pub(crate) const fn default_auto_close_grace_minutes() -> u32 {
    DEFAULT_AUTO_CLOSE_GRACE_MINUTES
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the snapshot path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("snapshot path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("snapshot path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("snapshot path component too long".to_string()));
        }
    }
    Ok(())
}
