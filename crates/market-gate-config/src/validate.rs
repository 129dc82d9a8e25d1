// market-gate-config/src/validate.rs
// ============================================================================
// Module: Config Validation Pipeline
// Description: Declarative schema validation with full violation reporting.
// Purpose: Turn untrusted raw documents into validated config types.
// Dependencies: jsonschema, serde_json, time
// ============================================================================

//! ## Overview
//! Validation is declarative: raw documents are checked against the canonical
//! JSON Schema and every violation is collected as a (field path, reason)
//! pair before anything is decoded. A failing document yields zero usable
//! configuration, never a partial object, and validation itself never panics.
//! Typed decoding then substitutes documented defaults for absent optional
//! fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use jsonschema::Draft;
use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::AppConfig;
use crate::config::ConfigError;
use crate::config::ConfigSnapshot;
use crate::schema::app_config_schema;
use crate::schema::snapshot_schema;

// ============================================================================
// SECTION: Violation Reports
// ============================================================================

/// Single field violation reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViolation {
    /// JSON pointer to the violating field ("/" for the document root).
    pub path: String,
    /// Human-readable reason for the violation.
    pub reason: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Complete list of violations for one document.
///
/// # Invariants
/// - Reports are only constructed non-empty; a valid document produces a
///   typed config, not an empty report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Violations in schema-traversal order.
    violations: Vec<ConfigViolation>,
}

impl ValidationReport {
    /// Builds a report from collected violations.
    #[must_use]
    pub const fn new(violations: Vec<ConfigViolation>) -> Self {
        Self {
            violations,
        }
    }

    /// Returns the violations in schema-traversal order.
    #[must_use]
    pub fn violations(&self) -> &[ConfigViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Validation Operations
// ============================================================================

/// Validates a raw configuration document into an [`AppConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::Violations`] listing every violated field, or
/// [`ConfigError::Schema`]/[`ConfigError::Parse`] for pipeline failures.
pub fn validate_config_value(raw: &Value) -> Result<AppConfig, ConfigError> {
    let schema = app_config_schema();
    let validator = build_validator(&schema)?;
    let violations = schema_violations(&validator, raw);
    if !violations.is_empty() {
        return Err(ConfigError::Violations(ValidationReport::new(violations)));
    }
    serde_json::from_value(raw.clone()).map_err(|err| ConfigError::Parse(err.to_string()))
}

/// Validates a raw snapshot document into a [`ConfigSnapshot`].
///
/// # Errors
///
/// Returns [`ConfigError::Violations`] listing every violated field, or
/// [`ConfigError::Schema`]/[`ConfigError::Parse`] for pipeline failures.
pub fn validate_snapshot_value(raw: &Value) -> Result<ConfigSnapshot, ConfigError> {
    let schema = snapshot_schema();
    let validator = build_validator(&schema)?;
    let mut violations = schema_violations(&validator, raw);
    violations.extend(fetched_at_violation(raw));
    if !violations.is_empty() {
        return Err(ConfigError::Violations(ValidationReport::new(violations)));
    }
    serde_json::from_value(raw.clone()).map_err(|err| ConfigError::Parse(err.to_string()))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compiles a schema for validation.
fn build_validator(schema: &Value) -> Result<Validator, ConfigError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| ConfigError::Schema(err.to_string()))
}

/// Collects every schema violation for a raw document.
fn schema_violations(validator: &Validator, raw: &Value) -> Vec<ConfigViolation> {
    validator
        .iter_errors(raw)
        .map(|error| ConfigViolation {
            path: pointer_label(&error.instance_path().to_string()),
            reason: error.to_string(),
        })
        .collect()
}

/// Checks the `fetchedAt` field as an RFC 3339 instant.
///
/// The schema asserts only the string shape; the instant itself is a semantic
/// rule checked here so the violation reports the precise field.
fn fetched_at_violation(raw: &Value) -> Option<ConfigViolation> {
    let fetched_at = raw.get("fetchedAt")?.as_str()?;
    if OffsetDateTime::parse(fetched_at, &Rfc3339).is_ok() {
        return None;
    }
    Some(ConfigViolation {
        path: "/fetchedAt".to_string(),
        reason: "must be an RFC 3339 instant".to_string(),
    })
}

/// Normalizes an instance path for reporting.
fn pointer_label(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
