// market-gate-core/src/core/outcome.rs
// ============================================================================
// Module: Outcome Envelope
// Description: Success/failure envelope for fallible boundary operations.
// Purpose: Propagate expected failures as data with a stable wire shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! `Outcome` is the envelope every fallible boundary operation returns instead
//! of raising. On the wire it is exactly `{"success": true, "value": …}` or
//! `{"success": false, "error": …}`; deserialization rejects any payload that
//! mixes the two shapes or omits the tagged field. Internal code converts to
//! `std::result::Result` and branches with `?` as usual.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as DeError;
use serde::ser::SerializeStruct;

// ============================================================================
// SECTION: Outcome Type
// ============================================================================

/// Success/failure envelope with exactly two shapes.
///
/// # Invariants
/// - Exactly one payload is ever present; the sum type makes wrong-payload
///   access unrepresentable.
/// - Values are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// Operation completed and produced a value.
    Success(T),
    /// Operation failed in an expected way and produced an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Constructs a success outcome.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Constructs a failure outcome.
    #[must_use]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns true when the outcome carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true when the outcome carries an error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value when present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error when present.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts the outcome into a standard result.
    ///
    /// # Errors
    ///
    /// Returns the carried error when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// ============================================================================
// SECTION: Wire Representation
// ============================================================================

/// Raw wire shape accepted during deserialization.
///
/// The tag and both payload slots are decoded first so that mixed or missing
/// payloads can be rejected with a precise error instead of a silent guess.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"))]
struct OutcomeRepr<T, E> {
    /// Discriminant tag.
    success: bool,
    /// Success payload slot.
    #[serde(default)]
    value: Option<T>,
    /// Failure payload slot.
    #[serde(default)]
    error: Option<E>,
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(value) => {
                record.serialize_field("success", &true)?;
                record.serialize_field("value", value)?;
            }
            Self::Failure(error) => {
                record.serialize_field("success", &false)?;
                record.serialize_field("error", error)?;
            }
        }
        record.end()
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = OutcomeRepr::<T, E>::deserialize(deserializer)?;
        match (repr.success, repr.value, repr.error) {
            (true, Some(value), None) => Ok(Self::Success(value)),
            (false, None, Some(error)) => Ok(Self::Failure(error)),
            (true, _, _) => {
                Err(DeError::custom("success outcome requires value and forbids error"))
            }
            (false, _, _) => {
                Err(DeError::custom("failure outcome requires error and forbids value"))
            }
        }
    }
}
