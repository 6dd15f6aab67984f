//! Unified error types for the domain layer
//!
//! Two families of errors live here:
//! - [`DomainError`] for lookups and string parsing (unknown die, skill or parameter)
//! - [`CalculationError`] for rule violations detected while pricing an upgrade
//!
//! A `CalculationError` is a normal outcome of a calculation: callers attach its
//! message to the result instead of treating it as a failure of the request.

use thiserror::Error;

/// Unified error type for domain lookups and parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Catalog entry not found
    #[error("Entry not found: {entry_type} with id {id}")]
    NotFound {
        entry_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entry_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entry_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for DieTier {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "d6" => Ok(Self::D6),
    ///             _ => Err(DomainError::parse(format!("Unknown die: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Rule violation detected while pricing an upgrade
///
/// These always suppress the cost result. Ranges where the target does not
/// exceed the start are not errors: they price to zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Specialized skills stop at level 0 unless a master trains the character
    #[error("cannot advance Specialized skill beyond level 0 without a master")]
    SpecializedRequiresMaster,

    /// Parameter base value was zero or negative
    #[error("base value must exceed 0")]
    NonPositiveBaseValue,

    /// Target bonus is larger than the parameter's base value
    #[error(
        "bonus cannot exceed base value ({base_value}); the maximum parameter value is twice its base value"
    )]
    BonusExceedsBase { base_value: i32 },

    /// Cost does not fit in a 64-bit counter
    #[error("cost of {what} exceeds the representable range")]
    Overflow { what: &'static str },
}

impl CalculationError {
    pub(crate) fn overflow(what: &'static str) -> Self {
        Self::Overflow { what }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Skill", "pittura");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Entry not found: Skill with id pittura");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown die: d7");
        assert_eq!(err.to_string(), "Parse error: Unknown die: d7");
    }

    #[test]
    fn test_bonus_exceeds_base_message_includes_base() {
        let err = CalculationError::BonusExceedsBase { base_value: 20 };
        assert_eq!(
            err.to_string(),
            "bonus cannot exceed base value (20); the maximum parameter value is twice its base value"
        );
    }
}
