//! Domain errors for the remit engine.

use std::fmt;

/// A structured, non-fatal validation error.
///
/// Returned to callers as data (often in a `Vec`) so the surrounding
/// form or action can decide whether to block submission. Never used
/// to abort the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field the error applies to (e.g., `transaction_remark`).
    pub field: String,
    /// Human-readable message describing the first violation found.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Business rule violation.
    BusinessRuleViolation {
        /// Rule name or code.
        rule: String,
        /// Description of the violation.
        message: String,
    },

    /// Entity not found.
    NotFound {
        /// Entity type.
        entity_type: String,
        /// Entity identifier.
        id: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::BusinessRuleViolation { rule, message } => {
                write!(f, "Business rule '{rule}' violated: {message}")
            }
            Self::NotFound { entity_type, id } => {
                write!(f, "{entity_type} not found: {id}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("transaction_remark", "exceeds 500 characters");
        let msg = format!("{err}");
        assert!(msg.contains("transaction_remark"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "amount".to_string(),
            message: "must be non-negative".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("amount"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn domain_error_business_rule_display() {
        let err = DomainError::BusinessRuleViolation {
            rule: "DEFAULT_DOC_TYPE".to_string(),
            message: "default document types cannot be removed".to_string(),
        };
        assert!(format!("{err}").contains("DEFAULT_DOC_TYPE"));
    }

    #[test]
    fn domain_error_not_found_display() {
        let err = DomainError::NotFound {
            entity_type: "Order".to_string(),
            id: "ORD-123".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Order"));
        assert!(msg.contains("ORD-123"));
    }

    #[test]
    fn errors_are_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ValidationError::new("field", "message"));
        assert!(!err.to_string().is_empty());
    }
}
