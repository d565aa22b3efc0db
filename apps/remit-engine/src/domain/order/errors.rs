//! Order context errors.

use std::fmt;

/// Errors that can occur when working with remittance orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Order not found in the repository.
    NotFound {
        /// Order number.
        order_number: String,
    },

    /// Attempt to create an order that already exists.
    DuplicateOrderNumber {
        /// Order number.
        order_number: String,
    },

    /// Invalid order parameters.
    InvalidValue {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Persistence failure from the storage collaborator.
    Persistence {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { order_number } => {
                write!(f, "Order not found: {order_number}")
            }
            Self::DuplicateOrderNumber { order_number } => {
                write!(f, "Duplicate order number: {order_number}")
            }
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid order value '{field}': {message}")
            }
            Self::Persistence { message } => {
                write!(f, "Order persistence failed: {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = OrderError::NotFound {
            order_number: "ORD-123".to_string(),
        };
        assert!(format!("{err}").contains("ORD-123"));
    }

    #[test]
    fn invalid_value_display() {
        let err = OrderError::InvalidValue {
            field: "transfer_amount".to_string(),
            message: "cannot be negative".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("transfer_amount"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn order_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(OrderError::Persistence {
            message: "disk full".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
