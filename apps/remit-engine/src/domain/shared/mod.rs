//! Shared kernel: value objects and errors used by all contexts.

mod errors;
pub mod value_objects;

pub use errors::{DomainError, ValidationError};
pub use value_objects::{ClientId, Currency, Money, OrderNumber, Timestamp};
