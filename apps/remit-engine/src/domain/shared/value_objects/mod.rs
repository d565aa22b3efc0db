//! Shared value objects used across bounded contexts.

mod currency;
mod identifiers;
mod money;
mod timestamp;

pub use currency::Currency;
pub use identifiers::{ClientId, OrderNumber};
pub use money::Money;
pub use timestamp::Timestamp;
