//! Remittance order aggregate.

mod order;

pub use order::{CreateOrderCommand, RemittanceOrder};
