//! Order bounded context.
//!
//! The remittance order aggregate, its workflow status machine, and the
//! persistence port.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, RemittanceOrder};
pub use errors::OrderError;
pub use repository::OrderRepository;
pub use services::OrderStatusMachine;
pub use value_objects::{HistoryStatus, OrderStatus, RemarkMode, StatusHistoryEntry};
