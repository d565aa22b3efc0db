//! Domain services for the order context.

mod status_machine;

pub use status_machine::OrderStatusMachine;
