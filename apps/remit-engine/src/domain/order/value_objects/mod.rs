//! Value objects for the order context.

mod order_status;
mod remark_mode;
mod status_history;

pub use order_status::OrderStatus;
pub use remark_mode::RemarkMode;
pub use status_history::{HistoryStatus, StatusHistoryEntry};
