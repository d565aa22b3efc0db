//! Application use cases.

mod change_status;
mod create_order;
mod export_instructions;
mod mark_executed;

pub use change_status::ChangeStatusUseCase;
pub use create_order::{CreateOrderRequest, CreateOrderResponse, CreateOrderUseCase};
pub use export_instructions::{ExportFailure, ExportInstructionsUseCase, ExportReport};
pub use mark_executed::{MarkExecutedFailure, MarkExecutedReport, MarkExecutedUseCase};
