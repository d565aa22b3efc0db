// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Remit Engine - Rust Core Library
//!
//! Back-office core for international remittance orders: pricing,
//! remark generation, the order status workflow, and bank instruction
//! file export.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregate, value objects, services)
//!   - `order`: Remittance order aggregate, status workflow, audit history
//!   - `pricing`: Remuneration math and cross-currency quoting
//!   - `remark`: Bank remark template engine and Latin validation
//!   - `instruction`: TXT instruction line format
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`InstructionWriterPort`)
//!   - `use_cases`: `CreateOrder`, `ChangeStatus`, `MarkExecuted`, `ExportInstructions`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Order repository (in-memory)
//!   - `export`: Filesystem instruction writer

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::instruction::{instruction_file_name, serialize_batch, serialize_order};
pub use domain::order::{
    CreateOrderCommand, HistoryStatus, OrderError, OrderRepository, OrderStatus,
    OrderStatusMachine, RemarkMode, RemittanceOrder, StatusHistoryEntry,
};
pub use domain::pricing::{CrossCurrencyQuote, RateSource, RateTable, compute_remuneration};
pub use domain::remark::{
    DocumentTypeRegistry, RemarkBuild, RemarkTokens, build_remark, validate_latin_text,
};
pub use domain::shared::{ClientId, Currency, Money, OrderNumber, Timestamp};

// Application re-exports
pub use application::ports::{ExportError, InstructionWriterPort};
pub use application::use_cases::{
    ChangeStatusUseCase, CreateOrderRequest, CreateOrderUseCase, ExportInstructionsUseCase,
    ExportReport, MarkExecutedUseCase,
};

// Infrastructure re-exports
pub use infrastructure::export::FsInstructionWriter;
pub use infrastructure::persistence::InMemoryOrderRepository;
