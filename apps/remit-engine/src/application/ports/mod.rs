//! Application ports.
//!
//! Outbound interfaces the use cases depend on, implemented by
//! infrastructure adapters.

mod instruction_writer;

pub use instruction_writer::{ExportError, InstructionWriterPort};
