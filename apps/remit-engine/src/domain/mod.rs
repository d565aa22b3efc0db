//! Domain layer.
//!
//! Pure business logic with no infrastructure concerns: value objects,
//! the order aggregate, pricing math, the remark template engine, and
//! the instruction wire format.

pub mod instruction;
pub mod order;
pub mod pricing;
pub mod remark;
pub mod shared;
