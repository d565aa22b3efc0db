//! Application layer.
//!
//! Use cases orchestrate the domain through ports; no business rules
//! live here.

pub mod ports;
pub mod use_cases;
