//! Infrastructure layer.
//!
//! Adapters implementing the domain and application ports.

pub mod export;
pub mod persistence;
