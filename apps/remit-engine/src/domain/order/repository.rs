//! Order Repository Trait
//!
//! Defines the persistence abstraction for remittance orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::RemittanceOrder;
use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::shared::OrderNumber;

/// Repository trait for remittance order persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// Returns error if the order number already exists or persistence
    /// fails.
    async fn create(&self, order: &RemittanceOrder) -> Result<(), OrderError>;

    /// Update an existing order.
    ///
    /// # Errors
    ///
    /// Returns error if the order does not exist or persistence fails.
    async fn update(&self, order: &RemittanceOrder) -> Result<(), OrderError>;

    /// Find an order by its order number.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<RemittanceOrder>, OrderError>;

    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list(&self) -> Result<Vec<RemittanceOrder>, OrderError>;

    /// List all orders with a given status.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<RemittanceOrder>, OrderError>;

    /// List all orders in the active work queue.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_active(&self) -> Result<Vec<RemittanceOrder>, OrderError>;

    /// Delete an order by its order number.
    ///
    /// # Errors
    ///
    /// Returns error if the order does not exist or deletion fails.
    async fn delete(&self, order_number: &OrderNumber) -> Result<(), OrderError>;
}
