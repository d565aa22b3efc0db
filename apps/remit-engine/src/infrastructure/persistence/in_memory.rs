//! In-memory order repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::order::aggregate::RemittanceOrder;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::OrderNumber;

/// In-memory implementation of `OrderRepository`.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, RemittanceOrder>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of orders in the repository.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Check if the repository is empty.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }

    /// Clear all orders from the repository.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        let mut orders = self.orders.write().unwrap();
        orders.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &RemittanceOrder) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(lock_error)?;
        let key = order.order_number().to_string();
        if orders.contains_key(&key) {
            return Err(OrderError::DuplicateOrderNumber { order_number: key });
        }
        orders.insert(key, order.clone());
        Ok(())
    }

    async fn update(&self, order: &RemittanceOrder) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(lock_error)?;
        let key = order.order_number().to_string();
        if !orders.contains_key(&key) {
            return Err(OrderError::NotFound { order_number: key });
        }
        orders.insert(key, order.clone());
        Ok(())
    }

    async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<RemittanceOrder>, OrderError> {
        let orders = self.orders.read().map_err(lock_error)?;
        Ok(orders.get(order_number.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<RemittanceOrder>, OrderError> {
        let orders = self.orders.read().map_err(lock_error)?;
        Ok(orders.values().cloned().collect())
    }

    async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<RemittanceOrder>, OrderError> {
        let orders = self.orders.read().map_err(lock_error)?;
        Ok(orders
            .values()
            .filter(|o| o.status() == status)
            .cloned()
            .collect())
    }

    async fn find_active(&self) -> Result<Vec<RemittanceOrder>, OrderError> {
        let orders = self.orders.read().map_err(lock_error)?;
        Ok(orders.values().filter(|o| o.is_active()).cloned().collect())
    }

    async fn delete(&self, order_number: &OrderNumber) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(lock_error)?;
        orders
            .remove(order_number.as_str())
            .ok_or_else(|| OrderError::NotFound {
                order_number: order_number.to_string(),
            })?;
        Ok(())
    }
}

fn lock_error<T>(_: std::sync::PoisonError<T>) -> OrderError {
    OrderError::Persistence {
        message: "repository lock poisoned".to_string(),
    }
}
