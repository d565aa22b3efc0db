//! Change Status Use Case

use std::sync::Arc;

use crate::domain::order::aggregate::RemittanceOrder;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderStatusMachine;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::{OrderNumber, Timestamp};

/// Use case for a staff status change on a single order.
pub struct ChangeStatusUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> ChangeStatusUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `ChangeStatusUseCase`.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Move the order to `new_status` and persist it.
    ///
    /// A same-status change is a silent no-op: the stored order is
    /// returned unchanged and no history entry is written.
    ///
    /// # Errors
    ///
    /// Returns error if the order does not exist or persistence fails.
    pub async fn execute(
        &self,
        order_number: &OrderNumber,
        new_status: OrderStatus,
    ) -> Result<RemittanceOrder, OrderError> {
        let mut order = self
            .order_repo
            .find_by_number(order_number)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_number: order_number.to_string(),
            })?;

        if OrderStatusMachine::apply(&mut order, new_status, Timestamp::now()) {
            self.order_repo.update(&order).await?;
        }
        Ok(order)
    }
}
