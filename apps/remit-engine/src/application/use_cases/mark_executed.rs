//! Mark Executed Use Case

use std::sync::Arc;

use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderStatusMachine;
use crate::domain::shared::{OrderNumber, Timestamp};

/// Per-order failure from a bulk mark-executed run.
#[derive(Debug)]
pub struct MarkExecutedFailure {
    /// Order that could not be updated.
    pub order_number: String,
    /// What went wrong.
    pub error: OrderError,
}

/// Result of a bulk mark-executed run.
#[derive(Debug)]
pub struct MarkExecutedReport {
    /// Order numbers released and flagged executed.
    pub executed: Vec<String>,
    /// Orders that failed, with the cause.
    pub failures: Vec<MarkExecutedFailure>,
}

/// Use case for the bulk staff action that releases orders and flags
/// them executed.
///
/// Each order is processed independently; one failure never blocks the
/// rest of the selection.
pub struct MarkExecutedUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> MarkExecutedUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `MarkExecutedUseCase`.
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Execute the bulk action over the selected order numbers.
    pub async fn execute(&self, order_numbers: &[OrderNumber]) -> MarkExecutedReport {
        let mut executed = Vec::new();
        let mut failures = Vec::new();
        let now = Timestamp::now();

        for number in order_numbers {
            match self.mark_one(number, now).await {
                Ok(()) => executed.push(number.to_string()),
                Err(error) => {
                    tracing::warn!(order_number = %number, %error, "mark executed failed");
                    failures.push(MarkExecutedFailure {
                        order_number: number.to_string(),
                        error,
                    });
                }
            }
        }

        MarkExecutedReport { executed, failures }
    }

    async fn mark_one(&self, number: &OrderNumber, at: Timestamp) -> Result<(), OrderError> {
        let mut order = self
            .order_repo
            .find_by_number(number)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_number: number.to_string(),
            })?;
        OrderStatusMachine::mark_executed(&mut order, at);
        self.order_repo.update(&order).await
    }
}
