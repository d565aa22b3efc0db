//! Create Order Use Case

use std::sync::Arc;

use crate::domain::order::aggregate::{CreateOrderCommand, RemittanceOrder};
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::pricing::RateTable;
use crate::domain::remark::{DocumentTypeRegistry, RemarkTokens};
use crate::domain::shared::ValidationError;

/// Request to create a remittance order.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    /// Intake form fields.
    pub command: CreateOrderCommand,
    /// Remark template token values, if the form filled any.
    pub remark_tokens: Option<RemarkTokens>,
}

/// Result of creating a remittance order.
#[derive(Debug)]
pub struct CreateOrderResponse {
    /// The persisted order.
    pub order: RemittanceOrder,
    /// Non-blocking remark token errors surfaced to the form.
    pub remark_errors: Vec<ValidationError>,
}

/// Use case for creating a remittance order from the intake form.
///
/// Computes the remuneration breakdown, quotes the cross-currency leg
/// when a receive currency is set, builds the template remark, and
/// persists the order in `created` status.
pub struct CreateOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
    rate_table: RateTable,
    document_types: DocumentTypeRegistry,
}

impl<O> CreateOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `CreateOrderUseCase`.
    pub fn new(order_repo: Arc<O>, rate_table: RateTable) -> Self {
        Self {
            order_repo,
            rate_table,
            document_types: DocumentTypeRegistry::new(),
        }
    }

    /// Execute the use case.
    ///
    /// Remark token problems are reported in the response rather than
    /// failing the creation; the intake form treats them as field-level
    /// warnings.
    ///
    /// # Errors
    ///
    /// Returns error if the command is invalid or persistence fails.
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<CreateOrderResponse, OrderError> {
        let receive_currency = request.command.receive_currency.clone();
        let mut order = RemittanceOrder::new(request.command)?;

        if let Some(receive) = receive_currency {
            let quote = self
                .rate_table
                .quote(order.transfer_amount(), order.currency(), &receive);
            order.apply_quote(&quote);
        }

        let remark_errors = request
            .remark_tokens
            .map(|tokens| order.apply_template_tokens(tokens, &self.document_types).errors)
            .unwrap_or_default();

        self.order_repo.create(&order).await?;
        tracing::info!(order_number = %order.order_number(), "order created");

        Ok(CreateOrderResponse {
            order,
            remark_errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::{Currency, Money};
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    fn command(receive: Option<&str>) -> CreateOrderCommand {
        CreateOrderCommand {
            client_id: None,
            client_name: Some("PT Example".to_string()),
            transfer_amount: Money::new(dec!(100)),
            currency: Currency::new("USD"),
            remuneration_percent: dec!(2.5),
            receive_currency: receive.map(Currency::new),
            beneficiary_name: "ACME GmbH".to_string(),
            beneficiary_address: "Berlin".to_string(),
            destination_account: "DE02120300000000202051".to_string(),
            bank_name: "DKB".to_string(),
            bic: "BYLADEM1001".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_order() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CreateOrderUseCase::new(Arc::clone(&repo), RateTable::default());

        let response = use_case
            .execute(CreateOrderRequest {
                command: command(None),
                remark_tokens: None,
            })
            .await
            .unwrap();

        assert_eq!(response.order.status(), OrderStatus::Created);
        let stored = repo
            .find_by_number(response.order.order_number())
            .await
            .unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn quotes_cross_currency_leg() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo, RateTable::default());

        let response = use_case
            .execute(CreateOrderRequest {
                command: command(Some("NGN")),
                remark_tokens: None,
            })
            .await
            .unwrap();

        assert_eq!(response.order.exchange_rate(), Some(dec!(1550.50)));
        assert_eq!(response.order.receive_amount(), Some(Money::new(dec!(155050.00))));
    }

    #[tokio::test]
    async fn remark_tokens_build_template_remark() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo, RateTable::default());

        let response = use_case
            .execute(CreateOrderRequest {
                command: command(None),
                remark_tokens: Some(RemarkTokens {
                    inv_no: Some("24543".to_string()),
                    date: Some("2024-03-15".to_string()),
                    ..RemarkTokens::default()
                }),
            })
            .await
            .unwrap();

        assert!(response.remark_errors.is_empty());
        assert_eq!(
            response.order.transaction_remark(),
            "Payment for goods under inv 24543 dd 15/03/2024"
        );
    }

    #[tokio::test]
    async fn token_errors_do_not_block_creation() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CreateOrderUseCase::new(Arc::clone(&repo), RateTable::default());

        let response = use_case
            .execute(CreateOrderRequest {
                command: command(None),
                remark_tokens: Some(RemarkTokens::default()),
            })
            .await
            .unwrap();

        assert!(!response.remark_errors.is_empty());
        assert!(repo
            .find_by_number(response.order.order_number())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn invalid_command_is_rejected() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CreateOrderUseCase::new(repo, RateTable::default());

        let mut cmd = command(None);
        cmd.remuneration_percent = dec!(150);
        let result = use_case
            .execute(CreateOrderRequest {
                command: cmd,
                remark_tokens: None,
            })
            .await;
        assert!(result.is_err());
    }
}
