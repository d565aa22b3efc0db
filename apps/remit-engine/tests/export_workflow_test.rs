//! End-to-end workflow test: intake, staff review, instruction export.

use std::sync::Arc;

use rust_decimal_macros::dec;

use remit_engine::application::use_cases::{
    ChangeStatusUseCase, CreateOrderRequest, CreateOrderUseCase, ExportInstructionsUseCase,
    MarkExecutedUseCase,
};
use remit_engine::domain::order::CreateOrderCommand;
use remit_engine::domain::pricing::RateTable;
use remit_engine::domain::remark::RemarkTokens;
use remit_engine::{
    Currency, FsInstructionWriter, HistoryStatus, InMemoryOrderRepository, Money, OrderNumber,
    OrderRepository, OrderStatus,
};

fn command(beneficiary: &str, amount: rust_decimal::Decimal) -> CreateOrderCommand {
    CreateOrderCommand {
        client_id: None,
        client_name: Some("PT Example".to_string()),
        transfer_amount: Money::new(amount),
        currency: Currency::new("USD"),
        remuneration_percent: dec!(2.5),
        receive_currency: None,
        beneficiary_name: beneficiary.to_string(),
        beneficiary_address: "Berlin".to_string(),
        destination_account: "DE02120300000000202051".to_string(),
        bank_name: "Deutsche Kreditbank".to_string(),
        bic: "BYLADEM1001".to_string(),
    }
}

fn tokens() -> RemarkTokens {
    RemarkTokens {
        inv_no: Some("24543".to_string()),
        date: Some("2024-03-15".to_string()),
        ..RemarkTokens::default()
    }
}

async fn create(
    use_case: &CreateOrderUseCase<InMemoryOrderRepository>,
    beneficiary: &str,
    amount: rust_decimal::Decimal,
) -> OrderNumber {
    let response = use_case
        .execute(CreateOrderRequest {
            command: command(beneficiary, amount),
            remark_tokens: Some(tokens()),
        })
        .await
        .unwrap();
    assert!(response.remark_errors.is_empty());
    response.order.order_number().clone()
}

#[tokio::test]
async fn full_order_lifecycle_with_export() -> anyhow::Result<()> {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let dir = tempfile::tempdir()?;
    let writer = Arc::new(FsInstructionWriter::new(dir.path()));

    let create_uc = CreateOrderUseCase::new(Arc::clone(&repo), RateTable::default());
    let status_uc = ChangeStatusUseCase::new(Arc::clone(&repo));
    let export_uc = ExportInstructionsUseCase::new(Arc::clone(&repo), writer);
    let executed_uc = MarkExecutedUseCase::new(Arc::clone(&repo));

    // Intake: three orders, one of which settles outside the batch channel.
    let a = create(&create_uc, "ACME GmbH", dec!(1000)).await;
    let b = create(&create_uc, "Globex Ltd", dec!(2000)).await;
    let c = create(&create_uc, "Initech BV", dec!(500)).await;

    let mut outside = repo.find_by_number(&c).await?.unwrap();
    outside.set_non_mandiri_execution(true);
    repo.update(&outside).await?;

    // Staff review: move the batch orders to on_execution.
    for number in [&a, &b, &c] {
        status_uc.execute(number, OrderStatus::PendingPayment).await?;
        status_uc.execute(number, OrderStatus::OnExecution).await?;
    }

    // Export the selection.
    let report = export_uc.execute(&[a.clone(), b.clone(), c.clone()]).await?;

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.stamped.len(), 2);
    assert_eq!(report.skipped_non_mandiri, vec![c.to_string()]);
    assert!(report.failures.is_empty());

    // One file, one line per eligible order, pipe-delimited.
    let path = report.file_path.unwrap();
    assert!(
        path.file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .ends_with("_instruction.txt")
    );
    let body = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "ACME GmbH|DE02120300000000202051|BYLADEM1001|Deutsche Kreditbank|1025.00|USD|Payment for goods under inv 24543 dd 15/03/2024"
    );
    assert!(lines[1].starts_with("Globex Ltd|"));
    assert!(lines[1].contains("|2050.00|"));

    // Exported orders carry the audit stamp but keep their status.
    for number in [&a, &b] {
        let order = repo.find_by_number(number).await?.unwrap();
        assert_eq!(order.status(), OrderStatus::OnExecution);
        assert!(order.last_download().is_some());
        assert_eq!(
            order.status_history().last().unwrap().status,
            HistoryStatus::InstructionExported
        );
    }
    let skipped = repo.find_by_number(&c).await?.unwrap();
    assert!(skipped.last_download().is_none());

    // Settlement: bulk mark the exported orders executed.
    let executed = executed_uc.execute(&[a.clone(), b.clone()]).await;
    assert_eq!(executed.executed.len(), 2);
    assert!(executed.failures.is_empty());

    let released = repo.find_by_number(&a).await?.unwrap();
    assert_eq!(released.status(), OrderStatus::Released);
    assert!(released.executed());
    assert!(!released.is_active());

    // The full audit trail survives the workflow in order.
    let trail: Vec<HistoryStatus> = released
        .status_history()
        .iter()
        .map(|e| e.status)
        .collect();
    assert_eq!(
        trail,
        vec![
            HistoryStatus::Created,
            HistoryStatus::PendingPayment,
            HistoryStatus::OnExecution,
            HistoryStatus::InstructionExported,
            HistoryStatus::Released,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn export_of_only_excluded_orders_writes_nothing() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let dir = tempfile::tempdir().unwrap();
    let writer = Arc::new(FsInstructionWriter::new(dir.path()));

    let create_uc = CreateOrderUseCase::new(Arc::clone(&repo), RateTable::default());
    let export_uc = ExportInstructionsUseCase::new(Arc::clone(&repo), writer);

    let number = create(&create_uc, "ACME GmbH", dec!(100)).await;
    let mut order = repo.find_by_number(&number).await.unwrap().unwrap();
    order.set_non_mandiri_execution(true);
    repo.update(&order).await.unwrap();

    let report = export_uc.execute(&[number]).await.unwrap();
    assert!(report.file_path.is_none());
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
