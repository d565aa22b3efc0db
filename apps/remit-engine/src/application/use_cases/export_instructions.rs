//! Export Instructions Use Case
//!
//! Turns a staff selection of orders into one dated TXT batch file and
//! stamps each written order with its export audit entry.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ExportError, InstructionWriterPort};
use crate::domain::instruction::{instruction_file_name, serialize_batch, serialize_order};
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::shared::{OrderNumber, Timestamp};

/// Per-order failure from an export run.
#[derive(Debug)]
pub struct ExportFailure {
    /// Order that could not be exported or stamped.
    pub order_number: String,
    /// What went wrong.
    pub reason: String,
}

/// Outcome of an export run.
///
/// Stamping happens after the file is on disk, so `stamped` can be a
/// strict subset of `written`: those orders are in the batch file but
/// carry no audit entry, and the report is the only record of that gap.
#[derive(Debug)]
pub struct ExportReport {
    /// Path of the written batch file; `None` when nothing was eligible.
    pub file_path: Option<PathBuf>,
    /// Order numbers written to the file, in file order.
    pub written: Vec<String>,
    /// Order numbers stamped with the export audit entry.
    pub stamped: Vec<String>,
    /// Orders excluded because they settle outside the batch channel.
    pub skipped_non_mandiri: Vec<String>,
    /// Orders that could not be loaded, serialized, or stamped.
    pub failures: Vec<ExportFailure>,
}

/// Use case for exporting selected orders as a bank instruction file.
pub struct ExportInstructionsUseCase<O, W>
where
    O: OrderRepository,
    W: InstructionWriterPort,
{
    order_repo: Arc<O>,
    writer: Arc<W>,
}

impl<O, W> ExportInstructionsUseCase<O, W>
where
    O: OrderRepository,
    W: InstructionWriterPort,
{
    /// Create a new `ExportInstructionsUseCase`.
    pub fn new(order_repo: Arc<O>, writer: Arc<W>) -> Self {
        Self {
            order_repo,
            writer,
        }
    }

    /// Export the selected orders.
    ///
    /// Orders flagged `non_mandiri_execution` are excluded up front.
    /// The batch file is written before any order is stamped: a write
    /// failure leaves every order untouched. Stamping failures after a
    /// successful write are collected per order and never abort the run.
    ///
    /// # Errors
    ///
    /// Returns error only if the batch file itself cannot be written.
    pub async fn execute(
        &self,
        order_numbers: &[OrderNumber],
    ) -> Result<ExportReport, ExportError> {
        let now = Timestamp::now();
        let mut report = ExportReport {
            file_path: None,
            written: Vec::new(),
            stamped: Vec::new(),
            skipped_non_mandiri: Vec::new(),
            failures: Vec::new(),
        };

        // Load and filter the selection; a per-order trial serialization
        // keeps one malformed order from failing the whole batch.
        let mut eligible = Vec::new();
        for number in order_numbers {
            let order = match self.order_repo.find_by_number(number).await {
                Ok(Some(order)) => order,
                Ok(None) => {
                    report.failures.push(ExportFailure {
                        order_number: number.to_string(),
                        reason: "order not found".to_string(),
                    });
                    continue;
                }
                Err(e) => {
                    report.failures.push(ExportFailure {
                        order_number: number.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if order.non_mandiri_execution() {
                report.skipped_non_mandiri.push(number.to_string());
                continue;
            }

            match serialize_order(&order) {
                Ok(_) => eligible.push(order),
                Err(e) => report.failures.push(ExportFailure {
                    order_number: number.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if eligible.is_empty() {
            tracing::info!("export selection yielded no eligible orders, no file written");
            return Ok(report);
        }

        // File first, stamps second. A write failure must leave zero stamps.
        let file_name = instruction_file_name(now);
        let refs: Vec<_> = eligible.iter().collect();
        let body = serialize_batch(&refs).map_err(|e| ExportError::Serialization {
            message: e.to_string(),
        })?;
        let path = self.writer.write(&file_name, &body).await?;
        tracing::info!(
            file = %path.display(),
            orders = eligible.len(),
            "instruction file written"
        );
        report.file_path = Some(path);
        report.written = eligible
            .iter()
            .map(|o| o.order_number().to_string())
            .collect();

        for mut order in eligible {
            order.export_stamp(now);
            match self.order_repo.update(&order).await {
                Ok(()) => report.stamped.push(order.order_number().to_string()),
                Err(e) => {
                    tracing::warn!(
                        order_number = %order.order_number(),
                        error = %e,
                        "export stamp failed after file write"
                    );
                    report.failures.push(ExportFailure {
                        order_number: order.order_number().to_string(),
                        reason: stamp_failure_reason(&e),
                    });
                }
            }
        }

        Ok(report)
    }
}

fn stamp_failure_reason(error: &OrderError) -> String {
    format!("written to file but stamp failed: {error}")
}
