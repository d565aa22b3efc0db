//! Append-only status history entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::OrderStatus;
use crate::domain::shared::Timestamp;

/// A status value as recorded in the history log.
///
/// The history records both substantive workflow statuses and the
/// `instruction_exported` audit pseudo-status written by the exporter.
/// The pseudo-status is never a legal value of `order.status`, which is
/// why it is a separate type rather than an `OrderStatus` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    /// Order created by the intake form.
    Created,
    /// Order saved but not yet submitted for review.
    Draft,
    /// Order under staff review.
    Check,
    /// Order rejected during review.
    Rejected,
    /// Awaiting customer payment.
    PendingPayment,
    /// Payment received, transfer being executed.
    OnExecution,
    /// Funds released to the beneficiary.
    Released,
    /// Order cancelled.
    Cancelled,
    /// Audit stamp: order was written to an instruction batch file.
    InstructionExported,
}

impl From<OrderStatus> for HistoryStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Created => Self::Created,
            OrderStatus::Draft => Self::Draft,
            OrderStatus::Check => Self::Check,
            OrderStatus::Rejected => Self::Rejected,
            OrderStatus::PendingPayment => Self::PendingPayment,
            OrderStatus::OnExecution => Self::OnExecution,
            OrderStatus::Released => Self::Released,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Draft => "draft",
            Self::Check => "check",
            Self::Rejected => "rejected",
            Self::PendingPayment => "pending_payment",
            Self::OnExecution => "on_execution",
            Self::Released => "released",
            Self::Cancelled => "cancelled",
            Self::InstructionExported => "instruction_exported",
        };
        f.write_str(s)
    }
}

/// One entry in the append-only status audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// Status recorded by this entry.
    pub status: HistoryStatus,
    /// When the change happened.
    pub timestamp: Timestamp,
}

impl StatusHistoryEntry {
    /// Create a new history entry.
    #[must_use]
    pub fn new(status: impl Into<HistoryStatus>, timestamp: Timestamp) -> Self {
        Self {
            status: status.into(),
            timestamp,
        }
    }
}
