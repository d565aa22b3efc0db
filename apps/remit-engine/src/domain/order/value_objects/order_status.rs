//! Order status in the remittance workflow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a remittance order.
///
/// The snake_case string literals are a contract with the staff UI's
/// selector controls and with downstream reporting; renaming or removing
/// a literal is a breaking change.
///
/// Staff may move an order between any two statuses, forward or backward;
/// the workflow graph is deliberately unconstrained (see
/// `OrderStatusMachine`). `Released`, `Cancelled` and `Rejected` are
/// terminal in practice only, with no system enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
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
}

impl OrderStatus {
    /// All statuses, in workflow display order.
    pub const ALL: [Self; 8] = [
        Self::Created,
        Self::Draft,
        Self::Check,
        Self::Rejected,
        Self::PendingPayment,
        Self::OnExecution,
        Self::Released,
        Self::Cancelled,
    ];

    /// Statuses shown on the active-orders work queue.
    pub const ACTIVE: [Self; 5] = [
        Self::Created,
        Self::Draft,
        Self::Check,
        Self::PendingPayment,
        Self::OnExecution,
    ];

    /// Returns true if the status belongs to the active work queue.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Created | Self::Draft | Self::Check | Self::PendingPayment | Self::OnExecution
        )
    }

    /// The snake_case wire literal for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Draft => "draft",
            Self::Check => "check",
            Self::Rejected => "rejected",
            Self::PendingPayment => "pending_payment",
            Self::OnExecution => "on_execution",
            Self::Released => "released",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "draft" => Ok(Self::Draft),
            "check" => Ok(Self::Check),
            "rejected" => Ok(Self::Rejected),
            "pending_payment" => Ok(Self::PendingPayment),
            "on_execution" => Ok(Self::OnExecution),
            "released" => Ok(Self::Released),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}
