//! Order Status Machine
//!
//! Stateless domain service driving workflow status changes. The model
//! is deliberately permissive: staff correct mistakes by moving orders
//! backward, so any status may move to any other status. The machine
//! exists as the single place that applies changes and emits the audit
//! log, not as a transition whitelist.

use tracing::info;

use crate::domain::order::aggregate::RemittanceOrder;
use crate::domain::order::value_objects::OrderStatus;
use crate::domain::shared::Timestamp;

/// Stateless service for order workflow transitions.
pub struct OrderStatusMachine;

impl OrderStatusMachine {
    /// Returns true if `from` may transition to `to`.
    ///
    /// Every ordered pair of distinct statuses is legal; a same-status
    /// "transition" is legal but recorded as a no-op by [`Self::apply`].
    #[must_use]
    pub const fn can_transition(_from: OrderStatus, _to: OrderStatus) -> bool {
        true
    }

    /// All statuses reachable from `from`.
    #[must_use]
    pub fn available_transitions(from: OrderStatus) -> Vec<OrderStatus> {
        OrderStatus::ALL
            .into_iter()
            .filter(|s| *s != from)
            .collect()
    }

    /// Apply a status change to an order, appending the history entry.
    ///
    /// Returns true if the status actually changed.
    pub fn apply(order: &mut RemittanceOrder, new_status: OrderStatus, at: Timestamp) -> bool {
        let previous = order.status();
        if previous == new_status {
            return false;
        }
        order.transition_to(new_status, at);
        info!(
            order_number = %order.order_number(),
            from = %previous,
            to = %new_status,
            "order status changed"
        );
        true
    }

    /// Release an order and flag it executed in one staff action.
    pub fn mark_executed(order: &mut RemittanceOrder, at: Timestamp) {
        order.mark_executed(at);
        info!(
            order_number = %order.order_number(),
            "order marked executed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::aggregate::CreateOrderCommand;
    use crate::domain::shared::{Currency, Money};
    use rust_decimal_macros::dec;

    fn make_order() -> RemittanceOrder {
        RemittanceOrder::new(CreateOrderCommand {
            client_id: None,
            client_name: None,
            transfer_amount: Money::new(dec!(500)),
            currency: Currency::new("USD"),
            remuneration_percent: dec!(1),
            receive_currency: None,
            beneficiary_name: "ACME".to_string(),
            beneficiary_address: "Berlin".to_string(),
            destination_account: "DE00".to_string(),
            bank_name: "DKB".to_string(),
            bic: "BYLADEM1001".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn transition_is_total_over_all_ordered_pairs() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert!(OrderStatusMachine::can_transition(from, to));

                let mut order = make_order();
                order.transition_to(from, Timestamp::now());
                let entries = order.status_history().len();

                let changed = OrderStatusMachine::apply(&mut order, to, Timestamp::now());
                if from == to {
                    assert!(!changed, "{from} -> {to} must be a no-op");
                    assert_eq!(order.status_history().len(), entries);
                } else {
                    assert!(changed, "{from} -> {to} must succeed");
                    assert_eq!(order.status(), to);
                    assert_eq!(order.status_history().len(), entries + 1);
                }
            }
        }
    }

    #[test]
    fn available_transitions_excludes_current() {
        let targets = OrderStatusMachine::available_transitions(OrderStatus::Check);
        assert_eq!(targets.len(), OrderStatus::ALL.len() - 1);
        assert!(!targets.contains(&OrderStatus::Check));
    }

    #[test]
    fn apply_changes_status_and_reports() {
        let mut order = make_order();
        assert!(OrderStatusMachine::apply(
            &mut order,
            OrderStatus::Check,
            Timestamp::now()
        ));
        assert_eq!(order.status(), OrderStatus::Check);
    }

    #[test]
    fn apply_same_status_reports_false() {
        let mut order = make_order();
        assert!(!OrderStatusMachine::apply(
            &mut order,
            OrderStatus::Created,
            Timestamp::now()
        ));
        assert_eq!(order.status_history().len(), 1);
    }

    #[test]
    fn mark_executed_releases() {
        let mut order = make_order();
        OrderStatusMachine::mark_executed(&mut order, Timestamp::now());
        assert_eq!(order.status(), OrderStatus::Released);
        assert!(order.executed());
    }
}
