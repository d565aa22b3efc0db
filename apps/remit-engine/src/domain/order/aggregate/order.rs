//! Remittance Order Aggregate Root
//!
//! The order aggregate carries the intake data, the derived monetary
//! fields, the bank remark, and the append-only status audit trail.
//! Orders are created once by the intake flow, mutated by staff actions,
//! and never deleted by this core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::errors::OrderError;
use crate::domain::order::value_objects::{
    HistoryStatus, OrderStatus, RemarkMode, StatusHistoryEntry,
};
use crate::domain::pricing::{CrossCurrencyQuote, compute_remuneration};
use crate::domain::remark::{
    DEFAULT_TEMPLATE, DocumentTypeRegistry, MAX_REMARK_LEN, RemarkBuild, RemarkTokens,
    build_remark, validate_latin_text,
};
use crate::domain::shared::{ClientId, Currency, Money, OrderNumber, Timestamp, ValidationError};

/// Command to create a new remittance order from the intake form.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Client identifier, if the customer is a registered client.
    pub client_id: Option<ClientId>,
    /// Client display name.
    pub client_name: Option<String>,
    /// Principal amount to transfer, in the send currency.
    pub transfer_amount: Money,
    /// Send currency.
    pub currency: Currency,
    /// Remuneration percentage in `[0, 100]`, may be fractional.
    pub remuneration_percent: Decimal,
    /// Receive currency for cross-currency transfers.
    pub receive_currency: Option<Currency>,
    /// Beneficiary name, consumed verbatim by the exporter.
    pub beneficiary_name: String,
    /// Beneficiary address.
    pub beneficiary_address: String,
    /// Destination account number or IBAN.
    pub destination_account: String,
    /// Beneficiary bank name.
    pub bank_name: String,
    /// Beneficiary bank BIC.
    pub bic: String,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is negative or the percentage is out
    /// of range.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.transfer_amount.is_negative() {
            return Err(OrderError::InvalidValue {
                field: "transfer_amount".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if self.remuneration_percent < Decimal::ZERO
            || self.remuneration_percent > Decimal::ONE_HUNDRED
        {
            return Err(OrderError::InvalidValue {
                field: "remuneration_percent".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }
}

/// Remittance Order Aggregate Root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemittanceOrder {
    order_number: OrderNumber,
    client_id: Option<ClientId>,
    client_name: Option<String>,
    transfer_amount: Money,
    currency: Currency,
    remuneration_percent: Decimal,
    remuneration_amount: Money,
    total_payment_amount: Money,
    exchange_rate: Option<Decimal>,
    transfer_fee: Option<Money>,
    receive_amount: Option<Money>,
    receive_currency: Option<Currency>,
    transaction_remark: String,
    remark_mode: RemarkMode,
    remark_tokens: RemarkTokens,
    status: OrderStatus,
    status_history: Vec<StatusHistoryEntry>,
    closed: bool,
    executed: bool,
    non_mandiri_execution: bool,
    invoice_received: bool,
    payment_proof: bool,
    invoice_number: Option<String>,
    last_download: Option<Timestamp>,
    beneficiary_name: String,
    beneficiary_address: String,
    destination_account: String,
    bank_name: String,
    bic: String,
    created_at: Timestamp,
}

impl RemittanceOrder {
    /// Create a new order from an intake command.
    ///
    /// Assigns a unique order number, computes the derived monetary
    /// fields, initializes the status to `Created` and records the first
    /// history entry.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(cmd: CreateOrderCommand) -> Result<Self, OrderError> {
        cmd.validate()?;

        let now = Timestamp::now();
        let breakdown = compute_remuneration(cmd.transfer_amount, cmd.remuneration_percent);

        Ok(Self {
            order_number: OrderNumber::generate(now),
            client_id: cmd.client_id,
            client_name: cmd.client_name,
            transfer_amount: cmd.transfer_amount,
            currency: cmd.currency,
            remuneration_percent: cmd.remuneration_percent,
            remuneration_amount: breakdown.remuneration_amount,
            total_payment_amount: breakdown.total_payment_amount,
            exchange_rate: None,
            transfer_fee: None,
            receive_amount: None,
            receive_currency: cmd.receive_currency,
            transaction_remark: String::new(),
            remark_mode: RemarkMode::Template,
            remark_tokens: RemarkTokens::default(),
            status: OrderStatus::Created,
            status_history: vec![StatusHistoryEntry::new(OrderStatus::Created, now)],
            closed: false,
            executed: false,
            non_mandiri_execution: false,
            invoice_received: false,
            payment_proof: false,
            invoice_number: None,
            last_download: None,
            beneficiary_name: cmd.beneficiary_name,
            beneficiary_address: cmd.beneficiary_address,
            destination_account: cmd.destination_account,
            bank_name: cmd.bank_name,
            bic: cmd.bic,
            created_at: now,
        })
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order number.
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Get the client identifier.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Get the principal transfer amount.
    #[must_use]
    pub const fn transfer_amount(&self) -> Money {
        self.transfer_amount
    }

    /// Get the send currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Get the remuneration percentage.
    #[must_use]
    pub const fn remuneration_percent(&self) -> Decimal {
        self.remuneration_percent
    }

    /// Get the derived remuneration amount.
    #[must_use]
    pub const fn remuneration_amount(&self) -> Money {
        self.remuneration_amount
    }

    /// Get the derived total payment amount.
    #[must_use]
    pub const fn total_payment_amount(&self) -> Money {
        self.total_payment_amount
    }

    /// Get the indicative exchange rate, if quoted.
    #[must_use]
    pub const fn exchange_rate(&self) -> Option<Decimal> {
        self.exchange_rate
    }

    /// Get the transfer fee, if quoted.
    #[must_use]
    pub const fn transfer_fee(&self) -> Option<Money> {
        self.transfer_fee
    }

    /// Get the receive amount, if quoted.
    #[must_use]
    pub const fn receive_amount(&self) -> Option<Money> {
        self.receive_amount
    }

    /// Get the persisted transaction remark.
    #[must_use]
    pub fn transaction_remark(&self) -> &str {
        &self.transaction_remark
    }

    /// Get the remark entry mode.
    #[must_use]
    pub const fn remark_mode(&self) -> RemarkMode {
        self.remark_mode
    }

    /// Get the stored template token values.
    #[must_use]
    pub const fn remark_tokens(&self) -> &RemarkTokens {
        &self.remark_tokens
    }

    /// Get the current workflow status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the append-only status history.
    #[must_use]
    pub fn status_history(&self) -> &[StatusHistoryEntry] {
        &self.status_history
    }

    /// Returns true if the order sits in the active work queue.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active() && !self.closed && !self.executed
    }

    /// Get the closed flag.
    #[must_use]
    pub const fn closed(&self) -> bool {
        self.closed
    }

    /// Get the executed flag.
    #[must_use]
    pub const fn executed(&self) -> bool {
        self.executed
    }

    /// Returns true if the order settles outside the batch TXT export.
    #[must_use]
    pub const fn non_mandiri_execution(&self) -> bool {
        self.non_mandiri_execution
    }

    /// Get the invoice received flag.
    #[must_use]
    pub const fn invoice_received(&self) -> bool {
        self.invoice_received
    }

    /// Get the payment proof flag.
    #[must_use]
    pub const fn payment_proof(&self) -> bool {
        self.payment_proof
    }

    /// Get the recorded invoice number.
    #[must_use]
    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice_number.as_deref()
    }

    /// Get the timestamp of the most recent export.
    #[must_use]
    pub const fn last_download(&self) -> Option<Timestamp> {
        self.last_download
    }

    /// Get the beneficiary name.
    #[must_use]
    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    /// Get the beneficiary address.
    #[must_use]
    pub fn beneficiary_address(&self) -> &str {
        &self.beneficiary_address
    }

    /// Get the destination account.
    #[must_use]
    pub fn destination_account(&self) -> &str {
        &self.destination_account
    }

    /// Get the beneficiary bank name.
    #[must_use]
    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    /// Get the beneficiary bank BIC.
    #[must_use]
    pub fn bic(&self) -> &str {
        &self.bic
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ========================================================================
    // Financial mutations
    // ========================================================================

    /// Update the principal amount, recomputing both derived fields.
    ///
    /// # Errors
    ///
    /// Returns error if the amount is negative.
    pub fn set_transfer_amount(&mut self, amount: Money) -> Result<(), OrderError> {
        if amount.is_negative() {
            return Err(OrderError::InvalidValue {
                field: "transfer_amount".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        self.transfer_amount = amount;
        self.recompute_remuneration();
        Ok(())
    }

    /// Update the remuneration percentage, recomputing both derived fields.
    ///
    /// # Errors
    ///
    /// Returns error if the percentage is outside `[0, 100]`.
    pub fn set_remuneration_percent(&mut self, percent: Decimal) -> Result<(), OrderError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(OrderError::InvalidValue {
                field: "remuneration_percent".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        self.remuneration_percent = percent;
        self.recompute_remuneration();
        Ok(())
    }

    // The derived pair is never written independently of its inputs.
    fn recompute_remuneration(&mut self) {
        let breakdown = compute_remuneration(self.transfer_amount, self.remuneration_percent);
        self.remuneration_amount = breakdown.remuneration_amount;
        self.total_payment_amount = breakdown.total_payment_amount;
    }

    /// Record an indicative cross-currency quote on the order.
    pub fn apply_quote(&mut self, quote: &CrossCurrencyQuote) {
        self.exchange_rate = Some(quote.rate);
        self.transfer_fee = Some(quote.fee);
        self.receive_amount = Some(quote.receive_amount);
    }

    // ========================================================================
    // Remark mutations
    // ========================================================================

    /// Set a manually entered remark.
    ///
    /// Only legal in manual mode; template-mode remarks are always the
    /// engine's output and are never hand-edited.
    ///
    /// # Errors
    ///
    /// Returns error if the order is in template mode or the text fails
    /// Latin validation.
    pub fn set_manual_remark(&mut self, value: &str) -> Result<(), ValidationError> {
        if self.remark_mode != RemarkMode::Manual {
            return Err(ValidationError::new(
                "transaction_remark_mode",
                "remark can only be edited directly in manual mode",
            ));
        }
        validate_latin_text(value, MAX_REMARK_LEN)?;
        self.transaction_remark = value.to_string();
        Ok(())
    }

    /// Store new template token values, rebuilding the remark when the
    /// order is in template mode.
    ///
    /// Returns the build result so the caller can surface token errors;
    /// the best-effort remark is persisted regardless, mirroring the
    /// live-preview behavior of the intake form.
    pub fn apply_template_tokens(
        &mut self,
        tokens: RemarkTokens,
        registry: &DocumentTypeRegistry,
    ) -> RemarkBuild {
        self.remark_tokens = tokens;
        let build = build_remark(DEFAULT_TEMPLATE, &self.remark_tokens, registry);
        if self.remark_mode == RemarkMode::Template {
            self.transaction_remark.clone_from(&build.remark);
        }
        build
    }

    /// Switch the remark entry mode.
    ///
    /// Switching to manual clears the remark, forcing explicit re-entry;
    /// switching back to template restores the computed template output.
    /// This data-loss-on-switch behavior is preserved from the original
    /// intake form (see DESIGN.md).
    pub fn switch_remark_mode(&mut self, mode: RemarkMode, registry: &DocumentTypeRegistry) {
        if self.remark_mode == mode {
            return;
        }
        self.remark_mode = mode;
        match mode {
            RemarkMode::Manual => self.transaction_remark.clear(),
            RemarkMode::Template => {
                let build = build_remark(DEFAULT_TEMPLATE, &self.remark_tokens, registry);
                self.transaction_remark = build.remark;
            }
        }
    }

    // ========================================================================
    // Lifecycle mutations (driven by OrderStatusMachine)
    // ========================================================================

    /// Move the order to a new status, appending a history entry.
    ///
    /// Any status may transition to any other status; staff may move an
    /// order backward to correct mistakes. A same-status transition is a
    /// no-op and records nothing.
    pub fn transition_to(&mut self, new_status: OrderStatus, at: Timestamp) {
        if new_status == self.status {
            return;
        }
        self.status = new_status;
        self.status_history
            .push(StatusHistoryEntry::new(new_status, at));
    }

    /// Record an export stamp: `instruction_exported` history entry plus
    /// `last_download`, applied together.
    pub fn export_stamp(&mut self, at: Timestamp) {
        self.status_history
            .push(StatusHistoryEntry::new(HistoryStatus::InstructionExported, at));
        self.last_download = Some(at);
    }

    /// Bulk staff action: release the order and flag it executed in one
    /// mutation.
    pub fn mark_executed(&mut self, at: Timestamp) {
        self.transition_to(OrderStatus::Released, at);
        self.executed = true;
    }

    // ========================================================================
    // Staff flag mutations
    // ========================================================================

    /// Set or clear the non-Mandiri execution flag.
    pub fn set_non_mandiri_execution(&mut self, value: bool) {
        self.non_mandiri_execution = value;
    }

    /// Set or clear the closed flag.
    pub fn set_closed(&mut self, value: bool) {
        self.closed = value;
    }

    /// Set or clear the invoice received flag.
    pub fn set_invoice_received(&mut self, value: bool) {
        self.invoice_received = value;
    }

    /// Set or clear the payment proof flag.
    pub fn set_payment_proof(&mut self, value: bool) {
        self.payment_proof = value;
    }

    /// Record the invoice number.
    pub fn set_invoice_number(&mut self, value: Option<String>) {
        self.invoice_number = value;
    }
}
