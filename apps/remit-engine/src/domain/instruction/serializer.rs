//! TXT serialization of bank payment instructions.
//!
//! One order becomes one pipe-delimited line:
//!
//! ```text
//! beneficiary_name|destination_account|bic|bank_name|amount|currency|remark
//! ```
//!
//! The amount is the total payment amount rendered with exactly two
//! decimal places. This line layout is a wire contract with the bank's
//! batch upload; changing field order or separators breaks ingestion,
//! so it is pinned by golden tests.

use crate::domain::order::RemittanceOrder;
use crate::domain::shared::{Timestamp, ValidationError};

/// Field separator of the instruction line format.
pub const FIELD_SEPARATOR: char = '|';

/// Batch file name for a given export date: `YYYYMMDD_instruction.txt`.
#[must_use]
pub fn instruction_file_name(at: Timestamp) -> String {
    format!("{}_instruction.txt", at.yyyymmdd())
}

/// Serialize one order into one instruction line.
///
/// # Errors
///
/// Returns error if a serialized field contains the separator or a line
/// break, which would corrupt the batch file.
pub fn serialize_order(order: &RemittanceOrder) -> Result<String, ValidationError> {
    let fields: [(&str, &str); 4] = [
        ("beneficiary_name", order.beneficiary_name()),
        ("destination_account", order.destination_account()),
        ("bic", order.bic()),
        ("bank_name", order.bank_name()),
    ];
    for (name, value) in fields {
        check_field(name, value)?;
    }
    check_field("transaction_remark", order.transaction_remark())?;

    Ok(format!(
        "{}|{}|{}|{}|{}|{}|{}",
        order.beneficiary_name(),
        order.destination_account(),
        order.bic(),
        order.bank_name(),
        order.total_payment_amount(),
        order.currency(),
        order.transaction_remark(),
    ))
}

/// Serialize a batch of orders into the full TXT file body.
///
/// Lines appear in input order, each terminated by `\n`.
///
/// # Errors
///
/// Returns the first per-order serialization error.
pub fn serialize_batch(orders: &[&RemittanceOrder]) -> Result<String, ValidationError> {
    let mut body = String::new();
    for order in orders {
        body.push_str(&serialize_order(order)?);
        body.push('\n');
    }
    Ok(body)
}

fn check_field(name: &str, value: &str) -> Result<(), ValidationError> {
    if value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::new(
            name,
            "must not contain '|' or line breaks",
        ));
    }
    Ok(())
}
