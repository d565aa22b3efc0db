//! Token-template construction of the bank transaction remark.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DocumentTypeRegistry, MAX_REMARK_LEN};
use crate::domain::shared::ValidationError;

/// The fixed remark template.
///
/// The placeholder names are a contract with bank remark conventions and
/// with the intake form's live-preview binding; do not rename them.
pub const DEFAULT_TEMPLATE: &str = "{PAYMENT} for {GOODS} under {TYPE} {INV_NO} dd {DATE}";

/// Maximum length of the invoice number token.
pub const MAX_INV_NO_LEN: usize = 32;

/// Maximum length of the goods description token.
pub const MAX_GOODS_LEN: usize = 40;

/// Token values supplied by the intake form.
///
/// All tokens are optional at the type level; required-ness is reported
/// through build errors so a best-effort preview is always possible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkTokens {
    /// `{INV_NO}` — invoice number, required, max 32 characters.
    pub inv_no: Option<String>,
    /// `{DATE}` — invoice date as ISO `YYYY-MM-DD`, required.
    pub date: Option<String>,
    /// `{GOODS}` — goods description, defaults to `goods`, max 40 characters.
    pub goods: Option<String>,
    /// `{TYPE}` — document type code from the registry, defaults to `inv`.
    pub doc_type: Option<String>,
    /// `{PAYMENT}` — payment wording, defaults to `Payment`.
    pub payment: Option<String>,
}

/// Result of building a remark from the template.
///
/// The remark is always produced, even when tokens are missing or
/// invalid, so the form can render a live preview; errors tell the
/// caller whether submission should be blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkBuild {
    /// The computed remark text (best effort when errors are present).
    pub remark: String,
    /// Structured validation errors, empty when all tokens are valid.
    pub errors: Vec<ValidationError>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Build the transaction remark from a template and token values.
///
/// Deterministic: identical inputs always yield a byte-identical remark.
/// Missing required tokens and unparseable dates are reported as errors
/// while the corresponding segment is left blank in the output.
#[must_use]
pub fn build_remark(
    template: &str,
    tokens: &RemarkTokens,
    registry: &DocumentTypeRegistry,
) -> RemarkBuild {
    let mut errors = Vec::new();

    let payment = non_empty(tokens.payment.as_ref()).unwrap_or("Payment");

    let goods = non_empty(tokens.goods.as_ref()).unwrap_or("goods");
    if goods.chars().count() > MAX_GOODS_LEN {
        errors.push(ValidationError::new(
            "remark_goods",
            format!("exceeds maximum length of {MAX_GOODS_LEN} characters"),
        ));
    }

    let doc_type = non_empty(tokens.doc_type.as_ref()).unwrap_or("inv");
    if !registry.contains(doc_type) {
        errors.push(ValidationError::new(
            "remark_type",
            format!("unknown document type '{doc_type}'"),
        ));
    }

    let inv_no = match non_empty(tokens.inv_no.as_ref()) {
        Some(v) => {
            if v.chars().count() > MAX_INV_NO_LEN {
                errors.push(ValidationError::new(
                    "remark_inv_no",
                    format!("exceeds maximum length of {MAX_INV_NO_LEN} characters"),
                ));
            }
            v
        }
        None => {
            errors.push(ValidationError::new(
                "remark_inv_no",
                "invoice number is required",
            ));
            ""
        }
    };

    let date = match non_empty(tokens.date.as_ref()) {
        Some(iso) => match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
            Ok(d) => d.format("%d/%m/%Y").to_string(),
            Err(_) => {
                errors.push(ValidationError::new(
                    "remark_date",
                    format!("'{iso}' is not a valid ISO date (expected YYYY-MM-DD)"),
                ));
                String::new()
            }
        },
        None => {
            errors.push(ValidationError::new(
                "remark_date",
                "invoice date is required",
            ));
            String::new()
        }
    };

    let remark = template
        .replace("{PAYMENT}", payment)
        .replace("{GOODS}", goods)
        .replace("{TYPE}", doc_type)
        .replace("{INV_NO}", inv_no)
        .replace("{DATE}", &date);

    // The persisted remark cap applies to the computed output as a whole,
    // not just the individually bounded tokens.
    let length = remark.chars().count();
    if length > MAX_REMARK_LEN {
        errors.push(ValidationError::new(
            "transaction_remark",
            format!("exceeds maximum length of {MAX_REMARK_LEN} characters ({length} computed)"),
        ));
    }

    RemarkBuild { remark, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(inv_no: &str, date: &str) -> RemarkTokens {
        RemarkTokens {
            inv_no: Some(inv_no.to_string()),
            date: Some(date.to_string()),
            goods: Some("goods".to_string()),
            doc_type: Some("inv".to_string()),
            payment: Some("Payment".to_string()),
        }
    }

    #[test]
    fn builds_full_remark() {
        let registry = DocumentTypeRegistry::new();
        let build = build_remark(DEFAULT_TEMPLATE, &tokens("24543", "2024-03-15"), &registry);
        assert_eq!(
            build.remark,
            "Payment for goods under inv 24543 dd 15/03/2024"
        );
        assert!(build.errors.is_empty());
    }

    #[test]
    fn defaults_fill_optional_tokens() {
        let registry = DocumentTypeRegistry::new();
        let t = RemarkTokens {
            inv_no: Some("77".to_string()),
            date: Some("2024-01-02".to_string()),
            ..RemarkTokens::default()
        };
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert_eq!(build.remark, "Payment for goods under inv 77 dd 02/01/2024");
        assert!(build.errors.is_empty());
    }

    #[test]
    fn missing_inv_no_reports_error_but_previews() {
        let registry = DocumentTypeRegistry::new();
        let t = RemarkTokens {
            date: Some("2024-03-15".to_string()),
            ..RemarkTokens::default()
        };
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert_eq!(build.remark, "Payment for goods under inv  dd 15/03/2024");
        assert_eq!(build.errors.len(), 1);
        assert_eq!(build.errors[0].field, "remark_inv_no");
    }

    #[test]
    fn unparseable_date_leaves_segment_blank() {
        let registry = DocumentTypeRegistry::new();
        let build = build_remark(DEFAULT_TEMPLATE, &tokens("24543", "15/03/2024"), &registry);
        assert_eq!(build.remark, "Payment for goods under inv 24543 dd ");
        assert_eq!(build.errors.len(), 1);
        assert_eq!(build.errors[0].field, "remark_date");
    }

    #[test]
    fn over_length_tokens_reported() {
        let registry = DocumentTypeRegistry::new();
        let mut t = tokens(&"9".repeat(33), "2024-03-15");
        t.goods = Some("g".repeat(41));
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        let fields: Vec<&str> = build.errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"remark_inv_no"));
        assert!(fields.contains(&"remark_goods"));
    }

    #[test]
    fn unknown_document_type_reported() {
        let registry = DocumentTypeRegistry::new();
        let mut t = tokens("24543", "2024-03-15");
        t.doc_type = Some("waybill".to_string());
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert_eq!(build.errors.len(), 1);
        assert_eq!(build.errors[0].field, "remark_type");
        // Best-effort preview still carries the provided value.
        assert!(build.remark.contains("waybill"));
    }

    #[test]
    fn registered_type_is_accepted() {
        let mut registry = DocumentTypeRegistry::new();
        registry.register("waybill", "Waybill");
        let mut t = tokens("24543", "2024-03-15");
        t.doc_type = Some("waybill".to_string());
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert!(build.errors.is_empty());
    }

    #[test]
    fn over_length_computed_remark_reported() {
        let registry = DocumentTypeRegistry::new();
        let mut t = tokens("24543", "2024-03-15");
        // PAYMENT has no per-token cap; the total-length check must catch it.
        t.payment = Some("P".repeat(600));
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert!(build.remark.chars().count() > 500);
        assert_eq!(build.errors.len(), 1);
        assert_eq!(build.errors[0].field, "transaction_remark");
    }

    #[test]
    fn remark_at_length_boundary_is_valid() {
        let registry = DocumentTypeRegistry::new();
        let mut t = tokens("24543", "2024-03-15");
        // Pad PAYMENT so the computed remark lands exactly on the cap.
        let base = build_remark(DEFAULT_TEMPLATE, &t, &registry).remark.chars().count();
        let payment_len = "Payment".chars().count();
        t.payment = Some("P".repeat(500 - base + payment_len));
        let build = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert_eq!(build.remark.chars().count(), 500);
        assert!(build.errors.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let registry = DocumentTypeRegistry::new();
        let t = tokens("24543", "2024-03-15");
        let a = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        let b = build_remark(DEFAULT_TEMPLATE, &t, &registry);
        assert_eq!(a.remark, b.remark);
        assert_eq!(a.errors, b.errors);
    }
}
