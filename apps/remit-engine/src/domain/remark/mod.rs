//! Remark template engine.
//!
//! Produces the bank-facing transaction remark either from the fixed
//! token template or from Latin-validated free text.

mod document_types;
mod latin;
mod template;

pub use document_types::{DEFAULT_DOCUMENT_TYPES, DocumentTypeRegistry};
pub use latin::validate_latin_text;
pub use template::{
    DEFAULT_TEMPLATE, MAX_GOODS_LEN, MAX_INV_NO_LEN, RemarkBuild, RemarkTokens, build_remark,
};

/// Maximum length of a persisted transaction remark.
pub const MAX_REMARK_LEN: usize = 500;
