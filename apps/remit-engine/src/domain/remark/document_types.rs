//! Registry of document-type codes usable in the remark template.

use std::collections::BTreeMap;

use crate::domain::shared::DomainError;

/// Default document types seeded into every registry.
///
/// These cannot be removed at runtime.
pub const DEFAULT_DOCUMENT_TYPES: [(&str, &str); 4] = [
    ("inv", "Invoice"),
    ("invoice", "Invoice (full)"),
    ("contract", "Contract"),
    ("proforma invoice", "Proforma Invoice"),
];

/// Mutable set of document-type codes, keyed by lowercase code.
///
/// Seeded with an immutable default subset; staff may register additional
/// codes at runtime but may not remove the defaults.
#[derive(Debug, Clone)]
pub struct DocumentTypeRegistry {
    types: BTreeMap<String, String>,
}

impl DocumentTypeRegistry {
    /// Registry containing only the default document types.
    #[must_use]
    pub fn new() -> Self {
        let types = DEFAULT_DOCUMENT_TYPES
            .iter()
            .map(|(code, label)| ((*code).to_string(), (*label).to_string()))
            .collect();
        Self { types }
    }

    /// Returns true if the code is one of the immutable defaults.
    #[must_use]
    pub fn is_default(code: &str) -> bool {
        DEFAULT_DOCUMENT_TYPES
            .iter()
            .any(|(c, _)| *c == code.to_lowercase())
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.types.contains_key(&code.to_lowercase())
    }

    /// Register a new document type, normalizing the code to lowercase.
    ///
    /// Returns false if the code was already registered (existing entries
    /// are never overwritten).
    pub fn register(&mut self, code: &str, label: &str) -> bool {
        let code = code.trim().to_lowercase();
        if code.is_empty() || self.types.contains_key(&code) {
            return false;
        }
        self.types.insert(code, label.trim().to_string());
        true
    }

    /// Remove a runtime-registered document type.
    ///
    /// Removing an absent code is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is part of the default set.
    pub fn remove(&mut self, code: &str) -> Result<(), DomainError> {
        let code = code.to_lowercase();
        if Self::is_default(&code) {
            return Err(DomainError::BusinessRuleViolation {
                rule: "DEFAULT_DOC_TYPE".to_string(),
                message: format!("default document type '{code}' cannot be removed"),
            });
        }
        self.types.remove(&code);
        Ok(())
    }

    /// Iterate registered `(code, label)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(c, l)| (c.as_str(), l.as_str()))
    }
}

impl Default for DocumentTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
