//! Transaction remark entry mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the transaction remark is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkMode {
    /// Remark is the deterministic output of the token template.
    #[default]
    Template,
    /// Remark is free text entered by the customer, Latin-validated.
    Manual,
}

impl fmt::Display for RemarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => f.write_str("template"),
            Self::Manual => f.write_str("manual"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remark_mode_default_is_template() {
        assert_eq!(RemarkMode::default(), RemarkMode::Template);
    }

    #[test]
    fn remark_mode_serde() {
        assert_eq!(
            serde_json::to_string(&RemarkMode::Manual).unwrap(),
            "\"manual\""
        );
        let parsed: RemarkMode = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(parsed, RemarkMode::Template);
    }
}
