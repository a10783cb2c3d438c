//! Book Configuration

use serde::Deserialize;

use crate::persistence::STORAGE_KEY;

/// Settings for a recipe book session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookConfig {
    /// Key the snapshot is stored under
    pub storage_key: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(BookConfig::default().storage_key, "recipebook_state_v1");
        let parsed: BookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, BookConfig::default());
    }

    #[test]
    fn test_override_key() {
        let parsed: BookConfig = serde_json::from_str(r#"{"storageKey": "book_dev"}"#).unwrap();
        assert_eq!(parsed.storage_key, "book_dev");
    }
}
