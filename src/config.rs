//! Editor configuration
//!
//! Passed from JavaScript as a plain object; every field is optional.

use serde::{Deserialize, Serialize};

use crate::persistence::STORAGE_KEY;

/// Editor settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Key the snapshot is saved under
    pub storage_key: String,

    /// Maximum number of undo steps kept
    pub history_limit: usize,

    /// Text shown while the document is empty
    pub placeholder: String,

    /// Notice shown after a successful save
    pub save_notice: String,

    /// Prefix of the notice shown when saving fails
    pub save_failed_notice: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            history_limit: 100,
            placeholder: "Type here... Use * for bold".to_string(),
            save_notice: "Content saved!".to_string(),
            save_failed_notice: "Could not save content".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"historyLimit":5}"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.storage_key, "editorContent");
        assert_eq!(config.save_notice, "Content saved!");
    }
}
