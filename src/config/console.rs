use serde::{Deserialize, Serialize};

/// Describes the external database console the operator pastes into.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_editor_path")]
    pub editor_path: String,

    /// Length of the delimiter lines around each migration header.
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            editor_path: default_editor_path(),
            width: default_width(),
        }
    }
}

fn default_name() -> String {
    "supabase.com".to_string()
}

fn default_editor_path() -> String {
    "SQL Editor > New Query".to_string()
}

fn default_width() -> usize {
    80
}
