use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MigrationsConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Matched file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for MigrationsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("supabase/migrations")
}

fn default_extension() -> String {
    "sql".to_string()
}
