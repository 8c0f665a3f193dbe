use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default = "default_console_format")]
    pub console_format: String,

    #[serde(default)]
    pub file_enabled: bool,

    /// Per-target overrides, written as `target:level,target:level`.
    #[serde(default, deserialize_with = "deserialize_ext_level")]
    pub ext_level: Option<HashMap<String, String>>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            console_format: default_console_format(),
            file_enabled: false,
            ext_level: None,
        }
    }
}

impl LogConfig {
    /// Builds an `EnvFilter` directive string from the base level and overrides.
    pub fn filter_directives(&self) -> String {
        let mut directives = vec![self.level.clone()];

        if let Some(ext_levels) = &self.ext_level {
            let mut targets: Vec<_> = ext_levels.iter().collect();
            targets.sort();
            directives.extend(
                targets
                    .into_iter()
                    .map(|(target, level)| format!("{}={}", target, level)),
            );
        }

        directives.join(",")
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_console_format() -> String {
    "compact".to_string()
}

fn deserialize_ext_level<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    let map: HashMap<String, String> = raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(target, level)| (target.trim().to_string(), level.trim().to_string()))
        .filter(|(target, level)| !target.is_empty() && !level.is_empty())
        .collect();

    Ok(if map.is_empty() { None } else { Some(map) })
}
