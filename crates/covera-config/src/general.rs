//! General application configuration.

use serde::{Deserialize, Serialize};

/// Knowledge object shown when a command is given no id.
fn default_knowledge() -> String {
    "framework-coverage".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default knowledge object id for `status`, `summary`, and `frameworks`.
    #[serde(default = "default_knowledge")]
    pub default_knowledge: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_knowledge: default_knowledge(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_knowledge, "framework-coverage");
    }
}
