//! # Configuration
//!
//! Deploy-tunable values load through [`confique`] from a `notewall.toml`
//! next to the data directory, environment variables, or compiled
//! defaults. Behavioral constants (the extension allow-list, the class
//! enumeration, the summarizer word lists) are not configuration; they
//! live as consts in their modules.

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for notewall, stored in `notewall.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotewallConfig {
    /// Notes per listing page.
    #[config(default = 5)]
    pub page_size: usize,

    /// Upload size ceiling in bytes.
    #[config(default = 16777216)]
    pub max_upload_bytes: usize,

    /// Directory for attachment blobs, relative to the data directory
    /// unless absolute.
    #[config(default = "uploads")]
    pub upload_dir: String,
}

impl Default for NotewallConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_upload_bytes: 16 * 1024 * 1024,
            upload_dir: "uploads".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotewallConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.upload_dir, "uploads");
    }

    #[test]
    fn test_load_from_toml() {
        let config: NotewallConfig = toml::from_str(
            r#"
            page_size = 10
            max_upload_bytes = 1024
            upload_dir = "blobs"
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.upload_dir, "blobs");
    }
}
