//! Configuration structures for the extraction service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::statement::DEFAULT_PLATFORM;

/// Main configuration for stmtx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtxConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,

    /// Per-request timeout in seconds (0 = no timeout).
    pub request_timeout_secs: u64,

    /// Directory for temporary upload files (system temp dir when unset).
    pub upload_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 25 * 1024 * 1024,
            request_timeout_secs: 30,
            upload_dir: None,
        }
    }
}

/// Statement extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Platform assumed when a request does not name one.
    pub default_platform: String,

    /// Run the deep-scan fallback when no income was found.
    pub deep_scan: bool,

    /// JSON term table replacing the built-in one.
    pub terms_file: Option<PathBuf>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_platform: DEFAULT_PLATFORM.to_string(),
            deep_scan: true,
            terms_file: None,
        }
    }
}

impl StmtxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
