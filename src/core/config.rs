//! Service configuration with documented defaults
//!
//! All tunable values are collected here with explanations of their purpose.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::core::error::{GenquestError, Result};

/// Configuration for the question-generation service
///
/// Defaults are suitable for a local deployment with the annotation
/// sidecar on the same host. Every field can be overridden from a TOML
/// file passed on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Base URL of the annotation sidecar
    ///
    /// The client POSTs to `{annotator_url}/annotate`. Overridden by the
    /// ANNOTATOR_URL environment variable when set.
    pub annotator_url: String,

    /// Timeout for a single annotation request, in seconds
    ///
    /// Annotation latency grows with passage length; at the default
    /// passage cap a healthy sidecar answers well under a second.
    pub annotator_timeout_secs: u64,

    /// Maximum accepted passage length, in characters
    ///
    /// The core has no internal bound on conjunction chains or bracket
    /// nesting, so the input size is the only lever that bounds work per
    /// request. Oversized passages are rejected at the boundary with 422.
    pub max_passage_chars: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 8000).into(),
            annotator_url: "http://127.0.0.1:9000".into(),
            annotator_timeout_secs: 10,
            max_passage_chars: 10_000,
        }
    }
}

impl ServiceConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, with defaults for absent keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ServiceConfig =
            toml::from_str(&raw).map_err(|e| GenquestError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Annotation request timeout as a [`Duration`]
    pub fn annotator_timeout(&self) -> Duration {
        Duration::from_secs(self.annotator_timeout_secs)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.annotator_url.is_empty() {
            return Err(GenquestError::Config("annotator_url must not be empty".into()));
        }

        if self.annotator_timeout_secs == 0 {
            return Err(GenquestError::Config(
                "annotator_timeout_secs must be positive".into(),
            ));
        }

        if self.max_passage_chars == 0 {
            return Err(GenquestError::Config(
                "max_passage_chars must be positive".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ServiceConfig> = OnceLock::new();

/// Get the global service config (initializes with defaults if not set)
pub fn config() -> &'static ServiceConfig {
    CONFIG.get_or_init(ServiceConfig::default)
}

/// Set the global service config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ServiceConfig) -> std::result::Result<(), ServiceConfig> {
    CONFIG.set(config)
}
