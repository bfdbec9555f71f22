//! Configuration for the smavg moving average tool.
//!
//! Settings can be loaded from a TOML file:
//!
//! ```toml
//! window = 5
//! format = "csv"
//! chunk_size = 1024
//! ```
//!
//! Any key left out keeps its default value.

use serde::Deserialize;

use crate::error::{Result, SmaError};
use crate::output::OutputFormat;

/// Moving average configuration
///
/// # Example
/// ```
/// use smavg::config::SmaConfig;
///
/// let config = SmaConfig::from_toml_str("window = 16").unwrap();
/// assert_eq!(config.window, 16);
/// assert_eq!(config.chunk_size, SmaConfig::default().chunk_size);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmaConfig {
    /// Number of most recent samples averaged
    pub window: usize,
    /// Output line format
    pub format: OutputFormat,
    /// Samples read from a source per buffer
    pub chunk_size: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: 5,
            format: OutputFormat::Text,
            chunk_size: 1024,
        }
    }
}

impl SmaConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SmaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the window and chunk size are usable
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(SmaError::Config("window must be at least 1".to_string()));
        }
        if self.chunk_size == 0 {
            return Err(SmaError::Config("chunk_size must be at least 1".to_string()));
        }
        Ok(())
    }
}
