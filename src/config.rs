//! Configuration for the completion provider and retry behavior

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use log::debug;

/// Groq's OpenAI-compatible API root
pub const DEFAULT_API_BASE: &str
  = "https://api.groq.com/openai/v1";

/// Overall per-request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig
{   /// API base URL (if custom)
    pub api_base: Option<String>
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
  , /// Trace request and response bodies
    pub verbose: Option<bool>
}

impl ProviderConfig
{   pub fn api_base(&self) -> &str
    {   self.api_base.as_deref()
          .unwrap_or(DEFAULT_API_BASE)
          .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(
          self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
        )
    }

    pub fn verbose(&self) -> bool
    {   self.verbose.unwrap_or(false)
    }
}

/// Transient-failure retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig
{   /// Max retry attempts after the first try
    pub max_retries: usize
  , /// Backoff multiplier for retries
    pub backoff_multiplier: f32
  , /// Initial backoff duration in milliseconds
    pub initial_backoff_ms: u64
}

impl Default for RetryConfig
{   fn default() -> Self
    {   RetryConfig
        {   max_retries: 2
          , backoff_multiplier: 2.0
          , initial_backoff_ms: 500
        }
    }
}

/// Top-level generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig
{   /// Provider configuration
    pub provider: ProviderConfig
  , /// Retry configuration
    pub retry: RetryConfig
}

impl GeneratorConfig
{   /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str)
      -> Result<Self, crate::error::Error>
    {   let config: GeneratorConfig
          = serde_json::from_str(json).map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              e.to_string()
            )
          })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>)
      -> Result<Self, crate::error::Error>
    {   let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("{}: {}", path.display(), e)
            )
          })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.provider.timeout_secs == Some(0)
        {   return Err(crate::error::Error::InvalidConfiguration(
              "timeout_secs must be greater than zero".into()
            ));
        }
        if self.retry.backoff_multiplier.is_nan()
          || self.retry.backoff_multiplier <= 0.0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "backoff_multiplier must be positive".into()
            ));
        }
        Ok(())
    }
}
