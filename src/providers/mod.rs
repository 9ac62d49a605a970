//! Completion transports and the chat wire format they share

pub mod groq;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// Re-export for convenience
pub use groq::GroqTransport;

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub stream: bool
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

// ===== Transport =====

/// One request/response exchange with a completion service.
/// Implementations own retry of transient faults.
#[async_trait]
pub trait Transport: Send + Sync
{   /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Send the chat request and return the completion text untouched
    async fn complete(
      &self
    , credential: &crate::request::Credential
    , request: &ChatRequest
    ) -> Result<String, crate::error::Error>;
}
