use std::fmt;

/// Error type for copygen operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Credential was empty at submit time
    MissingCredential
  , /// Required topic field was empty at submit time
    MissingTopic
  , /// HTTP transport error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Choice carried no message content
    EmptyContent
  , /// Timeout error
    Timeout
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Backend task is gone
    BackendDisconnected
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingCredential => {
              write!(f, "Missing API key")
            }
          , Error::MissingTopic => {
              write!(f, "The 'Topic' field is required")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::EmptyContent => {
              write!(f, "API response contained no text")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::BackendDisconnected => {
              write!(f, "Generator backend disconnected")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error
{   /// Diagnostic text without the category prefix for API
    /// rejections, whose message already names the service
    pub fn detail(&self) -> String
    {   match self
        {   Error::ApiError(msg) => msg.clone()
          , other => other.to_string()
        }
    }
}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_builder()
        {   Error::InvalidConfiguration(e.to_string())
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
