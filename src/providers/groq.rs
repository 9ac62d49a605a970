use async_trait::async_trait;
use serde::Deserialize;
use log::{debug, trace, error, warn};

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::request::Credential;
use crate::retry::{is_transient_error, is_transient_status, RetryPolicy};
use super::{ChatRequest, ChatResponse, Transport};

#[derive(Debug, Deserialize)]
struct GroqErrorEnvelope
{   error: GroqErrorBody
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody
{   message: String
}

/// Outcome of a single HTTP attempt
enum Attempt
{   Done(Result<String, Error>)
  , Retry(Error)
}

/// Groq chat-completions transport (OpenAI-compatible)
pub struct GroqTransport
{   http_client: reqwest::Client
  , api_base: String
  , retry: RetryPolicy
  , verbose: bool
}

impl GroqTransport
{   /// Build a transport from configuration.
    /// The configured timeout bounds each attempt end to end.
    pub fn new(config: &GeneratorConfig)
      -> Result<Self, Error>
    {   config.validate()?;
        debug!(
          "Creating GroqTransport for {}",
          config.provider.api_base()
        );
        let http_client = reqwest::Client::builder()
          .timeout(config.provider.timeout())
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(GroqTransport
        {   http_client
          , api_base: config.provider.api_base().to_string()
          , retry: RetryPolicy::from(&config.retry)
          , verbose: config.provider.verbose()
        })
    }

    fn endpoint(&self) -> String
    {   format!("{}/chat/completions", self.api_base)
    }

    async fn send_once(
      &self
    , credential: &Credential
    , request: &ChatRequest
    ) -> Attempt
    {   let sent = self.http_client
          .post(self.endpoint())
          .bearer_auth(credential.expose())
          .json(request)
          .send()
          .await;

        let response = match sent
        {   Ok(response) => response
          , Err(e) => {
              error!("Request failed: {}", e);
              return transport_failure(Error::from(e));
            }
        };

        let status = response.status();
        trace!("Groq response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            let err = Error::ApiError(format!(
              "Groq error ({}): {}",
              status,
              api_error_message(&error_text)
            ));
            error!("{}", err);
            return if is_transient_status(status.as_u16())
            {   Attempt::Retry(err)
            } else
            {   Attempt::Done(Err(err))
            };
        }

        let body = match response.text().await
        {   Ok(body) => body
          , Err(e) => {
              error!("Failed to read response body: {}", e);
              return transport_failure(Error::from(e));
            }
        };

        if self.verbose
        {   trace!("Groq response body: {}", body);
        }

        Attempt::Done(extract_text(&body))
    }
}

fn transport_failure(err: Error) -> Attempt
{   if is_transient_error(&err)
    {   Attempt::Retry(err)
    } else
    {   Attempt::Done(Err(err))
    }
}

/// Prefer the service's own error message over the raw body
fn api_error_message(body: &str) -> String
{   serde_json::from_str::<GroqErrorEnvelope>(body)
      .map(|e| e.error.message)
      .unwrap_or_else(|_| body.to_string())
}

/// First choice's content, exactly as returned
fn extract_text(body: &str) -> Result<String, Error>
{   let chat_response: ChatResponse
      = serde_json::from_str(body).map_err(|e| {
        error!("Parse error: {}", e);
        Error::ParseError(e.to_string())
      })?;

    let choice = chat_response.choices.into_iter().next()
      .ok_or_else(|| {
        error!("No choices in response");
        Error::NoChoicesInResponse
      })?;

    debug!("Completion finished: {:?}", choice.finish_reason);
    choice.message.content.ok_or(Error::EmptyContent)
}

#[async_trait]
impl Transport for GroqTransport
{   fn name(&self) -> &'static str
    {   "groq"
    }

    async fn complete(
      &self
    , credential: &Credential
    , request: &ChatRequest
    ) -> Result<String, Error>
    {   debug!("Sending chat request for model: {}", request.model);
        if self.verbose
        {   trace!("Groq request: {:?}", request);
        }

        let mut last_error = None;
        for attempt in 0..self.retry.max_attempts()
        {   if attempt > 0
            {   let delay = self.retry.backoff_for_attempt(attempt - 1);
                warn!(
                  "Groq attempt {} failed, retrying after {}ms",
                  attempt,
                  delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.send_once(credential, request).await
            {   Attempt::Done(result) => return result
              , Attempt::Retry(err) => last_error = Some(err)
            }
        }

        Err(last_error.unwrap_or_else(|| {
          Error::Other("no request attempted".to_string())
        }))
    }
}
