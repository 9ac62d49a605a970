//! Bounded retry policy for transient transport failures

use std::time::Duration;

/// Retry policy for failed requests
#[derive(Debug, Clone)]
pub struct RetryPolicy
{   pub max_retries: usize
  , pub backoff_multiplier: f32
  , pub initial_backoff: Duration
}

impl RetryPolicy
{   /// Create a new retry policy
    pub fn new(
      max_retries: usize
    , backoff_multiplier: f32
    , initial_backoff_ms: u64
    ) -> Self
    {   RetryPolicy
        {   max_retries
          , backoff_multiplier
          , initial_backoff: Duration::from_millis(
              initial_backoff_ms
            )
        }
    }

    /// Sleep before retry number `retry` (0-based)
    pub fn backoff_for_attempt(&self, retry: usize) -> Duration
    {   let factor = f64::from(self.backoff_multiplier)
          .powi(retry as i32);
        let millis = self.initial_backoff.as_millis() as f64 * factor;
        Duration::from_millis(millis as u64)
    }

    /// Total attempts including the first one
    pub fn max_attempts(&self) -> usize
    {   self.max_retries + 1
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::from(&crate::config::RetryConfig::default())
    }
}

impl From<&crate::config::RetryConfig> for RetryPolicy
{   fn from(config: &crate::config::RetryConfig) -> Self
    {   RetryPolicy::new(
          config.max_retries
        , config.backoff_multiplier
        , config.initial_backoff_ms
        )
    }
}

/// Whether an HTTP status is worth another attempt
pub fn is_transient_status(status: u16) -> bool
{   matches!(status, 408 | 409 | 429) || (500..600).contains(&status)
}

/// Whether a transport error is worth another attempt
pub fn is_transient_error(error: &crate::error::Error) -> bool
{   match error
    {   crate::error::Error::Timeout => true
      , crate::error::Error::HttpError(_) => true
      , _ => false
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;

    #[test]
    fn default_policy_retries_twice()
    {   let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.max_attempts(), 3);
    }

    #[test]
    fn backoff_grows_exponentially()
    {   let policy = RetryPolicy::new(2, 2.0, 100);
        assert_eq!(policy.backoff_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.backoff_for_attempt(2), Duration::from_millis(400));
    }

    #[test]
    fn transient_statuses()
    {   for status in [408, 409, 429, 500, 502, 503, 504]
        {   assert!(is_transient_status(status), "{}", status);
        }
        for status in [200, 400, 401, 403, 404, 422]
        {   assert!(!is_transient_status(status), "{}", status);
        }
    }

    #[test]
    fn only_transport_faults_are_transient()
    {   assert!(is_transient_error(&Error::Timeout));
        assert!(is_transient_error(&Error::HttpError("reset".into())));
        assert!(!is_transient_error(&Error::ApiError("401".into())));
        assert!(!is_transient_error(&Error::ParseError("eof".into())));
        assert!(!is_transient_error(
          &Error::InvalidConfiguration("builder error".into())
        ));
    }
}
