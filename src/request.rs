//! Generation request, credential and result types

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Closed selection sets =====

/// Publishing platform the copy is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform
{   #[default]
    Instagram
  , Facebook
  , LinkedIn
  , Blog
  , #[serde(alias = "E-mail")]
    Email
}

impl Platform
{   pub const ALL: [Platform; 5] = [
      Platform::Instagram
    , Platform::Facebook
    , Platform::LinkedIn
    , Platform::Blog
    , Platform::Email
    ];

    pub fn label(&self) -> &'static str
    {   match self
        {   Platform::Instagram => "Instagram"
          , Platform::Facebook => "Facebook"
          , Platform::LinkedIn => "LinkedIn"
          , Platform::Blog => "Blog"
          , Platform::Email => "E-mail"
        }
    }
}

/// Message tone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone
{   #[default]
    Normal
  , Informative
  , Inspiring
  , Urgent
  , Informal
}

impl Tone
{   pub const ALL: [Tone; 5] = [
      Tone::Normal
    , Tone::Informative
    , Tone::Inspiring
    , Tone::Urgent
    , Tone::Informal
    ];

    pub fn label(&self) -> &'static str
    {   match self
        {   Tone::Normal => "Normal"
          , Tone::Informative => "Informative"
          , Tone::Inspiring => "Inspiring"
          , Tone::Urgent => "Urgent"
          , Tone::Informal => "Informal"
        }
    }
}

/// Text length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Length
{   #[default]
    Short
  , Medium
  , Long
}

impl Length
{   pub const ALL: [Length; 3] = [
      Length::Short
    , Length::Medium
    , Length::Long
    ];

    pub fn label(&self) -> &'static str
    {   match self
        {   Length::Short => "Short"
          , Length::Medium => "Medium"
          , Length::Long => "Long"
        }
    }
}

/// Target audience
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience
{   #[default]
    All
  , #[serde(alias = "Young adults")]
    YoungAdults
  , Families
  , Seniors
  , Teenagers
}

impl Audience
{   pub const ALL: [Audience; 5] = [
      Audience::All
    , Audience::YoungAdults
    , Audience::Families
    , Audience::Seniors
    , Audience::Teenagers
    ];

    pub fn label(&self) -> &'static str
    {   match self
        {   Audience::All => "All"
          , Audience::YoungAdults => "Young adults"
          , Audience::Families => "Families"
          , Audience::Seniors => "Seniors"
          , Audience::Teenagers => "Teenagers"
        }
    }
}

macro_rules! display_label {
  ($($ty:ty),*) => {
    $(impl fmt::Display for $ty
      {   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
          {   f.write_str(self.label())
          }
      })*
  };
}

display_label!(Platform, Tone, Length, Audience);

// ===== GenerationRequest =====

/// One submitted set of content parameters.
/// Only obtainable through the builder, so the topic is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest
{   topic: String
  , platform: Platform
  , tone: Tone
  , length: Length
  , audience: Audience
  , include_cta: bool
  , include_hashtags: bool
  , keywords: Option<String>
}

impl GenerationRequest
{   pub fn builder(topic: impl Into<String>)
      -> GenerationRequestBuilder
    {   GenerationRequestBuilder
        {   topic: topic.into()
          , platform: Platform::default()
          , tone: Tone::default()
          , length: Length::default()
          , audience: Audience::default()
          , include_cta: false
          , include_hashtags: false
          , keywords: None
        }
    }

    pub fn topic(&self) -> &str { &self.topic }
    pub fn platform(&self) -> Platform { self.platform }
    pub fn tone(&self) -> Tone { self.tone }
    pub fn length(&self) -> Length { self.length }
    pub fn audience(&self) -> Audience { self.audience }
    pub fn include_cta(&self) -> bool { self.include_cta }
    pub fn include_hashtags(&self) -> bool { self.include_hashtags }

    /// Keywords, if any non-empty text was supplied
    pub fn keywords(&self) -> Option<&str>
    {   self.keywords.as_deref()
          .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder
{   topic: String
  , platform: Platform
  , tone: Tone
  , length: Length
  , audience: Audience
  , include_cta: bool
  , include_hashtags: bool
  , keywords: Option<String>
}

impl GenerationRequestBuilder
{   pub fn platform(mut self, platform: Platform) -> Self
    {   self.platform = platform;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self
    {   self.tone = tone;
        self
    }

    pub fn length(mut self, length: Length) -> Self
    {   self.length = length;
        self
    }

    pub fn audience(mut self, audience: Audience) -> Self
    {   self.audience = audience;
        self
    }

    pub fn include_cta(mut self, include: bool) -> Self
    {   self.include_cta = include;
        self
    }

    pub fn include_hashtags(mut self, include: bool) -> Self
    {   self.include_hashtags = include;
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self
    {   self.keywords = Some(keywords.into());
        self
    }

    /// Fails with `MissingTopic` when the topic is empty
    pub fn build(self)
      -> Result<GenerationRequest, crate::error::Error>
    {   if self.topic.is_empty()
        {   return Err(crate::error::Error::MissingTopic);
        }
        Ok(GenerationRequest
        {   topic: self.topic
          , platform: self.platform
          , tone: self.tone
          , length: self.length
          , audience: self.audience
          , include_cta: self.include_cta
          , include_hashtags: self.include_hashtags
          , keywords: self.keywords
        })
    }
}

/// Raw form submission as delivered by a UI layer.
/// Missing selections fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission
{   pub topic: String
  , pub platform: Platform
  , pub tone: Tone
  , pub length: Length
  , pub audience: Audience
  , pub include_cta: bool
  , pub include_hashtags: bool
  , pub keywords: Option<String>
}

impl FormSubmission
{   pub fn into_request(self)
      -> Result<GenerationRequest, crate::error::Error>
    {   let mut builder = GenerationRequest::builder(self.topic)
          .platform(self.platform)
          .tone(self.tone)
          .length(self.length)
          .audience(self.audience)
          .include_cta(self.include_cta)
          .include_hashtags(self.include_hashtags);
        if let Some(keywords) = self.keywords
        {   builder = builder.keywords(keywords);
        }
        builder.build()
    }
}

// ===== Credential =====

/// API secret for the completion service. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential
{   pub fn new(secret: impl Into<String>) -> Self
    {   Credential(secret.into())
    }

    pub fn is_empty(&self) -> bool
    {   self.0.is_empty()
    }

    pub fn expose(&self) -> &str
    {   &self.0
    }
}

impl From<String> for Credential
{   fn from(secret: String) -> Self
    {   Credential(secret)
    }
}

impl From<&str> for Credential
{   fn from(secret: &str) -> Self
    {   Credential(secret.to_string())
    }
}

impl fmt::Debug for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("***")
    }
}

// ===== GenerationResult =====

/// Failure classes surfaced to the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind
{   MissingCredential
  , MissingTopic
  , ApiError
}

impl From<&crate::error::Error> for FailureKind
{   fn from(error: &crate::error::Error) -> Self
    {   match error
        {   crate::error::Error::MissingCredential => {
              FailureKind::MissingCredential
            }
          , crate::error::Error::MissingTopic => {
              FailureKind::MissingTopic
            }
          , _ => FailureKind::ApiError
        }
    }
}

/// Outcome of one generation
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationResult
{   Success(String)
  , Failure
    {   kind: FailureKind
      , message: String
    }
}

impl GenerationResult
{   pub fn is_success(&self) -> bool
    {   matches!(self, GenerationResult::Success(_))
    }

    pub fn text(&self) -> Option<&str>
    {   match self
        {   GenerationResult::Success(text) => Some(text)
          , GenerationResult::Failure { .. } => None
        }
    }

    /// Text for the output surface: the completion under a
    /// "Result" heading, or a message per failure kind
    pub fn render(&self) -> String
    {   match self
        {   GenerationResult::Success(text) => {
              format!("## Result\n\n{}", text)
            }
          , GenerationResult::Failure {
              kind: FailureKind::MissingCredential, ..
            } => {
              "Please enter your Groq API key before generating content."
                .to_string()
            }
          , GenerationResult::Failure {
              kind: FailureKind::MissingTopic, ..
            } => {
              "The 'Topic' field is required.".to_string()
            }
          , GenerationResult::Failure {
              kind: FailureKind::ApiError, message
            } => {
              format!("Authentication or API error: {}", message)
            }
        }
    }
}

impl From<crate::error::Error> for GenerationResult
{   fn from(error: crate::error::Error) -> Self
    {   GenerationResult::Failure
        {   kind: FailureKind::from(&error)
          , message: error.detail()
        }
    }
}

impl From<Result<String, crate::error::Error>> for GenerationResult
{   fn from(result: Result<String, crate::error::Error>) -> Self
    {   match result
        {   Ok(text) => GenerationResult::Success(text)
          , Err(e) => GenerationResult::from(e)
        }
    }
}
