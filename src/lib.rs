pub mod error;
pub mod config;
pub mod request;
pub mod prompt;
pub mod retry;
pub mod providers;
pub mod client;

pub use client::{GenerationClient, GeneratorBackend};
pub use config::GeneratorConfig;
pub use error::Error;
pub use request::{
  Audience, Credential, FailureKind, FormSubmission, GenerationRequest,
  GenerationResult, Length, Platform, Tone,
};

/*

copygen turns a handful of content parameters (topic, platform, tone,
length, audience, CTA / hashtag switches, SEO keywords) into one
instruction, sends it to Groq's chat-completions endpoint and hands back
the generated copy or a classified failure.

  request::GenerationRequest --prompt::build--> instruction
  instruction + Credential --client::GenerationClient--> GenerationResult

GeneratorBackend wraps a client in a task so a UI can fire submissions
without blocking; submissions are answered in order, one at a time.

*/

/// COPYGEN BACKEND INTERFACE:

// ===== Generate =====

pub type GenerateReply = GenerationResult;
pub type GenerateReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateReply>;

pub struct GenerateArgs
{   pub credential: Credential
  , pub request: GenerationRequest
  , pub reply: GenerateReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== GeneratorHand (sender side) =====

pub struct GeneratorHand
{   pub generate_tx
      : tokio::sync::mpsc::UnboundedSender<GenerateArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== GeneratorFoot (receiver side) =====

pub struct GeneratorFoot
{   pub generate_rx
      : tokio::sync::mpsc::UnboundedReceiver<GenerateArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}
