use tokio::sync::mpsc;
use log::{debug, trace, error, info};

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::providers::{ChatMessage, ChatRequest, GroqTransport, Transport};
use crate::request::{Credential, FailureKind, GenerationRequest, GenerationResult};
use crate::GeneratorFoot;

/// Completion model used for every call
pub const MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature used for every call
pub const TEMPERATURE: f32 = 0.7;

/// System persona sent ahead of every instruction
pub const SYSTEM_PROMPT: &str
  = "You are a digital marketing expert specialized in SEO and persuasive copywriting.";

/// Turns an instruction into generated copy.
/// Stateless between calls; the credential is supplied per call.
pub struct GenerationClient<T: Transport>
{   transport: T
}

impl GenerationClient<GroqTransport>
{   /// Client backed by Groq over HTTPS
    pub fn from_config(config: &GeneratorConfig)
      -> Result<Self, Error>
    {   Ok(GenerationClient::new(GroqTransport::new(config)?))
    }
}

impl<T: Transport> GenerationClient<T>
{   pub fn new(transport: T) -> Self
    {   debug!("Creating GenerationClient over {}", transport.name());
        GenerationClient
        {   transport
        }
    }

    pub fn transport(&self) -> &T
    {   &self.transport
    }

    /// The two-message exchange for one instruction
    pub fn chat_request(instruction: &str) -> ChatRequest
    {   ChatRequest
        {   model: MODEL.to_string()
          , messages: vec![
              ChatMessage::system(SYSTEM_PROMPT)
            , ChatMessage::user(instruction)
            ]
          , temperature: TEMPERATURE
          , stream: false
        }
    }

    /// Send one instruction. Never fails outright: every error is
    /// folded into `GenerationResult::Failure`.
    pub async fn generate(
      &self
    , credential: &Credential
    , instruction: &str
    ) -> GenerationResult
    {   if credential.is_empty()
        {   debug!("Refusing to generate without a credential");
            return GenerationResult::from(Error::MissingCredential);
        }

        let request = Self::chat_request(instruction);
        trace!("Instruction: {}", instruction);

        match self.transport.complete(credential, &request).await
        {   Ok(text) => {
              info!(
                "Generated {} bytes via {}",
                text.len(),
                self.transport.name()
              );
              GenerationResult::Success(text)
            }
          , Err(e) => {
              error!("Generation failed: {}", e);
              GenerationResult::Failure
              {   kind: FailureKind::ApiError
                , message: e.detail()
              }
            }
        }
    }

    /// Build the instruction for `request` and send it
    pub async fn generate_from(
      &self
    , credential: &Credential
    , request: &GenerationRequest
    ) -> GenerationResult
    {   let instruction = crate::prompt::build(request);
        self.generate(credential, &instruction).await
    }
}

/// Owns a generation client on a background task.
/// Generations are served one at a time in submission order, so a
/// second trigger while one is in flight waits in the queue.
pub struct GeneratorBackend
{   hand: crate::GeneratorHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl GeneratorBackend
{   /// Spawn the backend task. Must be called inside a tokio runtime.
    pub fn new<T>(client: GenerationClient<T>) -> Self
    where T: Transport + 'static
    {   debug!("Creating GeneratorBackend with task ownership");

        let (generate_tx, generate_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::GeneratorHand
        {   generate_tx
          , kill_process_tx
        };

        let foot = GeneratorFoot
        {   generate_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, client).await
        });

        GeneratorBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue a generation - returns immediately
    pub async fn generate(
      &self
    , credential: Credential
    , request: GenerationRequest
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GenerateReply>,
        Error
      >
    {   debug!("generate queuing command for topic: {}", request.topic());
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GenerateArgs
        {   credential
          , request
          , reply: reply_tx
        };

        self.hand.generate_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            Error::BackendDisconnected
          })?;

        Ok(reply_rx)
    }

    /// Queue a generation and wait for its result
    pub async fn generate_and_wait(
      &self
    , credential: Credential
    , request: GenerationRequest
    ) -> GenerationResult
    {   let mut reply_rx = match self.generate(credential, request).await
        {   Ok(rx) => rx
          , Err(e) => return GenerationResult::from(e)
        };

        reply_rx.recv().await
          .unwrap_or_else(|| {
            error!("Backend dropped the reply");
            GenerationResult::from(Error::BackendDisconnected)
          })
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), Error>
    {   debug!("Shutting down GeneratorBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            Error::BackendDisconnected
          })?;

        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown unconfirmed");
            Err(Error::BackendDisconnected)
        }
    }
}

/// Main backend event loop
///
/// Each generation is awaited inside its select arm, which is what
/// serializes overlapping submissions.
async fn run_backend_loop<T: Transport>(
  foot: GeneratorFoot
, client: GenerationClient<T>
)
{   debug!("Starting GeneratorBackend event loop");
    let GeneratorFoot
    {   mut generate_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = generate_rx.recv() => {
          debug!("Received Generate for topic: {}", cmd.request.topic());
          let result = client
            .generate_from(&cmd.credential, &cmd.request)
            .await;
          let _ = cmd.reply.send(result);
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("GeneratorBackend shutting down");
          break;
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}
