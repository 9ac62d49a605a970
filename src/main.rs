//! Reads one form submission as JSON on stdin, generates the copy and
//! prints it. The API key comes from `GROQ_API_KEY`; an optional JSON
//! config file is read from `COPYGEN_CONFIG`.

use std::io::Read;
use log::{debug, error};

use copygen::{
  Credential, Error, FormSubmission, GenerationClient, GenerationResult,
  GeneratorBackend, GeneratorConfig,
};

fn load_config() -> Result<GeneratorConfig, Error>
{   match std::env::var("COPYGEN_CONFIG")
    {   Ok(path) => GeneratorConfig::from_file(path)
      , Err(_) => Ok(GeneratorConfig::default())
    }
}

fn read_form() -> Result<FormSubmission, Error>
{   let mut input = String::new();
    std::io::stdin()
      .read_to_string(&mut input)
      .map_err(|e| Error::Other(e.to_string()))?;
    serde_json::from_str(&input)
      .map_err(|e| Error::Other(format!("invalid form input: {}", e)))
}

async fn run() -> Result<GenerationResult, Error>
{   let config = load_config()?;
    let form = read_form()?;
    let credential = Credential::new(
      std::env::var("GROQ_API_KEY").unwrap_or_default()
    );

    if credential.is_empty()
    {   return Ok(GenerationResult::from(Error::MissingCredential));
    }

    let request = match form.into_request()
    {   Ok(request) => request
      , Err(e) => return Ok(GenerationResult::from(e))
    };

    let backend = GeneratorBackend::new(
      GenerationClient::from_config(&config)?
    );
    let result = backend.generate_and_wait(credential, request).await;
    if let Err(e) = backend.shutdown().await
    {   debug!("Backend shutdown: {}", e);
    }
    Ok(result)
}

#[tokio::main]
async fn main()
{   env_logger::init();

    match run().await
    {   Ok(result) => {
          println!("{}", result.render());
          if !result.is_success()
          {   std::process::exit(1);
          }
        }
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e);
          std::process::exit(2);
        }
    }
}
