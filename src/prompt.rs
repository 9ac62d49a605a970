//! Instruction text for a generation request.
//!
//! The line order below is part of the contract with the model; keep it.

use crate::request::GenerationRequest;

pub const CTA_INCLUDE: &str = "- Include a clear Call to Action.";
pub const CTA_EXCLUDE: &str = "- Do not include a Call to Action.";
pub const HASHTAGS_INCLUDE: &str = "- Include relevant hashtags.";
pub const HASHTAGS_EXCLUDE: &str = "- Do not include hashtags.";

/// Render the instruction sent as the user message
pub fn build(request: &GenerationRequest) -> String
{   let mut lines: Vec<String> = vec![
      format!(
        "Write an SEO-optimized text on the topic '{}'.",
        request.topic()
      )
    , "Return only the final text in your response and don't put it inside quotes."
        .to_string()
    , format!("- Platform: {}.", request.platform())
    , format!("- Tone: {}.", request.tone())
    , format!("- Target audience: {}.", request.audience())
    , format!("- Length: {}.", request.length())
    ];

    lines.push(
      if request.include_cta() { CTA_INCLUDE } else { CTA_EXCLUDE }
        .to_string()
    );
    lines.push(
      if request.include_hashtags() { HASHTAGS_INCLUDE } else { HASHTAGS_EXCLUDE }
        .to_string()
    );

    if let Some(keywords) = request.keywords()
    {   lines.push(format!("- Keywords: {}", keywords));
    }

    lines.join("\n")
}
