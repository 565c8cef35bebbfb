use crate::core::error::ProbeError;
use crate::display;
use crate::gemini::ContentGenerator;
use crate::gemini::types::GenerateContentRequest;
use serde_json::Value;
use std::io::{self, Write};
use tracing::{info, warn};

pub mod poi;

pub const DEFAULT_PROMPT: &str = "Hello, please respond with 'API is working'";

/// Send one prompt and print what came back.
///
/// The status line is written as soon as the response arrives, so a body that
/// fails to decode still leaves the status on screen above the error. Nothing
/// here inspects the status code.
pub async fn run_ping<G, W>(generator: &G, prompt: &str, out: &mut W) -> io::Result<()>
where
    G: ContentGenerator + ?Sized,
    W: Write,
{
    let request = GenerateContentRequest::from_prompt(prompt);

    let raw = match generator.generate_content(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = ?err, "probe request failed");
            return display::write_error(out, &err);
        }
    };
    info!(status = raw.status, "probe answered");
    display::write_status(out, raw.status)?;

    match reformat_body(&raw.body) {
        Ok(pretty) => display::write_response(out, &pretty),
        Err(err) => {
            warn!(error = ?err, "probe response was not JSON");
            display::write_error(out, &err)
        }
    }
}

fn reformat_body(body: &str) -> Result<String, ProbeError> {
    let value: Value = serde_json::from_str(body)?;
    display::pretty_json(&value)
}
