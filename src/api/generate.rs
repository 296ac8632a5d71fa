//! Message-generation handler.

use serde_json::Value;
use tracing::error;

use super::helpers;
use crate::ai::{GenerationClient, build_prompt};
use crate::core::models::GenerateRequest;

/// `POST /api/generate-message`: draft a greeting for the given recipient,
/// relationship, tone, and language.
///
/// Generation failure is terminal for the action: a generic error goes back
/// to the client, with no fallback generation and no retry.
pub async fn handle_generate(client: &GenerationClient, body: &str) -> Value {
    let request: GenerateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            return helpers::err_response(400, &format!("Invalid generation request: {e}"));
        }
    };

    let prompt = build_prompt(&request);
    match client.generate_message(prompt).await {
        Ok(generated) => match serde_json::to_value(&generated) {
            Ok(body) => helpers::ok_json(200, &body),
            Err(e) => {
                error!("Error encoding generated message: {}", e);
                helpers::err_response(500, "Failed to generate message")
            }
        },
        Err(e) => {
            error!("Error generating message: {}", e);
            helpers::err_response(502, "Failed to generate message")
        }
    }
}
