//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Request validation (method, path, body)
//! - Greeting CRUD (delegated to the `greetings` module)
//! - Message generation (delegated to the `generate` module)

use super::{generate, greetings, helpers, parsing};
use crate::ai::GenerationClient;
use crate::core::config::AppConfig;
use crate::storage::{GreetingRepository, LocalMirror, SupabaseStore};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Routes requests to specialized handlers based on method and path.
///
/// # Errors
///
/// Returns an error response payload if the request is malformed; otherwise
/// returns a JSON body with the route's status code.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(
    event: LambdaEvent<serde_json::Value>,
) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // ========================================================================
    // Extract method and path
    // ========================================================================

    let Some(path) = parsing::request_path(&event.payload).map(ToString::to_string) else {
        error!("Request missing path");
        return Ok(helpers::err_response(400, "Missing path"));
    };

    let Some(method) = parsing::request_method(&event.payload).map(str::to_ascii_uppercase)
    else {
        error!("Request missing HTTP method");
        return Ok(helpers::err_response(400, "Missing HTTP method"));
    };

    info!(method = %method, path = %path, "API Lambda received request");

    // ========================================================================
    // Message generation
    // ========================================================================

    if path.ends_with("/generate-message") && method == "POST" {
        let body = match extract_body(&event.payload) {
            Ok(b) => b,
            Err(response) => return Ok(response),
        };
        let client = GenerationClient::from_config(&config);
        return Ok(generate::handle_generate(&client, body).await);
    }

    // ========================================================================
    // Greeting CRUD
    // ========================================================================

    let is_greetings_route =
        path.ends_with("/greetings") || parsing::path_suffix(&path, "/greetings").is_some();
    if !is_greetings_route {
        return Ok(helpers::err_response(404, "Not found"));
    }

    let remote = match SupabaseStore::new(&config) {
        Ok(remote) => remote,
        Err(e) => {
            error!("Failed to initialize remote store: {}", e);
            return Ok(helpers::err_response(500, "Service initialization failed"));
        }
    };
    let repository = GreetingRepository::new(remote, LocalMirror::from_config(&config));

    if let Some(id) = parsing::path_suffix(&path, "/greetings") {
        if method == "DELETE" {
            let is_local = parsing::query_param(&event.payload, "local")
                .is_some_and(|v| v == "true" || v == "1");
            return Ok(greetings::handle_delete(&repository, id, is_local).await);
        }
        return Ok(helpers::err_response(404, "Not found"));
    }

    match method.as_str() {
        "GET" => Ok(greetings::handle_list(&repository).await),
        "POST" => {
            let body = match extract_body(&event.payload) {
                Ok(b) => b,
                Err(response) => return Ok(response),
            };
            Ok(greetings::handle_save(&repository, body).await)
        }
        _ => Ok(helpers::err_response(404, "Not found")),
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}
