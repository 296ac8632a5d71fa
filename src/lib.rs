//! Eid Greetings - a backend for generating and persisting Eid greeting cards.
//!
//! This crate implements the service side of the greeting-card product:
//! 1. An API Lambda that routes greeting CRUD and message-generation requests
//! 2. A dual-store persistence layer (hosted Postgres with a local JSON mirror fallback)
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Supabase (PostgREST) as the remote greeting store
//! - A process-local JSON file as the offline/fallback mirror
//! - OpenRouter chat completions for message generation
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use eid_greetings::core::config::AppConfig;
//! use eid_greetings::core::models::Greeting;
//! use eid_greetings::storage::{GreetingRepository, LocalMirror, SupabaseStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     eid_greetings::setup_logging();
//!
//!     // Create a dummy AppConfig for the example
//!     let config = AppConfig {
//!         supabase_url: "https://example.supabase.co".to_string(),
//!         supabase_anon_key: "dummy_anon_key".to_string(),
//!         openrouter_api_key: "dummy_api_key".to_string(),
//!         openrouter_model: None,
//!         greetings_table: None,
//!         local_mirror_path: None,
//!     };
//!
//!     // Wire the repository from explicitly constructed stores
//!     let remote = SupabaseStore::new(&config)?;
//!     let mirror = LocalMirror::from_config(&config);
//!     let repository = GreetingRepository::new(remote, mirror);
//!
//!     let outcome = repository
//!         .save_greeting(Greeting {
//!             id: String::new(),
//!             sender_name: "Ali".to_string(),
//!             recipient_name: "Sara".to_string(),
//!             message: "Eid Mubarak!".to_string(),
//!             frame_style: None,
//!             custom_colors: None,
//!             card_size: None,
//!             created_at: "2024-06-16T00:00:00Z".to_string(),
//!         })
//!         .await;
//!     println!("saved locally only: {}", outcome.is_local());
//!
//!     for greeting in repository.list_greetings().await {
//!         println!(
//!             "{} -> {}: {}",
//!             greeting.sender_name, greeting.recipient_name, greeting.message
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod storage;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// eid_greetings::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
