//! API Lambda handler and request processing

pub mod generate;
pub mod greetings;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::handler;
