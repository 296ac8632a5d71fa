//! Greeting persistence layer.
//!
//! Two physical stores sit behind one repository:
//! - [`SupabaseStore`]: the hosted Postgres table, source of truth when reachable
//! - [`LocalMirror`]: a process-local JSON file used as the offline/fallback cache
//!
//! The stores are never synchronized with each other. A greeting written to
//! the mirror while the remote store is down stays local; no reconciliation
//! pass migrates it once connectivity returns.

pub mod local;
pub mod repository;
pub mod supabase;

pub use local::LocalMirror;
pub use repository::GreetingRepository;
pub use supabase::SupabaseStore;

use async_trait::async_trait;

use crate::core::models::Greeting;
use crate::errors::GreetingError;

/// Remote store operations the repository depends on.
///
/// The repository takes this as an injected dependency so callers own the
/// client lifecycle and tests can stand in a failing remote.
#[async_trait]
pub trait RemoteGreetingStore: Send + Sync {
    /// Lists all greetings, newest first by `created_at`.
    async fn list(&self) -> Result<Vec<Greeting>, GreetingError>;

    /// Inserts a greeting and returns the stored record with its
    /// server-assigned id. Any id on the input is ignored.
    async fn insert(&self, greeting: &Greeting) -> Result<Greeting, GreetingError>;

    /// Deletes the greeting with the given id. Deleting an absent id is not
    /// an error.
    async fn delete(&self, id: &str) -> Result<(), GreetingError>;
}
