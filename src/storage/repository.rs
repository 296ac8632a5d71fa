//! Greeting repository: single point of access over the two physical stores.
//!
//! Every operation tries the remote store first and falls back to the local
//! mirror on failure. Remote failures are logged, never surfaced to the
//! caller; a mutation that cannot reach the remote store is replayed against
//! the mirror so it is not silently lost.

use tracing::{error, info};

use crate::core::models::{Greeting, SaveOutcome};
use crate::storage::{LocalMirror, RemoteGreetingStore};

pub struct GreetingRepository<R> {
    remote: R,
    local: LocalMirror,
}

impl<R: RemoteGreetingStore> GreetingRepository<R> {
    pub fn new(remote: R, local: LocalMirror) -> Self {
        Self { remote, local }
    }

    /// Lists greetings from the remote store, newest first.
    ///
    /// On any remote failure this returns the local mirror's list instead.
    /// The two lists are not merged here; callers that want the combined
    /// view union this with [`local_greetings`](Self::local_greetings) and
    /// prefer the remote copy on id collision.
    pub async fn list_greetings(&self) -> Vec<Greeting> {
        match self.remote.list().await {
            Ok(greetings) => greetings,
            Err(e) => {
                error!("Error fetching greetings: {}", e);
                self.local.list()
            }
        }
    }

    /// The local mirror's list, newest first.
    #[must_use]
    pub fn local_greetings(&self) -> Vec<Greeting> {
        self.local.list()
    }

    /// Saves a greeting, remote first.
    ///
    /// Any caller-supplied id is ignored on the remote path; the store
    /// assigns one. If the remote insert fails the record is written to the
    /// local mirror (getting a client-generated id if it has none) and the
    /// outcome says so, so the caller can route a later delete correctly.
    pub async fn save_greeting(&self, greeting: Greeting) -> SaveOutcome {
        match self.remote.insert(&greeting).await {
            Ok(stored) => SaveOutcome::Remote(stored),
            Err(e) => {
                error!("Error saving greeting: {}", e);
                let stored = self.local.save(greeting);
                info!(id = %stored.id, "Greeting saved to local mirror");
                SaveOutcome::Local(stored)
            }
        }
    }

    /// Deletes a greeting from the store the caller believes holds it.
    ///
    /// `is_local` deletes are unconditional mirror deletes and never touch
    /// the network. Remote deletes that fail also remove the id from the
    /// mirror, then return `false` because the remote deletion could not be
    /// confirmed.
    pub async fn delete_greeting(&self, id: &str, is_local: bool) -> bool {
        if is_local {
            return self.local.delete(id);
        }

        match self.remote.delete(id).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error deleting greeting: {}", e);
                self.local.delete(id);
                false
            }
        }
    }
}
