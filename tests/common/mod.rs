//! Shared test doubles: an in-memory remote store with switchable failures.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;

use eid_greetings::core::models::Greeting;
use eid_greetings::errors::GreetingError;
use eid_greetings::storage::RemoteGreetingStore;

/// In-memory stand-in for the hosted store. `fail_*` flags simulate the
/// service being unreachable for individual operations.
#[derive(Default)]
pub struct StubRemoteStore {
    pub records: Mutex<Vec<Greeting>>,
    pub fail_list: bool,
    pub fail_insert: bool,
    pub fail_delete: bool,
    pub list_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    next_id: AtomicU64,
}

impl StubRemoteStore {
    pub fn online() -> Self {
        Self {
            next_id: AtomicU64::new(100),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            fail_list: true,
            fail_insert: true,
            fail_delete: true,
            ..Self::online()
        }
    }

    fn unreachable() -> GreetingError {
        GreetingError::RemoteStoreError("simulated outage".to_string())
    }
}

#[async_trait]
impl RemoteGreetingStore for StubRemoteStore {
    async fn list(&self) -> Result<Vec<Greeting>, GreetingError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(Self::unreachable());
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn insert(&self, greeting: &Greeting) -> Result<Greeting, GreetingError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert {
            return Err(Self::unreachable());
        }

        let mut stored = greeting.clone();
        stored.id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.records.lock().unwrap().insert(0, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), GreetingError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(Self::unreachable());
        }
        self.records.lock().unwrap().retain(|g| g.id != id);
        Ok(())
    }
}

/// A greeting with the given id; empty id means "let the store assign one".
pub fn greeting(id: &str, message: &str) -> Greeting {
    Greeting {
        id: id.to_string(),
        sender_name: "Ali".to_string(),
        recipient_name: "Sara".to_string(),
        message: message.to_string(),
        frame_style: None,
        custom_colors: None,
        card_size: None,
        created_at: "2024-06-16T00:00:00Z".to_string(),
    }
}
