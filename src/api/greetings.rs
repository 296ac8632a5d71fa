//! Greeting CRUD handlers.
//!
//! The repository hands back remote and local lists separately; merging is
//! this layer's job. The combined view unions both, de-duplicated by id
//! with the remote copy taking precedence, and tags every entry with the
//! `isLocal` flag clients echo back when deleting.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use super::helpers;
use crate::core::models::Greeting;
use crate::storage::{GreetingRepository, RemoteGreetingStore};

/// One entry of the combined view: the record plus its delete-routing flag.
#[derive(Debug, Serialize)]
pub struct GreetingView {
    #[serde(flatten)]
    pub greeting: Greeting,
    #[serde(rename = "isLocal")]
    pub is_local: bool,
}

/// Unions the primary (remote-or-fallback) list with local-only records.
///
/// Primary entries keep their order and win id collisions; local-only
/// records follow. `is_local` marks membership in the local mirror, which
/// is what routes a later delete.
#[must_use]
pub fn combined_view(primary: &[Greeting], local: &[Greeting]) -> Vec<GreetingView> {
    let mut view: Vec<GreetingView> = primary
        .iter()
        .map(|g| GreetingView {
            greeting: g.clone(),
            is_local: local.iter().any(|lg| lg.id == g.id),
        })
        .collect();

    view.extend(
        local
            .iter()
            .filter(|lg| !primary.iter().any(|g| g.id == lg.id))
            .map(|lg| GreetingView {
                greeting: lg.clone(),
                is_local: true,
            }),
    );

    view
}

/// `GET /api/greetings`: the combined view of both stores.
pub async fn handle_list<R: RemoteGreetingStore>(repo: &GreetingRepository<R>) -> Value {
    let primary = repo.list_greetings().await;
    let local = repo.local_greetings();
    let view = combined_view(&primary, &local);

    helpers::ok_json(200, &json!({ "greetings": view }))
}

/// `POST /api/greetings`: save a greeting, remote first.
///
/// 201 when the record landed remotely, 200 with `isLocal: true` when the
/// remote write failed and the record went to the mirror instead.
pub async fn handle_save<R: RemoteGreetingStore>(
    repo: &GreetingRepository<R>,
    body: &str,
) -> Value {
    let greeting: Greeting = match serde_json::from_str(body) {
        Ok(greeting) => greeting,
        Err(e) => {
            return helpers::err_response(400, &format!("Invalid greeting payload: {e}"));
        }
    };

    let outcome = repo.save_greeting(greeting).await;
    let status = if outcome.is_local() { 200 } else { 201 };
    info!(
        id = %outcome.greeting().id,
        is_local = outcome.is_local(),
        "Greeting saved"
    );

    helpers::ok_json(
        status,
        &json!({
            "greeting": outcome.greeting(),
            "isLocal": outcome.is_local()
        }),
    )
}

/// `DELETE /api/greetings/{id}?local=bool`: delete from the store the
/// client says holds the record.
pub async fn handle_delete<R: RemoteGreetingStore>(
    repo: &GreetingRepository<R>,
    id: &str,
    is_local: bool,
) -> Value {
    let deleted = repo.delete_greeting(id, is_local).await;
    helpers::ok_json(200, &json!({ "deleted": deleted }))
}
