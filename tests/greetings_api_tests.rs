mod common;

use common::{StubRemoteStore, greeting};
use eid_greetings::api::greetings::{handle_delete, handle_list, handle_save};
use eid_greetings::storage::{GreetingRepository, LocalMirror};
use serde_json::Value;

fn mirror(dir: &tempfile::TempDir) -> LocalMirror {
    LocalMirror::new(dir.path().join("greetings.json"))
}

fn body_json(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().expect("stringified body")).unwrap()
}

#[tokio::test]
async fn test_list_combines_remote_and_local_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let local = mirror(&dir);
    local.save(greeting("local-1", "offline card"));

    let remote = StubRemoteStore::online();
    remote.records.lock().unwrap().push(greeting("100", "remote card"));

    let repo = GreetingRepository::new(remote, mirror(&dir));
    let response = handle_list(&repo).await;

    assert_eq!(response["statusCode"], 200);
    let body = body_json(&response);
    let greetings = body["greetings"].as_array().unwrap();
    assert_eq!(greetings.len(), 2);

    assert_eq!(greetings[0]["id"], "100");
    assert_eq!(greetings[0]["isLocal"], false);
    assert_eq!(greetings[1]["id"], "local-1");
    assert_eq!(greetings[1]["isLocal"], true);
}

#[tokio::test]
async fn test_save_remote_returns_201_with_server_id() {
    let dir = tempfile::tempdir().unwrap();
    let repo = GreetingRepository::new(StubRemoteStore::online(), mirror(&dir));

    let body = serde_json::to_string(&greeting("", "hello")).unwrap();
    let response = handle_save(&repo, &body).await;

    assert_eq!(response["statusCode"], 201);
    let body = body_json(&response);
    assert_eq!(body["isLocal"], false);
    assert_eq!(body["greeting"]["id"], "100");
    assert_eq!(body["greeting"]["senderName"], "Ali");
}

#[tokio::test]
async fn test_save_offline_returns_200_marked_local() {
    let dir = tempfile::tempdir().unwrap();
    let repo = GreetingRepository::new(StubRemoteStore::offline(), mirror(&dir));

    let body = serde_json::to_string(&greeting("", "hello")).unwrap();
    let response = handle_save(&repo, &body).await;

    assert_eq!(response["statusCode"], 200);
    let body = body_json(&response);
    assert_eq!(body["isLocal"], true);
    assert!(!body["greeting"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_rejects_malformed_body() {
    let dir = tempfile::tempdir().unwrap();
    let repo = GreetingRepository::new(StubRemoteStore::online(), mirror(&dir));

    let response = handle_save(&repo, "not json").await;
    assert_eq!(response["statusCode"], 400);
}

#[tokio::test]
async fn test_delete_reports_unconfirmed_remote_delete() {
    let dir = tempfile::tempdir().unwrap();
    let repo = GreetingRepository::new(StubRemoteStore::offline(), mirror(&dir));

    let response = handle_delete(&repo, "42", false).await;
    assert_eq!(response["statusCode"], 200);
    assert_eq!(body_json(&response)["deleted"], false);
}
