//! Supabase (PostgREST) client for the remote greeting table.
//!
//! Field names map one-to-one between the API's camelCase and the table's
//! snake_case columns. That mapping must stay exact for compatibility with
//! rows written by other deployments.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::models::{CardSize, CustomColors, Greeting};
use crate::errors::GreetingError;
use crate::storage::RemoteGreetingStore;

const DEFAULT_TABLE: &str = "greetings";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One row of the `greetings` table, in persisted column names.
#[derive(Debug, Deserialize)]
struct GreetingRow {
    id: String,
    sender_name: String,
    recipient_name: String,
    message: String,
    #[serde(default)]
    frame_style: Option<String>,
    #[serde(default)]
    custom_colors: Option<CustomColors>,
    #[serde(default)]
    card_size: Option<CardSize>,
    created_at: String,
}

impl From<GreetingRow> for Greeting {
    fn from(row: GreetingRow) -> Self {
        Greeting {
            id: row.id,
            sender_name: row.sender_name,
            recipient_name: row.recipient_name,
            message: row.message,
            frame_style: row.frame_style,
            custom_colors: row.custom_colors,
            card_size: row.card_size,
            created_at: row.created_at,
        }
    }
}

/// Insert payload. Carries no `id` so the store assigns one.
#[derive(Debug, Serialize)]
struct InsertGreetingRow<'a> {
    sender_name: &'a str,
    recipient_name: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame_style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_colors: Option<&'a CustomColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card_size: Option<CardSize>,
    created_at: &'a str,
}

impl<'a> From<&'a Greeting> for InsertGreetingRow<'a> {
    fn from(greeting: &'a Greeting) -> Self {
        InsertGreetingRow {
            sender_name: &greeting.sender_name,
            recipient_name: &greeting.recipient_name,
            message: &greeting.message,
            frame_style: greeting.frame_style.as_deref(),
            custom_colors: greeting.custom_colors.as_ref(),
            card_size: greeting.card_size,
            created_at: &greeting.created_at,
        }
    }
}

/// REST client for the hosted greeting table.
pub struct SupabaseStore {
    http: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseStore {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, GreetingError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                GreetingError::HttpError(format!("Failed to build Supabase HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            table: config
                .greetings_table
                .clone()
                .unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }
}

#[async_trait]
impl RemoteGreetingStore for SupabaseStore {
    async fn list(&self) -> Result<Vec<Greeting>, GreetingError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        debug!(url = %url, "Listing greetings from remote store");

        let response = self
            .authed(self.http.get(&url))
            .send()
            .await
            .map_err(|e| GreetingError::HttpError(format!("Supabase list request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(GreetingError::RemoteStoreError(format!(
                "Supabase list error (status {status}): {error_text}"
            )));
        }

        let rows: Vec<GreetingRow> = response.json().await.map_err(|e| {
            GreetingError::RemoteStoreError(format!("Failed to parse Supabase list response: {e}"))
        })?;

        Ok(rows.into_iter().map(Greeting::from).collect())
    }

    async fn insert(&self, greeting: &Greeting) -> Result<Greeting, GreetingError> {
        let row = InsertGreetingRow::from(greeting);

        let response = self
            .authed(self.http.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| {
                GreetingError::HttpError(format!("Supabase insert request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(GreetingError::RemoteStoreError(format!(
                "Supabase insert error (status {status}): {error_text}"
            )));
        }

        // PostgREST returns the representation as a single-element array
        let mut rows: Vec<GreetingRow> = response.json().await.map_err(|e| {
            GreetingError::RemoteStoreError(format!(
                "Failed to parse Supabase insert response: {e}"
            ))
        })?;

        match rows.pop() {
            Some(row) => Ok(Greeting::from(row)),
            None => Err(GreetingError::RemoteStoreError(
                "Supabase insert returned no representation".to_string(),
            )),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), GreetingError> {
        let url = format!("{}?id=eq.{}", self.table_url(), urlencoding::encode(id));

        let response = self.authed(self.http.delete(&url)).send().await.map_err(|e| {
            GreetingError::HttpError(format!("Supabase delete request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(GreetingError::RemoteStoreError(format!(
                "Supabase delete error (status {status}): {error_text}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            supabase_url: "https://example.supabase.co/".to_string(),
            supabase_anon_key: "anon".to_string(),
            openrouter_api_key: "key".to_string(),
            openrouter_model: None,
            greetings_table: None,
            local_mirror_path: None,
        }
    }

    #[test]
    fn test_table_url_defaults_and_trims_trailing_slash() {
        let store = SupabaseStore::new(&config()).unwrap();
        assert_eq!(
            store.table_url(),
            "https://example.supabase.co/rest/v1/greetings"
        );
    }

    #[test]
    fn test_table_override_from_config() {
        let mut cfg = config();
        cfg.greetings_table = Some("greetings_staging".to_string());
        let store = SupabaseStore::new(&cfg).unwrap();
        assert_eq!(
            store.table_url(),
            "https://example.supabase.co/rest/v1/greetings_staging"
        );
    }

    #[test]
    fn test_insert_row_uses_snake_case_and_omits_id() {
        let greeting = Greeting {
            id: "should-not-appear".to_string(),
            sender_name: "Ali".to_string(),
            recipient_name: "Sara".to_string(),
            message: "Eid Mubarak!".to_string(),
            frame_style: Some("ornate".to_string()),
            custom_colors: None,
            card_size: Some(CardSize::Medium),
            created_at: "2024-06-16T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(InsertGreetingRow::from(&greeting)).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["sender_name"], "Ali");
        assert_eq!(value["recipient_name"], "Sara");
        assert_eq!(value["frame_style"], "ornate");
        assert_eq!(value["card_size"], "medium");
        assert_eq!(value["created_at"], "2024-06-16T00:00:00Z");
    }

    #[test]
    fn test_row_maps_to_greeting_field_for_field() {
        let row: GreetingRow = serde_json::from_value(serde_json::json!({
            "id": "42",
            "sender_name": "Ali",
            "recipient_name": "Sara",
            "message": "Eid Mubarak!",
            "frame_style": null,
            "custom_colors": {
                "primary": "#059669",
                "secondary": "#0d9488",
                "accent": "#f59e0b",
                "background": "#ecfdf5"
            },
            "card_size": "large",
            "created_at": "2024-06-16T00:00:00Z"
        }))
        .unwrap();

        let greeting = Greeting::from(row);
        assert_eq!(greeting.id, "42");
        assert_eq!(greeting.card_size, Some(CardSize::Large));
        assert_eq!(
            greeting.custom_colors.as_ref().unwrap().primary,
            "#059669"
        );
    }
}
