use serde::{Deserialize, Serialize};

/// Card size options exposed by the card editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

/// Custom color set chosen in the card editor. Opaque to the persistence
/// layer; stored and returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

/// One persisted greeting card.
///
/// `id` is assigned by the remote store on insert. A greeting saved only to
/// the local mirror (remote unavailable) gets a client-generated id so it
/// stays addressable for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    #[serde(default)]
    pub id: String,
    pub sender_name: String,
    pub recipient_name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_colors: Option<CustomColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_size: Option<CardSize>,
    pub created_at: String,
}

/// Where a save landed. Callers track this to route a later delete to the
/// store that actually holds the record.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Persisted in the remote store; carries the server-assigned record.
    Remote(Greeting),
    /// Remote write failed; persisted in the local mirror instead.
    Local(Greeting),
}

impl SaveOutcome {
    #[must_use]
    pub fn greeting(&self) -> &Greeting {
        match self {
            SaveOutcome::Remote(g) | SaveOutcome::Local(g) => g,
        }
    }

    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, SaveOutcome::Local(_))
    }
}

/// Request body for message generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub recipient_name: String,
    pub relationship: String,
    pub tone: String,
    pub language: String,
}

/// A generated greeting: one primary message plus alternative variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMessage {
    pub primary_message: String,
    #[serde(default)]
    pub alternative_messages: Vec<String>,
}
