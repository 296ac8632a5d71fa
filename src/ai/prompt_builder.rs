//! Prompt assembly for greeting generation.
//!
//! Builds the chat prompt from the structured request: a system message with
//! the writing rules and tone instruction, then a user message naming the
//! recipient, relationship, and language.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::GenerateRequest;

/// Display names for the supported greeting languages, keyed by the codes
/// the card editor sends.
static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("english", "English"),
        ("arabic", "Arabic"),
        ("bengali", "Bengali"),
        ("urdu", "Urdu"),
        ("hindi", "Hindi"),
        ("turkish", "Turkish"),
        ("indonesian", "Indonesian"),
        ("malay", "Malay"),
        ("french", "French"),
        ("spanish", "Spanish"),
    ])
});

/// Resolves a language code to its display name, defaulting to English.
#[must_use]
pub fn language_name(code: &str) -> &'static str {
    LANGUAGE_NAMES.get(code).copied().unwrap_or("English")
}

/// Writing instruction for the requested tone. Unknown tones get the
/// respectful default.
#[must_use]
pub fn tone_instruction(tone: &str) -> &'static str {
    match tone {
        "unique" => {
            "Create an unconventional, creative, and memorable wish that stands out from \
             typical greetings. Be innovative and surprising while remaining respectful."
        }
        "spiritual" => {
            "Focus on spiritual blessings, divine guidance, and religious significance of Eid."
        }
        "humorous" => {
            "Include light humor and playful elements while maintaining respect for the occasion."
        }
        "poetic" => "Use beautiful, lyrical language with metaphors and elegant expressions.",
        "formal" => {
            "Use formal, respectful language appropriate for professional or formal relationships."
        }
        "emotional" => "Express deep emotions, love, and heartfelt sentiments.",
        "playful" => "Use a fun, lighthearted approach with cheerful expressions.",
        "traditional" => "Use traditional Islamic greetings and classical expressions.",
        "inspirational" => {
            "Include motivational and uplifting messages that inspire hope and positivity."
        }
        "casual" => "Use relaxed, friendly language as if talking to a close friend.",
        _ => "Use a respectful and warm tone appropriate for the relationship.",
    }
}

/// Builds the chat prompt for one generation request.
#[must_use]
pub fn build_prompt(request: &GenerateRequest) -> Vec<ChatCompletionMessage> {
    let system_prompt = format!(
        "You are an expert at writing personalized Eid greeting messages. Generate exactly \
         one primary message and 2 alternative variations.\n\
         \n\
         Rules:\n\
         - Keep each message concise (2-4 sentences maximum)\n\
         - Make it personal and warm\n\
         - Avoid meta-commentary or explanations\n\
         - Don't include subject lines or formatting instructions\n\
         - Focus on the specific relationship and tone requested\n\
         - {}\n\
         \n\
         Format your response as JSON:\n\
         {{\n\
           \"primary\": \"main message here\",\n\
           \"alternatives\": [\"alternative 1\", \"alternative 2\"]\n\
         }}",
        tone_instruction(&request.tone)
    );

    let user_prompt = format!(
        "Generate an Eid-ul-Adha greeting message for my {} named {}.\n\
         Tone: {}\n\
         Language: {}\n\
         Make it appropriate for the relationship and tone specified.",
        request.relationship,
        request.recipient_name,
        request.tone,
        language_name(&request.language)
    );

    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_prompt),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(user_prompt),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
