use serde_json::json;

use eid_greetings::core::models::{CardSize, CustomColors, GeneratedMessage, Greeting};

#[test]
fn test_greeting_uses_camel_case_on_the_wire() {
    let greeting = Greeting {
        id: "1".to_string(),
        sender_name: "Ali".to_string(),
        recipient_name: "Sara".to_string(),
        message: "Eid Mubarak!".to_string(),
        frame_style: None,
        custom_colors: Some(CustomColors {
            primary: "#059669".to_string(),
            secondary: "#0d9488".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ecfdf5".to_string(),
        }),
        card_size: Some(CardSize::Small),
        created_at: "2024-06-16T00:00:00Z".to_string(),
    };

    let value = serde_json::to_value(&greeting).unwrap();
    assert_eq!(value["senderName"], "Ali");
    assert_eq!(value["recipientName"], "Sara");
    assert_eq!(value["cardSize"], "small");
    assert_eq!(value["createdAt"], "2024-06-16T00:00:00Z");
    assert_eq!(value["customColors"]["primary"], "#059669");
    // Absent options are omitted entirely
    assert!(value.get("frameStyle").is_none());
}

#[test]
fn test_greeting_parses_without_id_or_options() {
    let greeting: Greeting = serde_json::from_value(json!({
        "senderName": "Ali",
        "recipientName": "Sara",
        "message": "Eid Mubarak!",
        "createdAt": "2024-06-16T00:00:00Z"
    }))
    .unwrap();

    assert!(greeting.id.is_empty());
    assert!(greeting.frame_style.is_none());
    assert!(greeting.custom_colors.is_none());
    assert!(greeting.card_size.is_none());
}

#[test]
fn test_generated_message_wire_field_names() {
    let generated = GeneratedMessage {
        primary_message: "Eid Mubarak, Sara!".to_string(),
        alternative_messages: vec!["Blessed Eid!".to_string()],
    };

    let value = serde_json::to_value(&generated).unwrap();
    assert_eq!(value["primaryMessage"], "Eid Mubarak, Sara!");
    assert_eq!(value["alternativeMessages"][0], "Blessed Eid!");
}
