use crate::{Client, ItemEdits, content_type_for};

use std::path::Path;

#[test]
fn given_trailing_slash_when_created_then_base_url_trimmed() {
    // Given / When
    let client = Client::new("http://localhost:8000/", None, None);

    // Then
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn given_identity_when_created_then_user_id_and_token_stored() {
    // Given / When
    let client = Client::new("http://localhost:8000", Some("user-123"), Some("jwt"));

    // Then
    assert_eq!(client.user_id.as_deref(), Some("user-123"));
    assert_eq!(client.token.as_deref(), Some("jwt"));
}

#[test]
fn given_image_extensions_when_guessing_content_type_then_known_types_mapped() {
    assert_eq!(content_type_for(Path::new("tee.JPG")), "image/jpeg");
    assert_eq!(content_type_for(Path::new("a/b/tee.jpeg")), "image/jpeg");
    assert_eq!(content_type_for(Path::new("tee.webp")), "image/webp");
    assert_eq!(content_type_for(Path::new("tee.png")), "image/png");
    assert_eq!(content_type_for(Path::new("tee")), "image/png");
}

#[test]
fn given_partial_edits_when_serialized_then_only_present_fields_sent() {
    // Given
    let edits = ItemEdits {
        name: Some("Navy tee"),
        item_type: Some("t-shirt"),
        ..ItemEdits::default()
    };

    // When
    let json = serde_json::to_value(edits).unwrap();

    // Then
    assert_eq!(json, serde_json::json!({"name": "Navy tee", "type": "t-shirt"}));
}
