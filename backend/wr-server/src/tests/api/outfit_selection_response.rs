use crate::OutfitSelectionResponse;

use wr_core::{OutfitSelection, Section, SelectionNotice};

#[test]
fn given_empty_selection_when_serialized_then_slots_are_null_and_notices_carry_messages() {
    // Given
    let selection = OutfitSelection {
        notices: vec![SelectionNotice::UnknownItem {
            section: Section::Top,
            id: "z".to_string(),
        }],
        ..OutfitSelection::default()
    };

    // When
    let json = serde_json::to_value(OutfitSelectionResponse::from(selection)).unwrap();

    // Then
    assert!(json["top"].is_null());
    assert!(json["shoes"].is_null());
    assert_eq!(json["notices"][0]["kind"], "unknown_item");
    assert_eq!(json["notices"][0]["section"], "top");
    assert_eq!(json["notices"][0]["id"], "z");
    assert_eq!(
        json["notices"][0]["message"],
        "Suggested top 'z' is not in your top items"
    );
}
