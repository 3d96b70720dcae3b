use super::*;

// =============================================================
// Sentinel
// =============================================================

#[test]
fn new_sentinel_is_recognized() {
    assert!(is_new("new"));
    assert!(!is_new("w-1"));
    assert!(!is_new("New"));
}

// =============================================================
// FieldKind
// =============================================================

#[test]
fn field_kind_tags_round_trip() {
    for kind in FieldKind::ALL {
        assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn field_kind_rejects_unknown_tag() {
    assert_eq!(FieldKind::parse("dropdown"), None);
    assert_eq!(FieldKind::parse(""), None);
}

#[test]
fn field_kind_serializes_as_lowercase_tag() {
    let json = serde_json::to_string(&FieldKind::Blueprint).unwrap();
    assert_eq!(json, "\"blueprint\"");
    let back: FieldKind = serde_json::from_str("\"select\"").unwrap();
    assert_eq!(back, FieldKind::Select);
}

// =============================================================
// CustomField
// =============================================================

#[test]
fn custom_field_default_matches_blank_template() {
    let field = CustomField::default();
    assert_eq!(field.name, "");
    assert_eq!(field.kind, FieldKind::Text);
    assert_eq!(field.value, "");
    assert!(field.options.is_empty());
}

#[test]
fn custom_field_uses_type_key_on_the_wire() {
    let field = CustomField {
        name: "HP".to_owned(),
        kind: FieldKind::Number,
        value: "10".to_owned(),
        options: Vec::new(),
    };
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["type"], "number");
    assert!(json.get("options").is_none());
}

#[test]
fn blueprint_fields_round_trip_in_order() {
    let blueprint = BlueprintResponse {
        id: "bp-1".to_owned(),
        name: "Monster".to_owned(),
        description: Some("A foe".to_owned()),
        is_public: true,
        fields: vec![
            CustomField {
                name: "HP".to_owned(),
                kind: FieldKind::Number,
                value: "10".to_owned(),
                options: Vec::new(),
            },
            CustomField {
                name: "Size".to_owned(),
                kind: FieldKind::Select,
                value: "small".to_owned(),
                options: vec!["small".to_owned(), "large".to_owned()],
            },
            CustomField {
                name: "Name".to_owned(),
                kind: FieldKind::Text,
                value: "Grub".to_owned(),
                options: Vec::new(),
            },
        ],
        creator: None,
        created_at: None,
        updated_at: None,
    };

    let json = serde_json::to_string(&blueprint).unwrap();
    let back: BlueprintResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back.fields.len(), 3);
    assert_eq!(back.fields, blueprint.fields);
}

// =============================================================
// Responses tolerate sparse template payloads
// =============================================================

#[test]
fn world_template_deserializes_without_collections() {
    let world: WorldResponse =
        serde_json::from_str(r#"{"id": "new", "name": ""}"#).unwrap();
    assert_eq!(world.id, "new");
    assert!(world.blueprints.is_empty());
    assert!(world.contexts.is_empty());
    assert!(world.objects.is_empty());
    assert!(!world.settings.is_public);
}

#[test]
fn user_payload_skips_absent_fields() {
    let payload = UserPayload {
        username: Some("alice".to_owned()),
        ..UserPayload::default()
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "alice" }));
}
