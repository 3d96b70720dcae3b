use super::*;
use crate::net::types::{CustomField, FieldKind};

#[test]
fn finish_tab_only_exists_while_creating() {
    assert_eq!(wizard_tabs(true), vec!["Display", "Settings", "Codex", "Finish"]);
    assert_eq!(wizard_tabs(false), vec!["Display", "Settings", "Codex"]);
}

#[test]
fn context_payload_carries_name_and_content() {
    let context = ContextResponse {
        id: "draft-1".to_owned(),
        name: "Lore".to_owned(),
        content: "The old kingdom.".to_owned(),
        created_at: None,
        updated_at: None,
    };
    let payload = context_payload(&context);
    assert_eq!(payload.name, "Lore");
    assert_eq!(payload.content, "The old kingdom.");
}

#[test]
fn object_payload_references_the_blueprint_and_copies_fields() {
    let mut blueprint = crate::components::blueprint_editor::blank_blueprint();
    blueprint.id = "bp-1".to_owned();
    blueprint.fields = vec![CustomField {
        name: "HP".to_owned(),
        kind: FieldKind::Number,
        value: "10".to_owned(),
        options: Vec::new(),
    }];

    let object = ObjectResponse {
        id: "draft-2".to_owned(),
        name: "Grub".to_owned(),
        description: None,
        blueprint: blueprint.clone(),
        fields: blueprint.fields.clone(),
        created_at: None,
        updated_at: None,
    };

    let payload = object_payload(&object);
    assert_eq!(payload.blueprint_id, "bp-1");
    assert_eq!(payload.description, "");
    assert_eq!(payload.fields, blueprint.fields);
}
