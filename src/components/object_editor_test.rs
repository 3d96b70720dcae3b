use super::*;
use crate::net::types::WorldSettings;

fn blueprint_with_hp() -> BlueprintResponse {
    let mut bp = crate::components::blueprint_editor::blank_blueprint();
    bp.id = "bp-1".to_owned();
    bp.name = "Monster".to_owned();
    bp.fields = vec![CustomField {
        name: "HP".to_owned(),
        kind: FieldKind::Number,
        value: "10".to_owned(),
        options: Vec::new(),
    }];
    bp
}

// =============================================================
// Field materialization
// =============================================================

#[test]
fn instantiated_fields_deep_equal_the_blueprint_fields() {
    let bp = blueprint_with_hp();
    let fields = instantiate_fields(&bp);
    assert_eq!(fields, bp.fields);
}

#[test]
fn later_blueprint_edits_do_not_alter_existing_objects() {
    let mut bp = blueprint_with_hp();
    let mut object = blank_object();
    object.fields = instantiate_fields(&bp);
    object.blueprint = bp.clone();

    // Edit the blueprint after the object was created.
    bp.fields.push(CustomField {
        name: "Armor".to_owned(),
        kind: FieldKind::Number,
        value: "2".to_owned(),
        options: Vec::new(),
    });
    bp.fields[0].value = "99".to_owned();

    assert_eq!(object.fields.len(), 1);
    assert_eq!(object.fields[0].name, "HP");
    assert_eq!(object.fields[0].value, "10");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_object_requires_name_and_blueprint() {
    let mut object = blank_object();
    assert_eq!(validate_object(&object), Err("Object name is required."));

    object.name = "Grub".to_owned();
    assert_eq!(validate_object(&object), Err("A blueprint must be selected."));

    object.blueprint = blueprint_with_hp();
    assert_eq!(validate_object(&object), Ok(()));
}

// =============================================================
// Picker
// =============================================================

#[test]
fn picker_options_list_world_blueprints() {
    let world = crate::net::types::WorldResponse {
        id: "w-1".to_owned(),
        name: "Ember".to_owned(),
        description: None,
        settings: WorldSettings::default(),
        blueprints: vec![blueprint_with_hp()],
        contexts: Vec::new(),
        objects: Vec::new(),
        creator: None,
        created_at: None,
        updated_at: None,
    };
    assert_eq!(
        picker_options(Some(&world)),
        vec![("bp-1".to_owned(), "Monster".to_owned())]
    );
    assert!(picker_options(None).is_empty());
}

#[test]
fn only_persisted_objects_delete_over_the_network() {
    assert!(delete_needs_network("o-1"));
    assert!(!delete_needs_network("new"));
    assert!(!delete_needs_network("draft-abc"));
}
