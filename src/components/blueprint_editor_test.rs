use super::*;

fn field(name: &str, kind: FieldKind, value: &str) -> CustomField {
    CustomField {
        name: name.to_owned(),
        kind,
        value: value.to_owned(),
        options: Vec::new(),
    }
}

fn valid_blueprint() -> BlueprintResponse {
    let mut bp = blank_blueprint();
    bp.name = "Monster".to_owned();
    bp.fields = vec![field("HP", FieldKind::Number, "10")];
    bp
}

// =============================================================
// Field mutations
// =============================================================

#[test]
fn add_field_appends_blank_text_field() {
    let mut fields = Vec::new();
    add_field(&mut fields);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0], CustomField::default());
}

#[test]
fn remove_field_by_index_ignores_out_of_range() {
    let mut fields = vec![
        field("a", FieldKind::Text, "x"),
        field("b", FieldKind::Text, "y"),
    ];
    remove_field(&mut fields, 0);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "b");
    remove_field(&mut fields, 5);
    assert_eq!(fields.len(), 1);
}

#[test]
fn add_option_rejects_duplicates() {
    let mut f = field("Size", FieldKind::Select, "");
    assert_eq!(add_option(&mut f, "small".to_owned()), Ok(()));
    assert_eq!(
        add_option(&mut f, "small".to_owned()),
        Err("Option already exists.")
    );
    assert_eq!(f.options, vec!["small"]);
}

#[test]
fn add_option_rejects_non_select_fields() {
    let mut f = field("HP", FieldKind::Number, "10");
    assert_eq!(
        add_option(&mut f, "small".to_owned()),
        Err("Only select fields can have options.")
    );
}

#[test]
fn remove_option_rejects_missing_option() {
    let mut f = field("Size", FieldKind::Select, "");
    add_option(&mut f, "small".to_owned()).unwrap();
    assert_eq!(remove_option(&mut f, "large"), Err("Option does not exist."));
    assert_eq!(remove_option(&mut f, "small"), Ok(()));
    assert!(f.options.is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_blueprint_passes() {
    assert_eq!(validate_blueprint(&valid_blueprint()), Ok(()));
}

#[test]
fn name_is_required() {
    let mut bp = valid_blueprint();
    bp.name = "  ".to_owned();
    assert_eq!(validate_blueprint(&bp), Err("Blueprint name is required."));
}

#[test]
fn at_least_one_field_is_required() {
    let mut bp = valid_blueprint();
    bp.fields.clear();
    assert_eq!(validate_blueprint(&bp), Err("At least one field is required."));
}

#[test]
fn every_field_needs_a_name() {
    let mut bp = valid_blueprint();
    bp.fields.push(field("", FieldKind::Text, "x"));
    assert_eq!(validate_blueprint(&bp), Err("All fields must have a name."));
}

#[test]
fn select_fields_need_at_least_one_option() {
    let mut bp = valid_blueprint();
    bp.fields.push(field("Size", FieldKind::Select, "small"));
    assert_eq!(
        validate_blueprint(&bp),
        Err("Select fields must have at least one option.")
    );
}

#[test]
fn select_options_must_be_non_empty() {
    let mut bp = valid_blueprint();
    let mut select = field("Size", FieldKind::Select, "small");
    select.options = vec!["small".to_owned(), "  ".to_owned()];
    bp.fields.push(select);
    assert_eq!(
        validate_blueprint(&bp),
        Err("All options must have a value.")
    );
}

#[test]
fn every_field_needs_a_default_value() {
    let mut bp = valid_blueprint();
    bp.fields.push(field("Note", FieldKind::Text, " "));
    assert_eq!(
        validate_blueprint(&bp),
        Err("All fields must have a default value.")
    );
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_carries_fields_in_order() {
    let mut bp = valid_blueprint();
    bp.description = Some("A foe".to_owned());
    bp.fields.push(field("Name", FieldKind::Text, "Grub"));
    let payload = blueprint_payload(&bp);
    assert_eq!(payload.name, "Monster");
    assert_eq!(payload.description, "A foe");
    assert_eq!(payload.fields.len(), 2);
    assert_eq!(payload.fields[0].name, "HP");
    assert_eq!(payload.fields[1].name, "Name");
}

// =============================================================
// Reference options
// =============================================================

#[test]
fn reference_options_exclude_the_draft_itself() {
    use crate::net::types::{WorldResponse, WorldSettings};
    let mut other = blank_blueprint();
    other.id = "bp-2".to_owned();
    other.name = "Town".to_owned();
    let mut own = blank_blueprint();
    own.id = "bp-1".to_owned();
    own.name = "Monster".to_owned();
    let world = WorldResponse {
        id: "w-1".to_owned(),
        name: "Ember".to_owned(),
        description: None,
        settings: WorldSettings::default(),
        blueprints: vec![own, other],
        contexts: Vec::new(),
        objects: Vec::new(),
        creator: None,
        created_at: None,
        updated_at: None,
    };

    let options = reference_options(Some(&world), "bp-1");
    assert_eq!(options, vec![("bp-2".to_owned(), "Town".to_owned())]);
    assert!(reference_options(None, "bp-1").is_empty());
}
