use super::*;
use crate::net::types::{CustomField, FieldKind, WorldSettings};

fn world(id: &str, name: &str) -> WorldResponse {
    WorldResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        settings: WorldSettings::default(),
        blueprints: Vec::new(),
        contexts: Vec::new(),
        objects: Vec::new(),
        creator: None,
        created_at: None,
        updated_at: None,
    }
}

fn context(id: &str, name: &str) -> ContextResponse {
    ContextResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        content: String::new(),
        created_at: None,
        updated_at: None,
    }
}

fn blueprint(id: &str, name: &str) -> BlueprintResponse {
    BlueprintResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        is_public: false,
        fields: vec![CustomField {
            name: "HP".to_owned(),
            kind: FieldKind::Number,
            value: "10".to_owned(),
            options: Vec::new(),
        }],
        creator: None,
        created_at: None,
        updated_at: None,
    }
}

fn object(id: &str, name: &str, bp: &BlueprintResponse) -> ObjectResponse {
    ObjectResponse {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        blueprint: bp.clone(),
        fields: bp.fields.clone(),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Draft ids
// =============================================================

#[test]
fn merge_id_replaces_new_sentinel_with_unique_draft_id() {
    let first = merge_id("new");
    let second = merge_id("new");
    assert!(is_draft(&first));
    assert!(is_draft(&second));
    assert_ne!(first, second);
}

#[test]
fn merge_id_keeps_persisted_ids() {
    assert_eq!(merge_id("c-1"), "c-1");
    assert!(!is_draft("c-1"));
}

// =============================================================
// Merge / remove
// =============================================================

#[test]
fn merge_context_appends_when_absent() {
    let mut w = world("w-1", "Ember");
    merge_context(&mut w, context("c-1", "Lore"));
    merge_context(&mut w, context("c-2", "History"));
    assert_eq!(w.contexts.len(), 2);
    assert_eq!(w.contexts[1].name, "History");
}

#[test]
fn merge_context_replaces_by_id() {
    let mut w = world("w-1", "Ember");
    merge_context(&mut w, context("c-1", "Lore"));
    merge_context(&mut w, context("c-1", "Lore, revised"));
    assert_eq!(w.contexts.len(), 1);
    assert_eq!(w.contexts[0].name, "Lore, revised");
}

#[test]
fn two_drafts_do_not_collapse() {
    let mut w = world("w-1", "Ember");
    let mut a = context("new", "First");
    a.id = merge_id(&a.id);
    let mut b = context("new", "Second");
    b.id = merge_id(&b.id);
    merge_context(&mut w, a);
    merge_context(&mut w, b);
    assert_eq!(w.contexts.len(), 2);
}

#[test]
fn remove_context_is_noop_for_unknown_id() {
    let mut w = world("w-1", "Ember");
    merge_context(&mut w, context("c-1", "Lore"));
    remove_context(&mut w, "c-9");
    assert_eq!(w.contexts.len(), 1);
    remove_context(&mut w, "c-1");
    assert!(w.contexts.is_empty());
}

#[test]
fn merge_object_and_blueprint_follow_same_semantics() {
    let mut w = world("w-1", "Ember");
    let bp = blueprint("bp-1", "Monster");
    merge_blueprint(&mut w, bp.clone());
    merge_blueprint(&mut w, bp.clone());
    assert_eq!(w.blueprints.len(), 1);

    merge_object(&mut w, object("o-1", "Grub", &bp));
    merge_object(&mut w, object("o-1", "Grub II", &bp));
    assert_eq!(w.objects.len(), 1);
    assert_eq!(w.objects[0].name, "Grub II");

    remove_blueprint(&mut w, "bp-1");
    remove_object(&mut w, "o-1");
    assert!(w.blueprints.is_empty());
    assert!(w.objects.is_empty());
}

// =============================================================
// Dirty tracking
// =============================================================

#[test]
fn pristine_world_is_not_dirty() {
    let w = world("w-1", "Ember");
    assert!(!is_dirty(&w, &w.clone()));
}

#[test]
fn name_description_and_settings_changes_are_dirty() {
    let baseline = world("w-1", "Ember");

    let mut renamed = baseline.clone();
    renamed.name = "Cinder".to_owned();
    assert!(is_dirty(&renamed, &baseline));

    let mut described = baseline.clone();
    described.description = Some("A world".to_owned());
    assert!(is_dirty(&described, &baseline));

    let mut published = baseline.clone();
    published.settings.is_public = true;
    assert!(is_dirty(&published, &baseline));
}

#[test]
fn nested_collection_changes_are_dirty() {
    let baseline = world("w-1", "Ember");

    let mut with_context = baseline.clone();
    merge_context(&mut with_context, context("c-1", "Lore"));
    assert!(is_dirty(&with_context, &baseline));

    let bp = blueprint("bp-1", "Monster");
    let mut with_object = baseline.clone();
    merge_object(&mut with_object, object("o-1", "Grub", &bp));
    assert!(is_dirty(&with_object, &baseline));
}

#[test]
fn blueprint_order_does_not_matter_for_dirty() {
    let mut baseline = world("w-1", "Ember");
    merge_blueprint(&mut baseline, blueprint("bp-1", "Monster"));
    merge_blueprint(&mut baseline, blueprint("bp-2", "Town"));

    let mut reordered = baseline.clone();
    reordered.blueprints.reverse();
    assert!(!is_dirty(&reordered, &baseline));

    let mut detached = baseline.clone();
    remove_blueprint(&mut detached, "bp-2");
    assert!(is_dirty(&detached, &baseline));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_baseline_fields() {
    let baseline = world("w-1", "Ember");
    let mut edited = baseline.clone();
    edited.name = "Cinder".to_owned();
    merge_context(&mut edited, context("c-1", "Lore"));

    let restored = reset_draft(&edited, &baseline);
    assert_eq!(restored.name, "Ember");
    assert!(restored.contexts.is_empty());
}

#[test]
fn reset_preserves_current_blueprint_collection() {
    let baseline = world("w-1", "Ember");
    let mut edited = baseline.clone();
    edited.name = "Cinder".to_owned();
    merge_blueprint(&mut edited, blueprint("bp-1", "Monster"));

    let restored = reset_draft(&edited, &baseline);
    assert_eq!(restored.name, "Ember");
    assert_eq!(restored.blueprints.len(), 1);
    assert_eq!(restored.blueprints[0].id, "bp-1");
}

// =============================================================
// Save payload
// =============================================================

#[test]
fn save_payload_references_collected_ids() {
    let mut w = world("w-1", "Ember");
    w.description = Some("A world".to_owned());
    merge_blueprint(&mut w, blueprint("bp-1", "Monster"));
    merge_context(&mut w, context("draft-1", "Lore"));

    let payload = save_payload(
        &w,
        vec!["c-1".to_owned()],
        vec!["o-1".to_owned(), "o-2".to_owned()],
    );
    assert_eq!(payload.name, "Ember");
    assert_eq!(payload.description, "A world");
    assert_eq!(payload.blueprint_ids, vec!["bp-1"]);
    assert_eq!(payload.context_ids, vec!["c-1"]);
    assert_eq!(payload.object_ids, vec!["o-1", "o-2"]);
}

#[test]
fn save_payload_never_contains_the_new_sentinel() {
    let mut w = world("new", "Ember");
    merge_context(&mut w, context(&merge_id("new"), "Lore"));
    let payload = save_payload(&w, vec!["c-1".to_owned()], Vec::new());
    assert!(!payload.context_ids.iter().any(|id| id == "new"));
    assert!(!payload.blueprint_ids.iter().any(|id| id == "new"));
}

// =============================================================
// Object filter
// =============================================================

#[test]
fn filter_objects_by_blueprint_matches_id() {
    let bp1 = blueprint("bp-1", "Monster");
    let bp2 = blueprint("bp-2", "Town");
    let objects = vec![
        object("o-1", "Grub", &bp1),
        object("o-2", "Hamlet", &bp2),
        object("o-3", "Worm", &bp1),
    ];

    let filtered = filter_objects_by_blueprint(&objects, "bp-1");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|o| o.blueprint.id == "bp-1"));

    assert_eq!(filter_objects_by_blueprint(&objects, "").len(), 3);
}
