//! World-aggregate helpers for the wizard and its editors.
//!
//! DESIGN
//! ======
//! The wizard holds one `WorldResponse` draft plus a baseline snapshot.
//! Editors never touch the draft directly; they go through the merge and
//! remove helpers here so replace-or-append semantics, dirty tracking, and
//! reset behavior stay in one tested place.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use crate::net::types::{
    BlueprintResponse, ContextResponse, ObjectResponse, WorldPayload, WorldResponse, is_new,
};

/// A client-side id for an entity created inside a wizard session.
///
/// Unsaved entities cannot share the `"new"` sentinel once merged into the
/// world draft or a second creation would replace the first. Draft ids are
/// never sent to the backend.
pub fn draft_id() -> String {
    format!("draft-{}", uuid::Uuid::new_v4())
}

/// Whether an id is a local wizard draft id.
pub fn is_draft(id: &str) -> bool {
    id.starts_with("draft-")
}

/// Resolve the id under which an entity should be merged into the draft:
/// the `"new"` sentinel becomes a fresh draft id, anything else is kept.
pub fn merge_id(id: &str) -> String {
    if is_new(id) { draft_id() } else { id.to_owned() }
}

/// Replace the context with the same id, or append it.
pub fn merge_context(world: &mut WorldResponse, context: ContextResponse) {
    if let Some(slot) = world.contexts.iter_mut().find(|c| c.id == context.id) {
        *slot = context;
    } else {
        world.contexts.push(context);
    }
}

/// Remove the context with the given id, if present.
pub fn remove_context(world: &mut WorldResponse, id: &str) {
    world.contexts.retain(|c| c.id != id);
}

/// Replace the object with the same id, or append it.
pub fn merge_object(world: &mut WorldResponse, object: ObjectResponse) {
    if let Some(slot) = world.objects.iter_mut().find(|o| o.id == object.id) {
        *slot = object;
    } else {
        world.objects.push(object);
    }
}

/// Remove the object with the given id, if present.
pub fn remove_object(world: &mut WorldResponse, id: &str) {
    world.objects.retain(|o| o.id != id);
}

/// Replace the blueprint with the same id, or append it.
pub fn merge_blueprint(world: &mut WorldResponse, blueprint: BlueprintResponse) {
    if let Some(slot) = world.blueprints.iter_mut().find(|b| b.id == blueprint.id) {
        *slot = blueprint;
    } else {
        world.blueprints.push(blueprint);
    }
}

/// Remove the blueprint with the given id, if present.
pub fn remove_blueprint(world: &mut WorldResponse, id: &str) {
    world.blueprints.retain(|b| b.id != id);
}

/// Blueprint ids in display order.
pub fn blueprint_ids(world: &WorldResponse) -> Vec<String> {
    world.blueprints.iter().map(|b| b.id.clone()).collect()
}

fn blueprint_ids_sorted(world: &WorldResponse) -> Vec<String> {
    let mut ids = blueprint_ids(world);
    ids.sort_unstable();
    ids
}

/// Structural dirty comparison against the baseline snapshot.
///
/// The aggregate is dirty when name, description, settings, contexts,
/// objects, or the sorted set of blueprint ids differ. Blueprint ids are
/// compared as a set since attach order carries no meaning.
pub fn is_dirty(current: &WorldResponse, baseline: &WorldResponse) -> bool {
    current.name != baseline.name
        || current.description != baseline.description
        || current.settings != baseline.settings
        || current.contexts != baseline.contexts
        || current.objects != baseline.objects
        || blueprint_ids_sorted(current) != blueprint_ids_sorted(baseline)
}

/// Restore the baseline snapshot while preserving the current blueprint
/// collection (blueprint attach/detach goes through its own picker flow and
/// is not reverted by Reset).
pub fn reset_draft(current: &WorldResponse, baseline: &WorldResponse) -> WorldResponse {
    let mut restored = baseline.clone();
    restored.blueprints = current.blueprints.clone();
    restored
}

/// Build the world save payload from the draft and the ids returned by the
/// nested context/object creation steps.
pub fn save_payload(
    world: &WorldResponse,
    context_ids: Vec<String>,
    object_ids: Vec<String>,
) -> WorldPayload {
    WorldPayload {
        name: world.name.clone(),
        description: world.description.clone().unwrap_or_default(),
        settings: world.settings.clone(),
        blueprint_ids: blueprint_ids(world),
        context_ids,
        object_ids,
    }
}

/// Objects filtered to one blueprint, or all objects for an empty filter.
pub fn filter_objects_by_blueprint(
    objects: &[ObjectResponse],
    blueprint_id: &str,
) -> Vec<ObjectResponse> {
    if blueprint_id.is_empty() {
        return objects.to_vec();
    }
    objects
        .iter()
        .filter(|o| o.blueprint.id == blueprint_id)
        .cloned()
        .collect()
}
