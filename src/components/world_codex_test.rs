use super::*;
use crate::net::types::WorldSettings;

fn blueprint(id: &str, name: &str) -> BlueprintResponse {
    let mut bp = crate::components::blueprint_editor::blank_blueprint();
    bp.id = id.to_owned();
    bp.name = name.to_owned();
    bp
}

fn world_with_blueprints(blueprints: Vec<BlueprintResponse>) -> WorldResponse {
    WorldResponse {
        id: "w-1".to_owned(),
        name: "Ember".to_owned(),
        description: None,
        settings: WorldSettings::default(),
        blueprints,
        contexts: Vec::new(),
        objects: Vec::new(),
        creator: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn selectable_blueprints_exclude_already_attached() {
    let available = vec![
        blueprint("bp-1", "Monster"),
        blueprint("bp-2", "Town"),
        blueprint("bp-3", "Relic"),
    ];
    let world = world_with_blueprints(vec![blueprint("bp-2", "Town")]);

    let selectable = selectable_blueprints(&available, Some(&world));
    let ids: Vec<&str> = selectable.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["bp-1", "bp-3"]);
}

#[test]
fn selectable_blueprints_without_world_returns_all() {
    let available = vec![blueprint("bp-1", "Monster")];
    assert_eq!(selectable_blueprints(&available, None).len(), 1);
}

#[test]
fn filter_options_end_with_a_clearing_entry() {
    let world = world_with_blueprints(vec![blueprint("bp-1", "Monster")]);
    let options = filter_options(Some(&world));
    assert_eq!(
        options,
        vec![
            ("bp-1".to_owned(), "Monster".to_owned()),
            (String::new(), "None".to_owned()),
        ]
    );
}

#[test]
fn filter_options_without_world_still_offer_none() {
    assert_eq!(filter_options(None), vec![(String::new(), "None".to_owned())]);
}
