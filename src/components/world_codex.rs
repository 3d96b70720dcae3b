//! Codex tab of the world wizard: contexts, blueprints, and objects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three generic-list sections over the world draft's nested collections,
//! each wired to its editor dialog. Blueprints can also be attached from
//! the user's existing library through a highlight-mode picker.

#[cfg(test)]
#[path = "world_codex_test.rs"]
mod world_codex_test;

use leptos::prelude::*;

use crate::components::blueprint_editor::BlueprintEditor;
use crate::components::context_editor::ContextEditor;
use crate::components::fields::DropdownField;
use crate::components::generic_list::GenericList;
use crate::components::message_box::MessageBox;
use crate::components::modal::Modal;
use crate::components::object_editor::ObjectEditor;
use crate::net::types::{BlueprintResponse, ContextResponse, ObjectResponse, WorldResponse};
use crate::state::world;

/// Blueprints from the user's library that are not yet attached to the
/// world, preserving library order.
pub(crate) fn selectable_blueprints(
    available: &[BlueprintResponse],
    world: Option<&WorldResponse>,
) -> Vec<BlueprintResponse> {
    let attached: Vec<&str> = world
        .map(|w| w.blueprints.iter().map(|b| b.id.as_str()).collect())
        .unwrap_or_default();
    available
        .iter()
        .filter(|b| !attached.contains(&b.id.as_str()))
        .cloned()
        .collect()
}

/// Dropdown pairs for the objects-by-blueprint filter, with a trailing
/// "None" entry that clears the filter.
pub(crate) fn filter_options(world: Option<&WorldResponse>) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = world
        .map(|w| {
            w.blueprints
                .iter()
                .map(|b| (b.id.clone(), b.name.clone()))
                .collect()
        })
        .unwrap_or_default();
    options.push((String::new(), "None".to_owned()));
    options
}

fn context_details(context: ContextResponse) -> impl IntoView {
    view! {
        <div class="codex-card">
            <h5 class="codex-card__title">{context.name}</h5>
            <p class="codex-card__meta">{context.content}</p>
        </div>
    }
}

fn blueprint_details(blueprint: BlueprintResponse) -> impl IntoView {
    view! {
        <div class="codex-card">
            <h5 class="codex-card__title">{blueprint.name}</h5>
            <p class="codex-card__text">{blueprint.description.unwrap_or_default()}</p>
            <p class="codex-card__meta">{format!("{} Fields", blueprint.fields.len())}</p>
        </div>
    }
}

fn object_details(object: ObjectResponse) -> impl IntoView {
    view! {
        <div class="codex-card">
            <h5 class="codex-card__title">{object.name}</h5>
            <p class="codex-card__text">{object.description.unwrap_or_default()}</p>
            <p class="codex-card__meta">{format!("{} Fields", object.fields.len())}</p>
        </div>
    }
}

/// Codex tab content for the world wizard.
#[component]
pub fn WorldCodex(world: RwSignal<Option<WorldResponse>>) -> impl IntoView {
    let show_context_editor = RwSignal::new(false);
    let current_context = RwSignal::new(None::<ContextResponse>);

    let show_blueprint_editor = RwSignal::new(false);
    let current_blueprint = RwSignal::new(None::<BlueprintResponse>);

    let show_object_editor = RwSignal::new(false);
    let current_object = RwSignal::new(None::<ObjectResponse>);

    let show_blueprint_selector = RwSignal::new(false);
    let highlighted_blueprint = RwSignal::new(None::<BlueprintResponse>);

    let available_blueprints = RwSignal::new(Vec::<BlueprintResponse>::new());
    let loading_blueprints = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let blueprint_filter = RwSignal::new(String::new());

    let fetch_blueprints = move || {
        #[cfg(feature = "hydrate")]
        {
            loading_blueprints.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::blueprints_all().await {
                    Ok(blueprints) => available_blueprints.set(blueprints),
                    Err(_) => {
                        error.set("Failed to load blueprints. Please try again later.".to_owned());
                    }
                }
                loading_blueprints.set(false);
            });
        }
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            fetch_blueprints();
        }
    });

    let contexts = Signal::derive(move || world.get().map(|w| w.contexts).unwrap_or_default());
    let blueprints = Signal::derive(move || world.get().map(|w| w.blueprints).unwrap_or_default());
    let objects = Signal::derive(move || {
        let all = world.get().map(|w| w.objects).unwrap_or_default();
        world::filter_objects_by_blueprint(&all, &blueprint_filter.get())
    });
    let selector_items = Signal::derive(move || {
        selectable_blueprints(&available_blueprints.get(), world.get().as_ref())
    });
    let object_filter_options = Signal::derive(move || filter_options(world.get().as_ref()));

    let add_highlighted_blueprint = move |_| {
        if let Some(blueprint) = highlighted_blueprint.get_untracked() {
            world.update(|w| {
                if let Some(w) = w {
                    world::merge_blueprint(w, blueprint);
                }
            });
        }
        show_blueprint_selector.set(false);
        highlighted_blueprint.set(None);
    };

    view! {
        <div class="world-codex">
            <h2 class="world-codex__title">"World Codex"</h2>
            <MessageBox message=error/>

            <section class="world-codex__section">
                <h3>"Contexts"</h3>
                <GenericList
                    items=contexts
                    item_label="context"
                    get_name=|context: &ContextResponse| context.name.clone()
                    render_details=context_details
                    on_create=Callback::new(move |()| {
                        current_context.set(None);
                        show_context_editor.set(true);
                    })
                    on_edit=Callback::new(move |context| {
                        current_context.set(Some(context));
                        show_context_editor.set(true);
                    })
                    pagination=true
                />
                <Show when=move || show_context_editor.get()>
                    <ContextEditor
                        context=current_context
                        world=world
                        on_close=Callback::new(move |()| show_context_editor.set(false))
                    />
                </Show>
            </section>

            <section class="world-codex__section">
                <h3>"Blueprints"</h3>
                <GenericList
                    items=blueprints
                    item_label="blueprint"
                    get_name=|blueprint: &BlueprintResponse| blueprint.name.clone()
                    render_details=blueprint_details
                    on_create=Callback::new(move |()| {
                        current_blueprint.set(None);
                        show_blueprint_editor.set(true);
                    })
                    on_edit=Callback::new(move |blueprint| {
                        current_blueprint.set(Some(blueprint));
                        show_blueprint_editor.set(true);
                    })
                    pagination=true
                >
                    <button
                        class="btn world-codex__add-existing"
                        on:click=move |_| show_blueprint_selector.set(true)
                    >
                        "Add Existing"
                    </button>
                </GenericList>
                <Show when=move || show_blueprint_editor.get()>
                    <BlueprintEditor
                        blueprint=current_blueprint
                        world=world
                        on_close=Callback::new(move |()| show_blueprint_editor.set(false))
                        on_refresh=Callback::new(move |()| fetch_blueprints())
                    />
                </Show>
                <Show when=move || show_blueprint_selector.get()>
                    <Modal
                        title=String::from("Add Blueprint")
                        on_close=Callback::new(move |()| {
                            show_blueprint_selector.set(false);
                            highlighted_blueprint.set(None);
                        })
                    >
                        <button
                            class="btn btn--primary"
                            disabled=move || highlighted_blueprint.get().is_none()
                            on:click=add_highlighted_blueprint
                        >
                            "Add Blueprint"
                        </button>
                        <GenericList
                            items=selector_items
                            item_label="blueprint"
                            get_name=|blueprint: &BlueprintResponse| blueprint.name.clone()
                            render_details=blueprint_details
                            on_refresh=Callback::new(move |()| fetch_blueprints())
                            loading=loading_blueprints
                            view_selector=true
                            pagination=true
                            highlighted=highlighted_blueprint
                        />
                    </Modal>
                </Show>
            </section>

            <section class="world-codex__section">
                <h3>"Objects"</h3>
                <GenericList
                    items=objects
                    item_label="object"
                    get_name=|object: &ObjectResponse| object.name.clone()
                    render_details=object_details
                    on_create=Callback::new(move |()| {
                        current_object.set(None);
                        show_object_editor.set(true);
                    })
                    on_edit=Callback::new(move |object| {
                        current_object.set(Some(object));
                        show_object_editor.set(true);
                    })
                    pagination=true
                >
                    <DropdownField
                        value=blueprint_filter
                        set_value=Callback::new(move |value| blueprint_filter.set(value))
                        options=object_filter_options
                        label="Filter"
                    />
                </GenericList>
                <Show when=move || show_object_editor.get()>
                    <ObjectEditor
                        object=current_object
                        world=world
                        on_close=Callback::new(move |()| show_object_editor.set(false))
                    />
                </Show>
            </section>
        </div>
    }
}
