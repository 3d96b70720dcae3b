//! Modal editor for one blueprint (a reusable schema of typed fields).
//!
//! DESIGN
//! ======
//! The editor owns a local draft cloned from the input entity (or a fetched
//! blank template in create mode). Field mutations and validation are plain
//! functions over the draft so they test natively. Saving posts the draft
//! and merges the canonical response into the parent world by id; in speed
//! create mode the editor resets to a fresh template and stays open for
//! rapid successive creation.

#[cfg(test)]
#[path = "blueprint_editor_test.rs"]
mod blueprint_editor_test;

use leptos::prelude::*;

use crate::components::delete_popup::DeletePopup;
use crate::components::fields::{DropdownField, LongTextField, NumberField, ShortTextField, ToggleField};
use crate::components::message_box::{MessageBox, MessageKind};
use crate::components::modal::Modal;
use crate::components::tab_group::TabGroup;
use crate::net::types::{
    BlueprintPayload, BlueprintResponse, CustomField, FieldKind, NEW_ID, WorldResponse, is_new,
};
use crate::state::world;

pub(crate) fn blank_blueprint() -> BlueprintResponse {
    BlueprintResponse {
        id: NEW_ID.to_owned(),
        name: String::new(),
        description: None,
        is_public: false,
        fields: Vec::new(),
        creator: None,
        created_at: None,
        updated_at: None,
    }
}

/// Append a default field definition.
pub(crate) fn add_field(fields: &mut Vec<CustomField>) {
    fields.push(CustomField::default());
}

/// Remove the field at `index`; out-of-range indexes are ignored.
pub(crate) fn remove_field(fields: &mut Vec<CustomField>, index: usize) {
    if index < fields.len() {
        fields.remove(index);
    }
}

/// Add an option string to a select field, rejecting duplicates.
pub(crate) fn add_option(field: &mut CustomField, option: String) -> Result<(), &'static str> {
    if field.kind != FieldKind::Select {
        return Err("Only select fields can have options.");
    }
    if field.options.contains(&option) {
        return Err("Option already exists.");
    }
    field.options.push(option);
    Ok(())
}

/// Remove an option string from a select field, rejecting unknown options.
pub(crate) fn remove_option(field: &mut CustomField, option: &str) -> Result<(), &'static str> {
    if field.kind != FieldKind::Select {
        return Err("Only select fields can have options.");
    }
    if !field.options.iter().any(|o| o == option) {
        return Err("Option does not exist.");
    }
    field.options.retain(|o| o != option);
    Ok(())
}

/// Validate the draft before any network call.
pub(crate) fn validate_blueprint(blueprint: &BlueprintResponse) -> Result<(), &'static str> {
    if blueprint.name.trim().is_empty() {
        return Err("Blueprint name is required.");
    }
    if blueprint.fields.is_empty() {
        return Err("At least one field is required.");
    }
    for field in &blueprint.fields {
        if field.name.trim().is_empty() {
            return Err("All fields must have a name.");
        }
        if field.kind == FieldKind::Select {
            if field.options.is_empty() {
                return Err("Select fields must have at least one option.");
            }
            if field.options.iter().any(|option| option.trim().is_empty()) {
                return Err("All options must have a value.");
            }
        }
        if field.value.trim().is_empty() {
            return Err("All fields must have a default value.");
        }
    }
    Ok(())
}

pub(crate) fn blueprint_payload(blueprint: &BlueprintResponse) -> BlueprintPayload {
    BlueprintPayload {
        name: blueprint.name.clone(),
        description: blueprint.description.clone().unwrap_or_default(),
        is_public: blueprint.is_public,
        fields: blueprint.fields.clone(),
    }
}

/// Dropdown pairs for a blueprint-reference value: every other blueprint
/// attached to the world.
pub(crate) fn reference_options(
    world: Option<&WorldResponse>,
    self_id: &str,
) -> Vec<(String, String)> {
    world
        .map(|w| {
            w.blueprints
                .iter()
                .filter(|b| b.id != self_id)
                .map(|b| (b.id.clone(), b.name.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Modal create-or-edit dialog for a blueprint.
#[component]
pub fn BlueprintEditor(
    /// `None` opens in create mode with a fetched blank template.
    #[prop(into)] blueprint: Signal<Option<BlueprintResponse>>,
    world: RwSignal<Option<WorldResponse>>,
    on_close: Callback<()>,
    #[prop(optional)] on_refresh: Option<Callback<()>>,
) -> impl IntoView {
    let draft = RwSignal::new(None::<BlueprintResponse>);
    let tab = RwSignal::new(0usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let dirty = RwSignal::new(false);
    let speed_create = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

    let load = move || {
        error.set(String::new());
        dirty.set(false);
        if let Some(existing) = blueprint.get_untracked() {
            draft.set(Some(existing));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::blueprint_get(NEW_ID).await {
                    Ok(template) => draft.set(Some(template)),
                    Err(e) => error.set(format!("Failed to fetch blueprint data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            draft.set(Some(blank_blueprint()));
        }
    };

    Effect::new(move || {
        let _ = blueprint.get();
        load();
    });

    let is_edit = move || blueprint.get().is_some();

    let touch = move || {
        error.set(String::new());
        dirty.set(true);
    };

    let save = Callback::new(move |()| {
        if loading.get() {
            return;
        }
        let Some(bp) = draft.get() else {
            return;
        };
        if let Err(msg) = validate_blueprint(&bp) {
            error.set(msg.to_owned());
            return;
        }
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                let payload = blueprint_payload(&bp);
                match crate::net::api::blueprint_save(&bp.id, &payload).await {
                    Ok(saved) => {
                        world.update(|w| {
                            if let Some(w) = w {
                                world::merge_blueprint(w, saved);
                            }
                        });
                        if let Some(refresh) = on_refresh {
                            refresh.run(());
                        }
                        dirty.set(false);
                        if speed_create.get_untracked() && is_new(&bp.id) {
                            load();
                        } else {
                            on_close.run(());
                        }
                    }
                    Err(e) => error.set(format!("Failed to save blueprint data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bp;
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(bp) = blueprint.get_untracked() else {
            return;
        };
        if is_new(&bp.id) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::blueprint_delete(&bp.id).await {
                    Ok(()) => {
                        world.update(|w| {
                            if let Some(w) = w {
                                world::remove_blueprint(w, &bp.id);
                            }
                        });
                        if let Some(refresh) = on_refresh {
                            refresh.run(());
                        }
                        show_delete.set(false);
                        on_close.run(());
                    }
                    Err(e) => error.set(format!("Failed to delete blueprint: {e}")),
                }
                loading.set(false);
            });
        }
    });

    let title = Signal::derive(move || {
        if is_edit() { "Edit Blueprint".to_owned() } else { "Create Blueprint".to_owned() }
    });
    let heading = move || {
        draft
            .get()
            .map(|d| d.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "My Blueprint".to_owned())
    };
    let name = Signal::derive(move || draft.get().map(|d| d.name).unwrap_or_default());
    let description = Signal::derive(move || {
        draft
            .get()
            .and_then(|d| d.description)
            .unwrap_or_default()
    });
    let is_public = Signal::derive(move || draft.get().map(|d| d.is_public).unwrap_or_default());
    let confirm_phrase = move || blueprint.get_untracked().map(|b| b.name).unwrap_or_default();
    let dirty_warning =
        Signal::derive(
            move || {
                if dirty.get() { "You have unsaved changes.".to_owned() } else { String::new() }
            },
        );

    let set_field_kind = move |index: usize, tag: String| {
        let Some(kind) = FieldKind::parse(&tag) else {
            return;
        };
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    field.kind = kind;
                    if kind != FieldKind::Select {
                        field.options.clear();
                    }
                }
            }
        });
    };
    let set_field_name = move |index: usize, value: String| {
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    field.name = value;
                }
            }
        });
    };
    let set_field_value = move |index: usize, value: String| {
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    field.value = value;
                }
            }
        });
    };
    let set_option_value = move |index: usize, option_index: usize, value: String| {
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    if let Some(option) = field.options.get_mut(option_index) {
                        *option = value;
                    }
                }
            }
        });
    };
    let add_field_click = move |_| {
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                add_field(&mut d.fields);
            }
        });
    };
    let remove_field_click = move |index: usize| {
        touch();
        draft.update(|d| {
            if let Some(d) = d {
                remove_field(&mut d.fields, index);
            }
        });
    };
    let add_option_click = move |index: usize| {
        error.set(String::new());
        dirty.set(true);
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    if let Err(msg) = add_option(field, String::new()) {
                        error.set(msg.to_owned());
                    }
                }
            }
        });
    };
    let remove_option_click = move |index: usize, option: String| {
        error.set(String::new());
        dirty.set(true);
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    if let Err(msg) = remove_option(field, &option) {
                        error.set(msg.to_owned());
                    }
                }
            }
        });
    };

    let field_rows = move || {
        let fields = draft.get().map(|d| d.fields).unwrap_or_default();
        fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let chip = if field.name.is_empty() {
                    format!("Field {index}")
                } else {
                    field.name.clone()
                };
                let kind_options: Vec<(String, String)> = FieldKind::ALL
                    .into_iter()
                    .map(|kind| (kind.as_str().to_owned(), kind.as_str().to_owned()))
                    .collect();
                let value_widget = match field.kind {
                    FieldKind::Text => view! {
                        <ShortTextField
                            value=field.value.clone()
                            set_value=Callback::new(move |value| set_field_value(index, value))
                            label="Default Value"
                            placeholder="Default Value"
                        />
                    }
                    .into_any(),
                    FieldKind::Number => view! {
                        <NumberField
                            value=field.value.clone()
                            set_value=Callback::new(move |value| set_field_value(index, value))
                            label="Default Value"
                        />
                    }
                    .into_any(),
                    FieldKind::Boolean => {
                        let bool_options = vec![
                            ("true".to_owned(), "True".to_owned()),
                            ("false".to_owned(), "False".to_owned()),
                        ];
                        view! {
                            <DropdownField
                                value=field.value.clone()
                                set_value=Callback::new(move |value| set_field_value(index, value))
                                options=bool_options
                                label="Default Value"
                            />
                        }
                        .into_any()
                    }
                    FieldKind::Select => {
                        let select_options: Vec<(String, String)> =
                            field.options.iter().map(|o| (o.clone(), o.clone())).collect();
                        view! {
                            <DropdownField
                                value=field.value.clone()
                                set_value=Callback::new(move |value| set_field_value(index, value))
                                options=select_options
                                label="Default Value"
                            />
                        }
                        .into_any()
                    }
                    FieldKind::Blueprint => {
                        let self_id = draft.get_untracked().map(|d| d.id).unwrap_or_default();
                        view! {
                            <DropdownField
                                value=field.value.clone()
                                set_value=Callback::new(move |value| set_field_value(index, value))
                                options=reference_options(world.get_untracked().as_ref(), &self_id)
                                label="Default Value"
                            />
                        }
                        .into_any()
                    }
                };
                let option_rows = (field.kind == FieldKind::Select).then(|| {
                    let options = field.options.clone();
                    view! {
                        <div class="blueprint-editor__options">
                            <button
                                class="btn"
                                on:click=move |_| add_option_click(index)
                            >
                                "Add Option"
                            </button>
                            {options
                                .into_iter()
                                .enumerate()
                                .map(|(option_index, option)| {
                                    let remove_value = option.clone();
                                    view! {
                                        <div class="blueprint-editor__option">
                                            <ShortTextField
                                                value=option.clone()
                                                set_value=Callback::new(move |value| {
                                                    set_option_value(index, option_index, value);
                                                })
                                                placeholder="Value"
                                            />
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| {
                                                    remove_option_click(index, remove_value.clone());
                                                }
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                });
                view! {
                    <div class="blueprint-editor__field">
                        <div class="blueprint-editor__field-row">
                            <span class="blueprint-editor__field-chip">{chip}</span>
                            <DropdownField
                                value=field.kind.as_str().to_owned()
                                set_value=Callback::new(move |tag| set_field_kind(index, tag))
                                options=kind_options
                                label="Type"
                            />
                            <ShortTextField
                                value=field.name.clone()
                                set_value=Callback::new(move |value| set_field_name(index, value))
                                label="Name"
                                placeholder="Name"
                            />
                            {value_widget}
                            <button
                                class="btn btn--danger"
                                on:click=move |_| remove_field_click(index)
                            >
                                "Remove"
                            </button>
                        </div>
                        {option_rows}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Modal title=title on_close=on_close>
            <Show when=move || show_delete.get()>
                <DeletePopup
                    title=String::from("Delete Blueprint")
                    confirm_phrase=confirm_phrase()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                    busy=loading
                >
                    <p>
                        "Are you sure you want to delete this blueprint? "
                        "All connected objects will also be deleted, and the blueprint "
                        "will be removed from all worlds and campaigns."
                    </p>
                </DeletePopup>
            </Show>

            <Show
                when=move || draft.get().is_some()
                fallback=move || view! { <p class="dialog__loading">"Loading..."</p> }
            >
                <div class="editor-form">
                    <div class="editor-form__heading">
                        <h1>{heading}</h1>
                        <Show when=move || !is_edit()>
                            <ToggleField
                                value=speed_create
                                set_value=Callback::new(move |value| speed_create.set(value))
                                label="Speed Create"
                            />
                        </Show>
                    </div>

                    <TabGroup
                        tabs=vec!["General".to_owned(), "Fields".to_owned()]
                        current=tab
                        disabled=loading
                    />

                    <Show when=move || tab.get() == 0>
                        <div class="editor-form__section">
                            <ShortTextField
                                value=name
                                set_value=Callback::new(move |value| {
                                    touch();
                                    draft.update(|d| {
                                        if let Some(d) = d {
                                            d.name = value;
                                        }
                                    });
                                })
                                label="Name"
                                placeholder="Blueprint Name"
                            />
                            <LongTextField
                                value=description
                                set_value=Callback::new(move |value: String| {
                                    touch();
                                    draft.update(|d| {
                                        if let Some(d) = d {
                                            d.description =
                                                if value.is_empty() { None } else { Some(value) };
                                        }
                                    });
                                })
                                label="Description"
                                placeholder="Description"
                            />
                            <ToggleField
                                value=is_public
                                set_value=Callback::new(move |value| {
                                    touch();
                                    draft.update(|d| {
                                        if let Some(d) = d {
                                            d.is_public = value;
                                        }
                                    });
                                })
                                label="Public"
                            />
                        </div>
                    </Show>
                    <Show when=move || tab.get() == 1>
                        <div class="editor-form__section">
                            {field_rows}
                            <button class="btn" on:click=add_field_click>
                                "Add Field"
                            </button>
                        </div>
                    </Show>

                    <MessageBox message=error/>
                    <MessageBox message=dirty_warning kind=MessageKind::Warning/>

                    <div class="dialog__actions">
                        <Show
                            when=is_edit
                            fallback=move || {
                                view! {
                                    <button class="btn btn--danger" on:click=move |_| on_close.run(())>
                                        "Cancel"
                                    </button>
                                }
                            }
                        >
                            <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                                "Delete"
                            </button>
                        </Show>
                        <button
                            class="btn btn--primary"
                            disabled=move || loading.get() || !dirty.get()
                            on:click=move |_| save.run(())
                        >
                            {move || if is_edit() { "Save Changes" } else { "Create Blueprint" }}
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
