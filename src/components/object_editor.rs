//! Modal editor for one object (a concrete instance of a blueprint).
//!
//! DESIGN
//! ======
//! Selecting a blueprint materializes the object's field instances as a
//! structural copy of the blueprint's definitions taken at that instant;
//! editing the blueprint afterwards never changes an existing object.
//! Like the context editor, persistence is deferred to the wizard save.

#[cfg(test)]
#[path = "object_editor_test.rs"]
mod object_editor_test;

use leptos::prelude::*;

use crate::components::delete_popup::DeletePopup;
use crate::components::fields::{DropdownField, LongTextField, NumberField, ShortTextField};
use crate::components::message_box::MessageBox;
use crate::components::modal::Modal;
use crate::components::tab_group::TabGroup;
use crate::net::types::{
    BlueprintResponse, CustomField, FieldKind, NEW_ID, ObjectResponse, WorldResponse, is_new,
};
use crate::state::world::{self, is_draft};

pub(crate) fn blank_object() -> ObjectResponse {
    ObjectResponse {
        id: NEW_ID.to_owned(),
        name: String::new(),
        description: None,
        blueprint: crate::components::blueprint_editor::blank_blueprint(),
        fields: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

/// Materialize field instances from a blueprint's definitions.
///
/// The copy is structural: the returned fields share no state with the
/// blueprint, so later blueprint edits leave existing objects untouched.
pub(crate) fn instantiate_fields(blueprint: &BlueprintResponse) -> Vec<CustomField> {
    blueprint.fields.clone()
}

pub(crate) fn validate_object(object: &ObjectResponse) -> Result<(), &'static str> {
    if object.name.trim().is_empty() {
        return Err("Object name is required.");
    }
    if is_new(&object.blueprint.id) || object.blueprint.id.is_empty() {
        return Err("A blueprint must be selected.");
    }
    Ok(())
}

/// Dropdown pairs for the blueprint picker: every blueprint attached to the
/// parent world.
pub(crate) fn picker_options(world: Option<&WorldResponse>) -> Vec<(String, String)> {
    world
        .map(|w| {
            w.blueprints
                .iter()
                .map(|b| (b.id.clone(), b.name.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether deleting this object requires a backend call, or only removal
/// from the local draft.
pub(crate) fn delete_needs_network(id: &str) -> bool {
    !is_new(id) && !is_draft(id)
}

/// Modal create-or-edit dialog for an object inside the world wizard.
#[component]
pub fn ObjectEditor(
    /// `None` opens in create mode with a fetched blank template.
    #[prop(into)] object: Signal<Option<ObjectResponse>>,
    world: RwSignal<Option<WorldResponse>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(None::<ObjectResponse>);
    let tab = RwSignal::new(0usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let show_delete = RwSignal::new(false);

    // Clone the input into the draft, or fetch the blank template.
    Effect::new(move || {
        error.set(String::new());
        if let Some(existing) = object.get() {
            draft.set(Some(existing));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::object_get(NEW_ID).await {
                    Ok(template) => draft.set(Some(template)),
                    Err(e) => error.set(format!("Failed to fetch object data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            draft.set(Some(blank_object()));
        }
    });

    let is_edit = move || object.get().is_some();

    let select_blueprint = move |id: String| {
        let Some(blueprint) = world
            .get_untracked()
            .and_then(|w| w.blueprints.iter().find(|b| b.id == id).cloned())
        else {
            return;
        };
        error.set(String::new());
        draft.update(|d| {
            if let Some(d) = d {
                d.fields = instantiate_fields(&blueprint);
                d.blueprint = blueprint;
            }
        });
    };

    let save = Callback::new(move |()| {
        if loading.get() {
            return;
        }
        let Some(mut obj) = draft.get() else {
            return;
        };
        if let Err(msg) = validate_object(&obj) {
            error.set(msg.to_owned());
            return;
        }
        error.set(String::new());
        obj.id = world::merge_id(&obj.id);
        world.update(|w| {
            if let Some(w) = w {
                world::merge_object(w, obj);
            }
        });
        draft.set(None);
        on_close.run(());
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(obj) = object.get_untracked() else {
            return;
        };
        if !delete_needs_network(&obj.id) {
            world.update(|w| {
                if let Some(w) = w {
                    world::remove_object(w, &obj.id);
                }
            });
            show_delete.set(false);
            on_close.run(());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::object_delete(&obj.id).await {
                    Ok(()) => {
                        world.update(|w| {
                            if let Some(w) = w {
                                world::remove_object(w, &obj.id);
                            }
                        });
                        show_delete.set(false);
                        on_close.run(());
                    }
                    Err(e) => error.set(format!("Failed to delete object: {e}")),
                }
                loading.set(false);
            });
        }
    });

    let set_field_value = move |index: usize, value: String| {
        draft.update(|d| {
            if let Some(d) = d {
                if let Some(field) = d.fields.get_mut(index) {
                    field.value = value;
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if is_edit() { "Edit Object".to_owned() } else { "Create Object".to_owned() }
    });
    let name = Signal::derive(move || draft.get().map(|o| o.name).unwrap_or_default());
    let description = Signal::derive(move || {
        draft
            .get()
            .and_then(|o| o.description)
            .unwrap_or_default()
    });
    let blueprint_id = Signal::derive(move || {
        draft
            .get()
            .map(|o| o.blueprint.id)
            .filter(|id| !is_new(id))
            .unwrap_or_default()
    });
    let blueprint_options =
        Signal::derive(move || picker_options(world.get().as_ref()));
    let confirm_phrase = move || object.get_untracked().map(|o| o.name).unwrap_or_default();

    let field_rows = move || {
        let fields = draft.get().map(|o| o.fields).unwrap_or_default();
        fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let chip = if field.name.is_empty() {
                    format!("Field {index}")
                } else {
                    field.name.clone()
                };
                let value_widget = match field.kind {
                    FieldKind::Text => view! {
                        <ShortTextField
                            value=field.value.clone()
                            set_value=Callback::new(move |value| set_field_value(index, value))
                            label="Current Value"
                            placeholder="Current Value"
                        />
                    }
                    .into_any(),
                    FieldKind::Number => view! {
                        <NumberField
                            value=field.value.clone()
                            set_value=Callback::new(move |value| set_field_value(index, value))
                            label="Current Value"
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
                                label="Current Value"
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
                                label="Current Value"
                            />
                        }
                        .into_any()
                    }
                    FieldKind::Blueprint => view! {
                        <DropdownField
                            value=field.value.clone()
                            set_value=Callback::new(move |value| set_field_value(index, value))
                            options=blueprint_options.get_untracked()
                            label="Current Value"
                        />
                    }
                    .into_any(),
                };
                view! {
                    <div class="object-editor__field">
                        <span class="object-editor__field-chip">{chip}</span>
                        {value_widget}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Modal title=title on_close=on_close>
            <Show when=move || show_delete.get()>
                <DeletePopup
                    title=String::from("Delete Object")
                    confirm_phrase=confirm_phrase()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                    busy=loading
                >
                    <p>"Are you sure you want to delete this object? It will be removed from this world."</p>
                </DeletePopup>
            </Show>

            <Show
                when=move || draft.get().is_some()
                fallback=move || view! { <p class="dialog__loading">"Loading..."</p> }
            >
                <div class="editor-form">
                    <TabGroup
                        tabs=vec!["General".to_owned(), "Fields".to_owned()]
                        current=tab
                        disabled=loading
                    />

                    <Show when=move || tab.get() == 0>
                        <div class="editor-form__section">
                            <DropdownField
                                value=blueprint_id
                                set_value=Callback::new(select_blueprint)
                                options=blueprint_options
                                label="Blueprint"
                            />
                            <ShortTextField
                                value=name
                                set_value=Callback::new(move |value| {
                                    error.set(String::new());
                                    draft.update(|d| {
                                        if let Some(d) = d {
                                            d.name = value;
                                        }
                                    });
                                })
                                label="Name"
                                placeholder="Object Name"
                            />
                            <LongTextField
                                value=description
                                set_value=Callback::new(move |value: String| {
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
                        </div>
                    </Show>
                    <Show when=move || tab.get() == 1>
                        <div class="editor-form__section">{field_rows}</div>
                    </Show>

                    <MessageBox message=error/>

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
                            disabled=move || loading.get()
                            on:click=move |_| save.run(())
                        >
                            {move || if is_edit() { "Save Changes" } else { "Create Object" }}
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
