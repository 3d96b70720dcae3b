//! World wizard page — multi-tab editing of one world aggregate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the world named by the route (the `"new"` sentinel for creation),
//! snapshots it as the dirty-comparison baseline, and coordinates the
//! multi-step save: nested contexts and objects are created first, then the
//! world is posted referencing their ids. The save is ordered but not
//! atomic; a failed step halts the rest and already-created entities are
//! not rolled back.

#[cfg(test)]
#[path = "world_wizard_test.rs"]
mod world_wizard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::fields::{LongTextField, ShortTextField, ToggleField};
use crate::components::message_box::{MessageBox, MessageKind};
use crate::components::tab_group::{TabGroup, TabOrientation};
use crate::components::world_codex::WorldCodex;
use crate::net::types::{ContextPayload, ContextResponse, NEW_ID, ObjectPayload, ObjectResponse, WorldResponse};
use crate::state::auth::AuthState;
use crate::state::world;
use crate::util::auth::install_unauth_redirect;

/// Tab set for the wizard; the Finish step only exists while creating.
pub(crate) fn wizard_tabs(creating: bool) -> Vec<String> {
    let mut tabs = vec![
        "Display".to_owned(),
        "Settings".to_owned(),
        "Codex".to_owned(),
    ];
    if creating {
        tabs.push("Finish".to_owned());
    }
    tabs
}

pub(crate) fn context_payload(context: &ContextResponse) -> ContextPayload {
    ContextPayload {
        name: context.name.clone(),
        content: context.content.clone(),
    }
}

pub(crate) fn object_payload(object: &ObjectResponse) -> ObjectPayload {
    ObjectPayload {
        name: object.name.clone(),
        description: object.description.clone().unwrap_or_default(),
        blueprint_id: object.blueprint.id.clone(),
        fields: object.fields.clone(),
    }
}

/// Multi-step save: contexts, then objects, then the world itself.
///
/// Each nested batch is issued concurrently and any single failure fails
/// the whole step; completed steps are not rolled back.
#[cfg(feature = "hydrate")]
async fn persist_world(draft: WorldResponse) -> Result<WorldResponse, String> {
    use futures::future::try_join_all;

    let context_ids = try_join_all(draft.contexts.iter().map(|context| {
        let payload = context_payload(context);
        async move {
            crate::net::api::context_save(NEW_ID, &payload)
                .await
                .map(|saved| saved.id)
        }
    }))
    .await?;

    let object_ids = try_join_all(draft.objects.iter().map(|object| {
        let payload = object_payload(object);
        async move {
            crate::net::api::object_save(NEW_ID, &payload)
                .await
                .map(|saved| saved.id)
        }
    }))
    .await?;

    let payload = world::save_payload(&draft, context_ids, object_ids);
    crate::net::api::world_save(&draft.id, &payload).await
}

/// Wizard page for creating or editing one world.
#[component]
pub fn WorldWizardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let params = use_params_map();
    let route_id = move || params.read().get("id").unwrap_or_else(|| NEW_ID.to_owned());
    let creating = move || route_id() == NEW_ID;

    let world = RwSignal::new(None::<WorldResponse>);
    let baseline = RwSignal::new(None::<WorldResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let current_tab = RwSignal::new(0usize);

    // Fetch the world whenever the route id changes and snapshot it as the
    // baseline for dirty comparison.
    Effect::new(move || {
        let id = route_id();
        current_tab.set(0);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::world_get(&id).await {
                    Ok(data) => {
                        world.set(Some(data.clone()));
                        baseline.set(Some(data));
                    }
                    Err(e) => error.set(format!("Failed to fetch world data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let dirty = Memo::new(move |_| match (world.get(), baseline.get()) {
        (Some(current), Some(snapshot)) => world::is_dirty(&current, &snapshot),
        _ => false,
    });

    // Route to visit once an in-flight save lands; drained by an effect so
    // the router handle stays out of the Send + Sync callbacks.
    let nav_request = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(route) = nav_request.get() {
            nav_request.set(None);
            navigate(&route, NavigateOptions::default());
        }
    });

    let save = Callback::new(move |after: Option<String>| {
        if loading.get_untracked() {
            return;
        }
        let Some(draft) = world.get_untracked() else {
            return;
        };
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match persist_world(draft).await {
                    Ok(saved) => {
                        world.set(Some(saved.clone()));
                        baseline.set(Some(saved));
                        if let Some(route) = after {
                            nav_request.set(Some(route));
                        }
                    }
                    Err(e) => error.set(format!("Failed to save world data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, after);
        }
    });

    let reset = move |_| {
        let (Some(current), Some(snapshot)) = (world.get_untracked(), baseline.get_untracked())
        else {
            return;
        };
        error.set(String::new());
        world.set(Some(world::reset_draft(&current, &snapshot)));
    };

    let exit = move |_| {
        if dirty.get_untracked() {
            return;
        }
        nav_request.set(Some("/worlds".to_owned()));
    };

    let tabs = Signal::derive(move || wizard_tabs(creating()));
    let title = move || if creating() { "Create World" } else { "Edit World" };
    let name = Signal::derive(move || world.get().map(|w| w.name).unwrap_or_default());
    let description = Signal::derive(move || {
        world
            .get()
            .and_then(|w| w.description)
            .unwrap_or_default()
    });
    let is_public =
        Signal::derive(move || world.get().map(|w| w.settings.is_public).unwrap_or_default());
    let dirty_warning = Signal::derive(move || {
        if dirty.get() { "You have unsaved changes.".to_owned() } else { String::new() }
    });

    view! {
        <div class="wizard-page">
            <header class="wizard-page__header">
                <button
                    class="btn wizard-page__exit"
                    disabled=move || dirty.get() || loading.get()
                    on:click=exit
                >
                    "Exit to Library"
                </button>
                <h3 class="wizard-page__title">{title}</h3>
            </header>

            <div class="wizard-page__body">
                <TabGroup
                    tabs=tabs
                    current=current_tab
                    orientation=TabOrientation::Vertical
                    disabled=loading
                />

                <div class="wizard-page__content">
                    <Show
                        when=move || world.get().is_some() && !loading.get()
                        fallback=move || view! { <p class="wizard-page__loading">"Loading..."</p> }
                    >
                        <Show when=move || current_tab.get() == 0>
                            <div class="wizard-page__tab">
                                <h2>"General World Settings"</h2>
                                <ShortTextField
                                    value=name
                                    set_value=Callback::new(move |value| {
                                        world.update(|w| {
                                            if let Some(w) = w {
                                                w.name = value;
                                            }
                                        });
                                    })
                                    label="World Name"
                                    placeholder="Enter world name"
                                />
                                <LongTextField
                                    value=description
                                    set_value=Callback::new(move |value: String| {
                                        world.update(|w| {
                                            if let Some(w) = w {
                                                w.description =
                                                    if value.is_empty() { None } else { Some(value) };
                                            }
                                        });
                                    })
                                    label="World Description"
                                    placeholder="Enter a brief description of your world"
                                />
                            </div>
                        </Show>
                        <Show when=move || current_tab.get() == 1>
                            <div class="wizard-page__tab">
                                <h2>"World Settings"</h2>
                                <ToggleField
                                    value=is_public
                                    set_value=Callback::new(move |value| {
                                        world.update(|w| {
                                            if let Some(w) = w {
                                                w.settings.is_public = value;
                                            }
                                        });
                                    })
                                    label="Public"
                                />
                            </div>
                        </Show>
                        <Show when=move || current_tab.get() == 2>
                            <div class="wizard-page__tab">
                                <WorldCodex world=world/>
                            </div>
                        </Show>
                        <Show when=move || creating() && current_tab.get() == 3>
                            <div class="wizard-page__tab wizard-page__finish">
                                <h2>"Next Steps"</h2>
                                <p>
                                    "Your world, "
                                    <strong>{name}</strong>
                                    ", will now be created. What would you like to do next?"
                                </p>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || loading.get()
                                    on:click=move |_| save.run(Some("/worlds".to_owned()))
                                >
                                    "Save and go to library"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || loading.get()
                                    on:click=move |_| save.run(Some("/".to_owned()))
                                >
                                    "Save and go home"
                                </button>
                            </div>
                        </Show>
                    </Show>

                    <MessageBox message=error/>
                </div>
            </div>

            <footer class="wizard-page__footer">
                <button
                    class="btn btn--danger"
                    disabled=move || !dirty.get() || loading.get()
                    on:click=reset
                >
                    "Reset"
                </button>
                <MessageBox message=dirty_warning kind=MessageKind::Warning/>
                <button
                    class="btn btn--primary"
                    disabled=move || !dirty.get() || loading.get()
                    on:click=move |_| save.run(None)
                >
                    "Save"
                </button>
            </footer>
        </div>
    }
}
