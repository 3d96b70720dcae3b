//! Modal editor for one context (a named free-text note on a world).
//!
//! DESIGN
//! ======
//! The editor owns a local draft cloned from the input entity (or a blank
//! template in create mode) and only writes back to the parent world on an
//! explicit save. Closing or cancelling never mutates the parent aggregate.
//! Persistence is deferred to the wizard save, which posts every nested
//! context; only deletes of already-persisted contexts hit the backend here.

#[cfg(test)]
#[path = "context_editor_test.rs"]
mod context_editor_test;

use leptos::prelude::*;

use crate::components::delete_popup::DeletePopup;
use crate::components::fields::{LongTextField, ShortTextField};
use crate::components::message_box::MessageBox;
use crate::components::modal::Modal;
use crate::net::types::{ContextResponse, NEW_ID, is_new};
use crate::state::world::{self, is_draft};
use crate::util::markdown::render_markdown_html;

pub(crate) fn blank_context() -> ContextResponse {
    ContextResponse {
        id: NEW_ID.to_owned(),
        name: String::new(),
        content: String::new(),
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn validate_context(context: &ContextResponse) -> Result<(), &'static str> {
    if context.name.trim().is_empty() {
        return Err("Context name is required.");
    }
    Ok(())
}

/// Whether deleting this context requires a backend call, or only removal
/// from the local draft.
pub(crate) fn delete_needs_network(id: &str) -> bool {
    !is_new(id) && !is_draft(id)
}

/// Modal create-or-edit dialog for a context inside the world wizard.
#[component]
pub fn ContextEditor(
    /// `None` opens in create mode with a fetched blank template.
    #[prop(into)] context: Signal<Option<ContextResponse>>,
    world: RwSignal<Option<crate::net::types::WorldResponse>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(None::<ContextResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let show_delete = RwSignal::new(false);

    // Clone the input into the draft, or fetch the blank template.
    Effect::new(move || {
        error.set(String::new());
        if let Some(existing) = context.get() {
            draft.set(Some(existing));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::context_get(NEW_ID).await {
                    Ok(template) => draft.set(Some(template)),
                    Err(e) => error.set(format!("Failed to fetch context data: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            draft.set(Some(blank_context()));
        }
    });

    let is_edit = move || context.get().is_some();

    let save = Callback::new(move |()| {
        if loading.get() {
            return;
        }
        let Some(mut ctx) = draft.get() else {
            return;
        };
        if let Err(msg) = validate_context(&ctx) {
            error.set(msg.to_owned());
            return;
        }
        error.set(String::new());
        ctx.id = world::merge_id(&ctx.id);
        world.update(|w| {
            if let Some(w) = w {
                world::merge_context(w, ctx);
            }
        });
        draft.set(None);
        on_close.run(());
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(ctx) = context.get_untracked() else {
            return;
        };
        if !delete_needs_network(&ctx.id) {
            world.update(|w| {
                if let Some(w) = w {
                    world::remove_context(w, &ctx.id);
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
                match crate::net::api::context_delete(&ctx.id).await {
                    Ok(()) => {
                        world.update(|w| {
                            if let Some(w) = w {
                                world::remove_context(w, &ctx.id);
                            }
                        });
                        show_delete.set(false);
                        on_close.run(());
                    }
                    Err(e) => error.set(format!("Failed to delete context: {e}")),
                }
                loading.set(false);
            });
        }
    });

    let title = Signal::derive(move || {
        if is_edit() { "Edit Context".to_owned() } else { "Create Context".to_owned() }
    });
    let name = Signal::derive(move || draft.get().map(|c| c.name).unwrap_or_default());
    let content = Signal::derive(move || draft.get().map(|c| c.content).unwrap_or_default());
    let preview = Signal::derive(move || render_markdown_html(&content.get()));
    let confirm_phrase = move || context.get_untracked().map(|c| c.name).unwrap_or_default();

    view! {
        <Modal title=title on_close=on_close>
            <Show when=move || show_delete.get()>
                <DeletePopup
                    title=String::from("Delete Context")
                    confirm_phrase=confirm_phrase()
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                    busy=loading
                >
                    <p>"Are you sure you want to delete this context? It will be removed from this world."</p>
                </DeletePopup>
            </Show>

            <Show
                when=move || draft.get().is_some()
                fallback=move || view! { <p class="dialog__loading">"Loading..."</p> }
            >
                <div class="editor-form">
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
                        placeholder="Context Name"
                    />
                    <LongTextField
                        value=content
                        set_value=Callback::new(move |value| {
                            draft.update(|d| {
                                if let Some(d) = d {
                                    d.content = value;
                                }
                            });
                        })
                        label="Content"
                        placeholder="Content"
                        rows=6
                    />
                    <Show when=move || !content.get().is_empty()>
                        <div class="editor-form__preview" inner_html=move || preview.get()></div>
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
                            {move || if is_edit() { "Save Changes" } else { "Create Context" }}
                        </button>
                    </div>
                </div>
            </Show>
        </Modal>
    }
}
