//! World library page listing the user's worlds.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::generic_list::GenericList;
use crate::components::message_box::MessageBox;
use crate::net::types::WorldResponse;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

fn world_details(world: WorldResponse) -> impl IntoView {
    let visibility = if world.settings.is_public { "Public" } else { "Private" };
    let creator = world
        .creator
        .as_ref()
        .map(|user| format!("Created by {}", user.username))
        .unwrap_or_default();
    view! {
        <div class="codex-card">
            <h5 class="codex-card__title">{world.name}</h5>
            <p class="codex-card__text">{world.description.unwrap_or_default()}</p>
            <p class="codex-card__meta">{visibility}</p>
            <p class="codex-card__meta">{format!("{} Contexts", world.contexts.len())}</p>
            <p class="codex-card__meta">{format!("{} Blueprints", world.blueprints.len())}</p>
            <p class="codex-card__meta">{format!("{} Objects", world.objects.len())}</p>
            <p class="codex-card__meta">{creator}</p>
        </div>
    }
}

/// World library: searchable, paginated list with create and edit actions.
#[component]
pub fn WorldsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let worlds = RwSignal::new(Vec::<WorldResponse>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let fetch_worlds = move || {
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::worlds_all().await {
                    Ok(data) => worlds.set(data),
                    Err(_) => {
                        error.set("Failed to load worlds. Please try again later.".to_owned());
                    }
                }
                loading.set(false);
            });
        }
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            fetch_worlds();
        }
    });

    // Navigation requests are drained by an effect so the router handle
    // stays out of the Send + Sync callbacks.
    let nav_request = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(route) = nav_request.get() {
            nav_request.set(None);
            navigate(&route, NavigateOptions::default());
        }
    });

    view! {
        <div class="worlds-page">
            <h3>"Your Worlds"</h3>
            <p>"Here you can manage your worlds, create new ones, and explore existing worlds."</p>

            <GenericList
                items=worlds
                item_label="world"
                get_name=|world: &WorldResponse| world.name.clone()
                render_details=world_details
                on_refresh=Callback::new(move |()| fetch_worlds())
                on_create=Callback::new(move |()| {
                    nav_request.set(Some("/worlds/new".to_owned()));
                })
                on_edit=Callback::new(move |world: WorldResponse| {
                    nav_request.set(Some(format!("/worlds/{}", world.id)));
                })
                loading=loading
                view_selector=true
                limit_selector=true
                pagination=true
            />

            <MessageBox message=error/>
        </div>
    }
}
