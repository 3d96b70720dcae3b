//! Landing page showing the current user and their campaign summaries.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::generic_list::GenericList;
use crate::components::message_box::MessageBox;
use crate::net::types::CampaignCard;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

fn campaign_details(campaign: CampaignCard) -> impl IntoView {
    let visibility = if campaign.is_public { "Public" } else { "Private" };
    view! {
        <div class="codex-card">
            <h5 class="codex-card__title">{campaign.name}</h5>
            <p class="codex-card__text">{campaign.description.unwrap_or_default()}</p>
            <p class="codex-card__meta">{visibility}</p>
        </div>
    }
}

/// Authenticated landing route.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let campaigns = RwSignal::new(Vec::<CampaignCard>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::home_get().await {
                Ok(home) => {
                    auth.update(|a| a.user = Some(home.user));
                    campaigns.set(home.campaigns);
                }
                Err(_) => error.set("Failed to load the home page. Please try again later.".to_owned()),
            }
            loading.set(false);
        });
    }

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Worldsmith"</span>
                <a class="btn" href="/worlds">"Worlds"</a>
                <a class="btn" href="/account">"Account"</a>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{username}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <MessageBox message=error/>

            <section class="home-page__campaigns">
                <h3>"Your Campaigns"</h3>
                <GenericList
                    items=campaigns
                    item_label="campaign"
                    get_name=|campaign: &CampaignCard| campaign.name.clone()
                    render_details=campaign_details
                    loading=loading
                    search=false
                />
            </section>
        </div>
    }
}
