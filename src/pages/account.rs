//! Account page with profile and security forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile edits the display name; security changes email or password and
//! always requires the current password. Both post to the same account
//! endpoint with partial payloads.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::fields::ShortTextField;
use crate::components::message_box::MessageBox;
use crate::components::tab_group::TabGroup;
use crate::net::types::UserPayload;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn profile_payload(username: &str) -> Result<UserPayload, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Please enter a username.");
    }
    Ok(UserPayload {
        username: Some(username.to_owned()),
        ..UserPayload::default()
    })
}

pub(crate) fn security_payload(
    email: &str,
    password_current: &str,
    password_new: &str,
) -> Result<UserPayload, &'static str> {
    let email = email.trim();
    if email.is_empty() || password_current.is_empty() {
        return Err("Please fill in all fields.");
    }
    Ok(UserPayload {
        email: Some(email.to_owned()),
        password_current: Some(password_current.to_owned()),
        password_new: if password_new.is_empty() {
            None
        } else {
            Some(password_new.to_owned())
        },
        ..UserPayload::default()
    })
}

/// Account management page with Profile and Security tabs.
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let tab = RwSignal::new(0usize);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password_current = RwSignal::new(String::new());
    let password_new = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    // Prefill the forms from the account endpoint.
    #[cfg(feature = "hydrate")]
    {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::account_get().await {
                Ok(user) => {
                    username.set(user.username.clone());
                    email.set(user.email.clone().unwrap_or_default());
                }
                Err(e) => error.set(format!("Failed to load profile: {e}")),
            }
            loading.set(false);
        });
    }

    let submit_payload = move |payload: UserPayload| {
        loading.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::account_update(&payload).await {
                Ok(user) => {
                    username.set(user.username.clone());
                    email.set(user.email.clone().unwrap_or_default());
                    password_current.set(String::new());
                    password_new.set(String::new());
                    auth.update(|a| a.user = Some(user));
                }
                Err(e) => error.set(format!("Failed to update account: {e}")),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            loading.set(false);
        }
    };

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        match profile_payload(&username.get()) {
            Ok(payload) => submit_payload(payload),
            Err(msg) => error.set(msg.to_owned()),
        }
    };

    let on_security_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        match security_payload(&email.get(), &password_current.get(), &password_new.get()) {
            Ok(payload) => submit_payload(payload),
            Err(msg) => error.set(msg.to_owned()),
        }
    };

    view! {
        <div class="account-page">
            <h1>"Account"</h1>
            <TabGroup
                tabs=vec!["Profile".to_owned(), "Security".to_owned()]
                current=tab
                disabled=loading
            />

            <Show when=move || tab.get() == 0>
                <form class="account-form" on:submit=on_profile_submit>
                    <ShortTextField
                        value=username
                        set_value=Callback::new(move |value| username.set(value))
                        label="Username"
                        placeholder="Username"
                        disabled=loading
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        "Save Profile"
                    </button>
                </form>
            </Show>
            <Show when=move || tab.get() == 1>
                <form class="account-form" on:submit=on_security_submit>
                    <ShortTextField
                        value=email
                        set_value=Callback::new(move |value| email.set(value))
                        label="Email"
                        placeholder="Email"
                        disabled=loading
                    />
                    <label class="field field--text">
                        <span class="field__label">"Current Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || password_current.get()
                            on:input=move |ev| password_current.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field field--text">
                        <span class="field__label">"New Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            prop:value=move || password_new.get()
                            on:input=move |ev| password_new.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        "Save Security Settings"
                    </button>
                </form>
            </Show>

            <MessageBox message=error/>
            <a class="btn account-page__back" href="/">"Back to Home"</a>
        </div>
    }
}
