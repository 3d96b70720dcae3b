//! Authentication page with login and register forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only guest route. A successful login or registration
//! establishes the session server-side; the page then stores the returned
//! user in the shared auth context and leaves for the home route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::message_box::MessageBox;
use crate::state::auth::AuthState;
use crate::util::auth::install_guest_redirect;

pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Login/register page with a mode toggle.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_guest_redirect(auth, navigate);

    let register_mode = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                }
                Err(e) => error.set(format!("Login failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&input.username, &input.email, &input.password).await {
                Ok(user) => {
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                }
                Err(e) => error.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    let toggle_mode = move |_| {
        error.set(String::new());
        register_mode.update(|m| *m = !*m);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Worldsmith"</h1>
                <Show
                    when=move || register_mode.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_login>
                                <h2>"Login"</h2>
                                <input
                                    class="auth-input"
                                    type="email"
                                    placeholder="Email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="auth-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Login"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_register>
                        <h2>"Register"</h2>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm Password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                </Show>

                <MessageBox message=error/>

                <button class="btn auth-card__toggle" on:click=toggle_mode>
                    {move || {
                        if register_mode.get() {
                            "Already have an account? Login"
                        } else {
                            "Need an account? Register"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
