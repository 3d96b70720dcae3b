//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch/save
//! failures degrade into inline messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BlueprintPayload, BlueprintResponse, ContextPayload, ContextResponse, HomeResponse,
    ObjectPayload, ObjectResponse, UserPayload, UserResponse, WorldPayload, WorldResponse,
};

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn entity_endpoint(kind: &str, id: &str) -> String {
    format!("/api/{kind}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn entity_delete_endpoint(kind: &str, id: &str) -> String {
    format!("/api/{kind}/{id}/delete")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_empty<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

// =============================================================
// Session lifecycle
// =============================================================

/// Validate the current session via `POST /api/authenticate`.
///
/// # Errors
///
/// Returns an error string when no valid session exists or on the server.
pub async fn authenticate() -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/authenticate").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Refresh an expired session via `POST /api/refresh`.
///
/// # Errors
///
/// Returns an error string when the refresh token is invalid or on the server.
pub async fn refresh() -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty("/api/refresh").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Sign in with email + password via `POST /api/login`.
///
/// # Errors
///
/// Returns an error string when the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json("/api/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SERVER_STUB.to_owned())
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns an error string when registration is rejected.
pub async fn register(username: &str, email: &str, password: &str) -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password
        });
        post_json("/api/register", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(SERVER_STUB.to_owned())
    }
}

/// Log out the current user by calling `POST /api/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/logout").send().await;
    }
}

// =============================================================
// Account
// =============================================================

/// Fetch the current account via `GET /api/account`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn account_get() -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/account").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Update profile or security fields via `POST /api/account`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn account_update(payload: &UserPayload) -> Result<UserResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/account", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch the landing-page aggregate via `GET /api/home`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn home_get() -> Result<HomeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/home").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

// =============================================================
// Worlds
// =============================================================

/// Fetch all of the user's worlds via `GET /api/worlds`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn worlds_all() -> Result<Vec<WorldResponse>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/worlds").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch one world (or a blank template for id `"new"`).
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn world_get(id: &str) -> Result<WorldResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&entity_endpoint("world", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

/// Create or update a world via `POST /api/world/{id}`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn world_save(id: &str, payload: &WorldPayload) -> Result<WorldResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&entity_endpoint("world", id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(SERVER_STUB.to_owned())
    }
}

// =============================================================
// Blueprints
// =============================================================

/// Fetch all of the user's blueprints via `GET /api/blueprints`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn blueprints_all() -> Result<Vec<BlueprintResponse>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/blueprints").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_STUB.to_owned())
    }
}

/// Fetch one blueprint (or a blank template for id `"new"`).
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn blueprint_get(id: &str) -> Result<BlueprintResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&entity_endpoint("blueprint", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

/// Create or update a blueprint via `POST /api/blueprint/{id}`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn blueprint_save(
    id: &str,
    payload: &BlueprintPayload,
) -> Result<BlueprintResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&entity_endpoint("blueprint", id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(SERVER_STUB.to_owned())
    }
}

/// Delete a blueprint via `GET /api/blueprint/{id}/delete`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn blueprint_delete(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&entity_delete_endpoint("blueprint", id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

// =============================================================
// Contexts
// =============================================================

/// Fetch one context (or a blank template for id `"new"`).
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn context_get(id: &str) -> Result<ContextResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&entity_endpoint("context", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

/// Create or update a context via `POST /api/context/{id}`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn context_save(id: &str, payload: &ContextPayload) -> Result<ContextResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&entity_endpoint("context", id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(SERVER_STUB.to_owned())
    }
}

/// Delete a context via `GET /api/context/{id}/delete`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn context_delete(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&entity_delete_endpoint("context", id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

// =============================================================
// Objects
// =============================================================

/// Fetch one object (or a blank template for id `"new"`).
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn object_get(id: &str) -> Result<ObjectResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&entity_endpoint("object", id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}

/// Create or update an object via `POST /api/object/{id}`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn object_save(id: &str, payload: &ObjectPayload) -> Result<ObjectResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&entity_endpoint("object", id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(SERVER_STUB.to_owned())
    }
}

/// Delete an object via `GET /api/object/{id}/delete`.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn object_delete(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&entity_delete_endpoint("object", id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_STUB.to_owned())
    }
}
