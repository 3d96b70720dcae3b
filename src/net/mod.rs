//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP endpoints and `types` defines the shared wire
//! schema used by pages, editors, and state helpers.

pub mod api;
pub mod types;
