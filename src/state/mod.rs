//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `list`, `world`) so individual
//! components can depend on small focused models, and the interesting
//! logic stays in plain functions that test without a browser.

pub mod auth;
pub mod list;
pub mod world;
