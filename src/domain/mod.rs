//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — location-area records decoded from the catalog.
//! - `constants.rs` — hardcoded endpoints, page size and console strings.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no network or console side effects.

pub mod constants;
pub mod models;
