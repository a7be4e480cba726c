//! Service layer containing business logic and console helpers.
//!
//! ## Service map
//! - `input.rs` — console line normalization.
//! - `pager.rs` — page cursor and page-to-index-range math.
//! - `output.rs` — help banner and page listing writers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Writers take `&mut dyn Write` so handlers stay testable.
//! - Keep command handlers thin; delegate to services.

pub mod input;
pub mod output;
pub mod pager;
