//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `pull.rs` — the fetch/enrich/allocate/store pipeline.
//! - `tools.rs` — codes lookup and preflight check.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod pull;
pub mod tools;

pub use pull::handle_pull;
pub use tools::{handle_check, handle_codes};
