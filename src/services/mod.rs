//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `http.rs` — backoff GET client over reqwest::blocking.
//! - `jobs.rs` — cursor-paginated shipment-job fetch.
//! - `enrich.rs` — per-job carrier organization lookup + merge.
//! - `allocation.rs` — static cost-allocation code tables (pure).
//! - `sink.rs` — timestamped JSON artifacts to disk or S3.
//! - `secrets.rs` — API key resolution (flag/config/Secrets Manager).
//! - `storage.rs` — config load + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod allocation;
pub mod enrich;
pub mod http;
pub mod jobs;
pub mod output;
pub mod secrets;
pub mod sink;
pub mod storage;
