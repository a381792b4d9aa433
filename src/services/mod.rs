//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `api.rs` — `ScanService` contract + reqwest-backed HTTP client.
//! - `baseline.rs` — baseline initialization workflow.
//! - `integrity.rs` — integrity check workflow and the shared check target.
//! - `dashboard.rs` — wires both workflows plus the health probe.
//! - `status.rs` — per-region status messages with success auto-clear.
//! - `sequence.rs` — request tickets used to drop superseded responses.
//! - `presenter.rs` — report classification, HTML escaping, results region.
//! - `render.rs` — terminal/silent renderers for status and results.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod api;
pub mod baseline;
pub mod dashboard;
pub mod integrity;
pub mod output;
pub mod presenter;
pub mod render;
pub mod sequence;
pub mod status;

#[cfg(test)]
mod fake;
