//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep wire DTOs and report structs in one place.
//! - Separate what the scanning service sends from what the client displays.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — scan target, baseline/integrity reports, status, display groups.
//! - `errors.rs` — the client error taxonomy and its stable codes.
//! - `constants.rs` — endpoint paths, status texts, category markers.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
