//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — one-shot init/check/health.
//! - `session.rs` — interactive stdin console with overlapping requests.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;
pub mod session;

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::services::api::{HttpScanService, ScanService};
use crate::services::dashboard::Dashboard;
use crate::services::render::{ConsoleRenderer, Renderer, SilentRenderer};
use std::rc::Rc;
use tracing::debug;

pub use runtime::handle_runtime_commands;
pub use session::run_session;

/// Must run inside a `LocalSet`: workflows spawn local tasks.
pub async fn dispatch(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let http = HttpScanService::new(&settings.api_base)?;
    debug!(api_base = http.base(), "scanning service client ready");
    let service: Rc<dyn ScanService> = Rc::new(http);
    match &cli.command {
        Commands::Session => {
            let dashboard = Rc::new(Dashboard::new(service, Rc::new(ConsoleRenderer), settings));
            run_session(dashboard).await
        }
        _ => {
            let renderer: Rc<dyn Renderer> = if cli.json {
                Rc::new(SilentRenderer)
            } else {
                Rc::new(ConsoleRenderer)
            };
            let dashboard = Dashboard::new(Rc::clone(&service), renderer, settings);
            handle_runtime_commands(cli, &dashboard, service.as_ref()).await
        }
    }
}
