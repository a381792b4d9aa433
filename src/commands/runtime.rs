use crate::cli::{Cli, Commands};
use crate::domain::models::CheckOutput;
use crate::services::api::ScanService;
use crate::services::dashboard::Dashboard;
use crate::services::output::{print_json, print_one};
use crate::services::presenter::{present, render_html};
use crate::services::status::error_text;
use anyhow::Context;
use tracing::debug;

/// Text mode output comes from the console renderer as the workflow runs;
/// JSON mode prints one envelope once the call settles.
pub async fn handle_runtime_commands(
    cli: &Cli,
    dashboard: &Dashboard,
    service: &dyn ScanService,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init { folder } => {
            let result = dashboard.baseline.initialize_baseline(folder).await?;
            if cli.json {
                print_json(&result)?;
            }
        }
        Commands::Check { folder, html } => {
            let report = dashboard.integrity.check_integrity(folder).await?;
            let view = dashboard
                .integrity
                .visible_results()
                .unwrap_or_else(|| present(&report));
            if let Some(path) = html {
                std::fs::write(path, render_html(&view))
                    .with_context(|| format!("failed to write {}", path.display()))?;
                debug!(path = %path.display(), "wrote results fragment");
            }
            if cli.json {
                let out = CheckOutput {
                    report,
                    summary: view.summary,
                };
                print_json(&out)?;
            }
        }
        Commands::Health => {
            let health = match service.health().await {
                Ok(h) => h,
                Err(err) => {
                    // Not a workflow, so no status region has shown it yet.
                    if !cli.json {
                        println!("[health] {}", error_text(&err));
                    }
                    return Err(err.into());
                }
            };
            print_one(cli.json, health, |h| match &h.message {
                Some(m) => format!("{}: {}", h.status, m),
                None => h.status.clone(),
            })?;
        }
        Commands::Session => anyhow::bail!("session is not a one-shot command"),
    }
    Ok(())
}
