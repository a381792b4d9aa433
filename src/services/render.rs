//! Output surfaces for workflow state.
//!
//! Workflows never print. They hand `StatusMessage`s and `ResultsView`s to a
//! `Renderer`, which decides how (and whether) they become visible.

use crate::domain::models::{ListItem, Region, ResultsView, StatusKind, StatusMessage};
use tracing::debug;

pub trait Renderer {
    fn show_status(&self, region: Region, status: &StatusMessage);
    fn show_results(&self, view: &ResultsView);
    fn hide_results(&self);
}

/// Human-readable terminal output on stdout.
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn show_status(&self, region: Region, status: &StatusMessage) {
        match status_line(region, status) {
            Some(line) => println!("{}", line),
            None => debug!(region = region.label(), "status cleared"),
        }
    }

    fn show_results(&self, view: &ResultsView) {
        for line in results_lines(view) {
            println!("{}", line);
        }
    }

    fn hide_results(&self) {
        debug!("results hidden");
    }
}

/// Used under `--json`: stdout carries only the final envelope.
pub struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn show_status(&self, region: Region, status: &StatusMessage) {
        debug!(region = region.label(), kind = ?status.kind, text = %status.text, "status");
    }

    fn show_results(&self, view: &ResultsView) {
        debug!(total = view.summary.total_files, "results shown");
    }

    fn hide_results(&self) {
        debug!("results hidden");
    }
}

pub fn status_line(region: Region, status: &StatusMessage) -> Option<String> {
    if status.kind == StatusKind::Idle {
        return None;
    }
    Some(format!("[{}] {}", region.label(), status.text))
}

pub fn results_lines(view: &ResultsView) -> Vec<String> {
    let s = &view.summary;
    let mut out = vec![
        format!("Total files:  {}", s.total_files),
        format!("Unchanged:    {}", s.unchanged),
        format!("Modified:     {}", s.modified),
        format!("Added:        {}", s.added),
        format!("Deleted:      {}", s.deleted),
    ];
    for group in &view.groups {
        out.push(format!("{}:", group.category.heading()));
        for item in &group.items {
            match item {
                ListItem::Entry { marker, path } => out.push(format!("  {} {}", marker, path)),
                ListItem::Placeholder { message } => out.push(format!("  {}", message)),
            }
        }
    }
    out
}
