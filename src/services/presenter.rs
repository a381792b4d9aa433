//! Pure transformation of an integrity report into display-ready groups.

use crate::domain::models::{
    Category, DisplayGroup, IntegrityReport, ListItem, ResultsView, SummaryCounts,
};

/// Escapes the five HTML-significant characters. Paths come from a filesystem
/// that may be attacker-controlled, so every path goes through here.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Total and unchanged are taken from the service verbatim; the three change
/// counts are list lengths so they always agree with what is rendered.
pub fn present(report: &IntegrityReport) -> ResultsView {
    let summary = SummaryCounts {
        total_files: report.total_files,
        unchanged: report.unchanged_count,
        modified: report.modified.len(),
        added: report.added.len(),
        deleted: report.deleted.len(),
    };
    let groups = Category::ALL
        .iter()
        .map(|&category| {
            let paths = match category {
                Category::Modified => &report.modified,
                Category::Added => &report.added,
                Category::Deleted => &report.deleted,
            };
            group(category, paths)
        })
        .collect();
    ResultsView { summary, groups }
}

fn group(category: Category, paths: &[String]) -> DisplayGroup {
    let items = if paths.is_empty() {
        vec![ListItem::Placeholder {
            message: category.empty_message(),
        }]
    } else {
        paths
            .iter()
            .map(|p| ListItem::Entry {
                marker: category.marker(),
                path: escape_html(p),
            })
            .collect()
    };
    DisplayGroup { category, items }
}

pub fn list_item_html(item: &ListItem) -> String {
    match item {
        ListItem::Entry { marker, path } => format!("<li>{} {}</li>", marker, path),
        ListItem::Placeholder { message } => {
            format!("<li class=\"empty-message\">{}</li>", message)
        }
    }
}

/// The results region as an HTML fragment: summary counters plus one list per
/// category.
pub fn render_html(view: &ResultsView) -> String {
    let s = &view.summary;
    let mut out = vec![
        "<div id=\"resultsContainer\">".to_string(),
        format!("  <span id=\"totalFiles\">{}</span>", s.total_files),
        format!("  <span id=\"unchangedCount\">{}</span>", s.unchanged),
        format!("  <span id=\"modifiedCount\">{}</span>", s.modified),
        format!("  <span id=\"addedCount\">{}</span>", s.added),
        format!("  <span id=\"deletedCount\">{}</span>", s.deleted),
    ];
    for g in &view.groups {
        let items: String = g.items.iter().map(list_item_html).collect();
        out.push(format!("  <ul id=\"{}\">{}</ul>", g.category.list_id(), items));
    }
    out.push("</div>".to_string());
    out.join("\n") + "\n"
}

/// The check workflow's results area: the last view and whether it is shown.
#[derive(Debug, Default)]
pub struct ResultsRegion {
    view: Option<ResultsView>,
    visible: bool,
}

impl ResultsRegion {
    /// Recomputes the view from `report` and makes the region visible.
    pub fn display(&mut self, report: &IntegrityReport) -> &ResultsView {
        self.visible = true;
        self.view.insert(present(report))
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The view currently on screen, if any.
    pub fn visible_view(&self) -> Option<&ResultsView> {
        self.view.as_ref().filter(|_| self.is_visible())
    }
}
