use crate::domain::constants::{ADDED_MARKER, DELETED_MARKER, MODIFIED_MARKER};
use crate::domain::errors::FimError;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// A folder path that passed client-side validation (non-empty once trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanTarget(String);

impl ScanTarget {
    pub fn parse(raw: &str) -> Result<Self, FimError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FimError::EmptyPath);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// --- wire DTOs ---

#[derive(Debug, Serialize)]
pub struct FolderRequest<'a> {
    pub folder: &'a str,
}

/// Success body of `init-baseline`; `status` is checked before decoding.
#[derive(Debug, Deserialize)]
pub struct InitBaselineResponse {
    #[serde(default)]
    pub message: String,
    pub files_scanned: u64,
}

#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    pub timestamp: String,
    pub total_files: u64,
    pub unchanged_count: u64,
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

// --- results ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaselineResult {
    pub folder: String,
    pub files_scanned: u64,
    pub message: String,
}

/// The service's classification of a folder against its baseline, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub folder: String,
    /// ISO-8601 as sent by the service.
    pub timestamp: String,
    pub total_files: u64,
    pub unchanged_count: u64,
    pub modified: Vec<String>,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: Option<String>,
}

// --- status ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn idle() -> Self {
        Self {
            text: String::new(),
            kind: StatusKind::Idle,
        }
    }

    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Loading,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    /// Only success messages expire on their own.
    pub fn auto_clears(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// The UI region a status message belongs to; one per workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Baseline,
    Check,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Baseline => "baseline",
            Region::Check => "check",
        }
    }
}

// --- presentation ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Modified,
    Added,
    Deleted,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Modified, Category::Added, Category::Deleted];

    pub fn marker(self) -> &'static str {
        match self {
            Category::Modified => MODIFIED_MARKER,
            Category::Added => ADDED_MARKER,
            Category::Deleted => DELETED_MARKER,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Category::Modified => "No modified files",
            Category::Added => "No new files",
            Category::Deleted => "No deleted files",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Category::Modified => "Modified files",
            Category::Added => "Added files",
            Category::Deleted => "Deleted files",
        }
    }

    /// Element id of the list in the HTML results region.
    pub fn list_id(self) -> &'static str {
        match self {
            Category::Modified => "modifiedList",
            Category::Added => "addedList",
            Category::Deleted => "deletedList",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListItem {
    /// `path` is already HTML-escaped.
    Entry {
        marker: &'static str,
        path: String,
    },
    Placeholder {
        message: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGroup {
    pub category: Category,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total_files: u64,
    pub unchanged: u64,
    pub modified: usize,
    pub added: usize,
    pub deleted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub summary: SummaryCounts,
    pub groups: Vec<DisplayGroup>,
}

#[derive(Serialize)]
pub struct CheckOutput {
    pub report: IntegrityReport,
    pub summary: SummaryCounts,
}
