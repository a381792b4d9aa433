use crate::domain::constants::{CHECK_LOADING_TEXT, SUCCESS_GLYPH};
use crate::domain::errors::FimError;
use crate::domain::models::{IntegrityReport, ResultsView, ScanTarget, StatusMessage};
use crate::services::api::ScanService;
use crate::services::presenter::ResultsRegion;
use crate::services::render::Renderer;
use crate::services::sequence::RequestSequence;
use crate::services::status::{error_text, StatusNotifier};
use chrono::{DateTime, Local, NaiveDateTime};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// The check workflow's folder input. The baseline workflow writes into it after
/// a successful initialization.
#[derive(Debug, Clone, Default)]
pub struct TargetField(Rc<RefCell<String>>);

impl TargetField {
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

/// Requests a fresh scan and shows the classified diff.
pub struct IntegrityChecker {
    service: Rc<dyn ScanService>,
    status: StatusNotifier,
    renderer: Rc<dyn Renderer>,
    results: RefCell<ResultsRegion>,
    target: TargetField,
    sequence: RequestSequence,
}

impl IntegrityChecker {
    pub fn new(
        service: Rc<dyn ScanService>,
        status: StatusNotifier,
        renderer: Rc<dyn Renderer>,
        target: TargetField,
        drop_stale: bool,
    ) -> Self {
        Self {
            service,
            status,
            renderer,
            results: RefCell::new(ResultsRegion::default()),
            target,
            sequence: RequestSequence::new(drop_stale),
        }
    }

    /// On success the report goes to the presenter; on any failure the results
    /// region is hidden so no stale diff stays next to the error.
    pub async fn check_integrity(&self, raw_path: &str) -> Result<IntegrityReport, FimError> {
        let target = match ScanTarget::parse(raw_path) {
            Ok(t) => t,
            Err(err) => {
                self.fail(&err);
                return Err(err);
            }
        };
        let ticket = self.sequence.issue();

        self.status.show(StatusMessage::loading(CHECK_LOADING_TEXT));
        let outcome = self.service.check(&target).await;

        if self.sequence.is_stale(ticket) {
            debug!(folder = %target, "dropping superseded check response");
            return outcome;
        }
        match &outcome {
            Ok(report) => {
                debug!(
                    folder = %target,
                    modified = report.modified.len(),
                    added = report.added.len(),
                    deleted = report.deleted.len(),
                    "integrity check finished"
                );
                self.status.show(StatusMessage::success(format!(
                    "{} Scan completed at {}",
                    SUCCESS_GLYPH,
                    format_time_of_day(&report.timestamp)
                )));
                let mut results = self.results.borrow_mut();
                let view = results.display(report);
                self.renderer.show_results(view);
            }
            Err(err) => {
                warn!(folder = %target, error = %err, "integrity check failed");
                self.fail(err);
            }
        }
        outcome
    }

    /// Checks whatever the target field currently holds.
    pub async fn check_current_target(&self) -> Result<IntegrityReport, FimError> {
        let raw = self.target.get();
        self.check_integrity(&raw).await
    }

    fn fail(&self, err: &FimError) {
        self.status.show(StatusMessage::error(error_text(err)));
        self.results.borrow_mut().hide();
        self.renderer.hide_results();
    }

    pub fn status(&self) -> &StatusNotifier {
        &self.status
    }

    pub fn target(&self) -> &TargetField {
        &self.target
    }

    pub fn visible_results(&self) -> Option<ResultsView> {
        self.results.borrow().visible_view().cloned()
    }
}

/// Time of day of the service's ISO-8601 timestamp, in local time when the
/// timestamp carries an offset. Unparseable input is shown as sent.
pub fn format_time_of_day(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.with_timezone(&Local).format("%X").to_string();
    }
    if let Ok(naive) = iso.parse::<NaiveDateTime>() {
        return naive.format("%X").to_string();
    }
    iso.to_string()
}
