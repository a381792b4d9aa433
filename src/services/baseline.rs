use crate::domain::constants::{INIT_LOADING_TEXT, SUCCESS_GLYPH};
use crate::domain::errors::FimError;
use crate::domain::models::{BaselineResult, ScanTarget, StatusMessage};
use crate::services::api::ScanService;
use crate::services::integrity::TargetField;
use crate::services::sequence::RequestSequence;
use crate::services::status::{error_text, StatusNotifier};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Asks the scanning service to record a fresh baseline for a folder.
pub struct BaselineInitializer {
    service: Rc<dyn ScanService>,
    status: StatusNotifier,
    check_target: TargetField,
    sequence: RequestSequence,
}

impl BaselineInitializer {
    pub fn new(
        service: Rc<dyn ScanService>,
        status: StatusNotifier,
        check_target: TargetField,
        drop_stale: bool,
    ) -> Self {
        Self {
            service,
            status,
            check_target,
            sequence: RequestSequence::new(drop_stale),
        }
    }

    /// Every outcome is reflected in this workflow's status region. On success the
    /// validated path is copied into the integrity checker's target field.
    pub async fn initialize_baseline(&self, raw_path: &str) -> Result<BaselineResult, FimError> {
        let target = match ScanTarget::parse(raw_path) {
            Ok(t) => t,
            Err(err) => {
                self.status.show(StatusMessage::error(error_text(&err)));
                return Err(err);
            }
        };
        // Only calls that reach the service can supersede each other.
        let ticket = self.sequence.issue();

        self.status.show(StatusMessage::loading(INIT_LOADING_TEXT));
        let outcome = self.service.init_baseline(&target).await;

        if self.sequence.is_stale(ticket) {
            debug!(folder = %target, "dropping superseded baseline response");
            return outcome;
        }
        match &outcome {
            Ok(result) => {
                info!(folder = %target, files = result.files_scanned, "baseline created");
                self.status.show(StatusMessage::success(success_text(result)));
                self.check_target.set(target.as_str());
            }
            Err(err) => {
                warn!(folder = %target, error = %err, "baseline initialization failed");
                self.status.show(StatusMessage::error(error_text(err)));
            }
        }
        outcome
    }

    pub fn status(&self) -> &StatusNotifier {
        &self.status
    }
}

fn success_text(result: &BaselineResult) -> String {
    format!(
        "{} {} Scanned {} files.",
        SUCCESS_GLYPH, result.message, result.files_scanned
    )
}
