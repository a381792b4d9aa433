use crate::config::Settings;
use crate::domain::models::Region;
use crate::services::api::ScanService;
use crate::services::baseline::BaselineInitializer;
use crate::services::integrity::{IntegrityChecker, TargetField};
use crate::services::render::Renderer;
use crate::services::status::StatusNotifier;
use std::rc::Rc;
use tracing::{info, warn};

/// Both workflows wired around one service and one renderer, sharing the check
/// target so a successful baseline prefills the next check.
pub struct Dashboard {
    service: Rc<dyn ScanService>,
    pub baseline: BaselineInitializer,
    pub integrity: IntegrityChecker,
}

impl Dashboard {
    pub fn new(
        service: Rc<dyn ScanService>,
        renderer: Rc<dyn Renderer>,
        settings: &Settings,
    ) -> Self {
        let clear_after = settings.success_clear_after();
        let target = TargetField::default();
        let baseline = BaselineInitializer::new(
            Rc::clone(&service),
            StatusNotifier::new(Region::Baseline, Rc::clone(&renderer), clear_after),
            target.clone(),
            settings.drop_stale_responses,
        );
        let integrity = IntegrityChecker::new(
            Rc::clone(&service),
            StatusNotifier::new(Region::Check, Rc::clone(&renderer), clear_after),
            renderer,
            target,
            settings.drop_stale_responses,
        );
        Self {
            service,
            baseline,
            integrity,
        }
    }

    /// Reachability probe. Never touches either status region.
    pub async fn probe_health(&self) -> bool {
        match self.service.health().await {
            Ok(h) => {
                info!(status = %h.status, "scanning service reachable");
                true
            }
            Err(err) => {
                warn!(error = %err, "scanning service unreachable");
                false
            }
        }
    }
}
