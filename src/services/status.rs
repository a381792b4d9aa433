//! Per-region status state machine: idle -> loading -> success | error -> idle.
//!
//! Success messages clear themselves after a delay. The pending clear is an owned
//! task handle; showing any newer status aborts it, so at most one timer exists
//! per region and a newer message is never wiped early.

use crate::domain::constants::ERROR_GLYPH;
use crate::domain::errors::FimError;
use crate::domain::models::{Region, StatusMessage};
use crate::services::render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct StatusNotifier {
    region: Region,
    renderer: Rc<dyn Renderer>,
    clear_after: Duration,
    current: Rc<RefCell<StatusMessage>>,
    pending_clear: RefCell<Option<JoinHandle<()>>>,
}

impl StatusNotifier {
    pub fn new(region: Region, renderer: Rc<dyn Renderer>, clear_after: Duration) -> Self {
        Self {
            region,
            renderer,
            clear_after,
            current: Rc::new(RefCell::new(StatusMessage::idle())),
            pending_clear: RefCell::new(None),
        }
    }

    /// Must be called from inside a `LocalSet` when `status` auto-clears.
    pub fn show(&self, status: StatusMessage) {
        if let Some(handle) = self.pending_clear.borrow_mut().take() {
            handle.abort();
        }
        *self.current.borrow_mut() = status.clone();
        self.renderer.show_status(self.region, &status);

        if status.auto_clears() {
            let current = Rc::clone(&self.current);
            let renderer = Rc::clone(&self.renderer);
            let region = self.region;
            let delay = self.clear_after;
            let handle = tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                let idle = StatusMessage::idle();
                *current.borrow_mut() = idle.clone();
                debug!(region = region.label(), "success status expired");
                renderer.show_status(region, &idle);
            });
            *self.pending_clear.borrow_mut() = Some(handle);
        }
    }

    pub fn current(&self) -> StatusMessage {
        self.current.borrow().clone()
    }
}

/// Status text for a failed call. Local validation errors carry no glyph.
pub fn error_text(err: &FimError) -> String {
    match err {
        FimError::EmptyPath => err.to_string(),
        _ => format!("{} {}", ERROR_GLYPH, err),
    }
}

impl Drop for StatusNotifier {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_clear.get_mut().take() {
            handle.abort();
        }
    }
}
