//! In-memory `ScanService` for workflow tests.

use crate::domain::errors::FimError;
use crate::domain::models::{BaselineResult, HealthStatus, IntegrityReport, ScanTarget};
use crate::services::api::ScanService;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

struct Reply<T> {
    delay: Duration,
    result: Result<T, FimError>,
}

#[derive(Default)]
pub struct FakeScanService {
    baseline_replies: RefCell<VecDeque<Reply<BaselineResult>>>,
    check_replies: RefCell<VecDeque<Reply<IntegrityReport>>>,
    health_reply: RefCell<Option<Result<HealthStatus, FimError>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeScanService {
    pub fn reply_baseline(&self, delay_ms: u64, result: Result<BaselineResult, FimError>) {
        self.baseline_replies.borrow_mut().push_back(Reply {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn reply_check(&self, delay_ms: u64, result: Result<IntegrityReport, FimError>) {
        self.check_replies.borrow_mut().push_back(Reply {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn reply_health(&self, result: Result<HealthStatus, FimError>) {
        *self.health_reply.borrow_mut() = Some(result);
    }

    /// `"init:<folder>"`, `"check:<folder>"` or `"health"`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

pub fn baseline(files_scanned: u64, message: &str) -> BaselineResult {
    BaselineResult {
        folder: String::new(),
        files_scanned,
        message: message.to_string(),
    }
}

pub fn report(modified: &[&str], added: &[&str], deleted: &[&str]) -> IntegrityReport {
    let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    IntegrityReport {
        folder: String::new(),
        timestamp: "2024-05-01T13:45:30.123456".to_string(),
        total_files: 10 + (modified.len() + added.len()) as u64,
        unchanged_count: 10,
        modified: owned(modified),
        added: owned(added),
        deleted: owned(deleted),
    }
}

#[async_trait(?Send)]
impl ScanService for FakeScanService {
    async fn init_baseline(&self, target: &ScanTarget) -> Result<BaselineResult, FimError> {
        self.calls.borrow_mut().push(format!("init:{}", target));
        let reply = self
            .baseline_replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected init_baseline call");
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result.map(|mut r| {
            r.folder = target.to_string();
            r
        })
    }

    async fn check(&self, target: &ScanTarget) -> Result<IntegrityReport, FimError> {
        self.calls.borrow_mut().push(format!("check:{}", target));
        let reply = self
            .check_replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected check call");
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result.map(|mut r| {
            r.folder = target.to_string();
            r
        })
    }

    async fn health(&self) -> Result<HealthStatus, FimError> {
        self.calls.borrow_mut().push("health".to_string());
        self.health_reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(FimError::Transport("unreachable".into())))
    }
}
