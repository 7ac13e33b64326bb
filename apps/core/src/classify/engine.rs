//! Classification engine.
//!
//! Wires the remote backend and the rule classifier together: the remote path
//! is attempted only when configured and within the request budget, and every
//! typed remote failure is converted by one unconditional handler into the
//! deterministic rule result. `classify` therefore never fails and never
//! blocks past the configured timeout.

use crate::classify::remote::{ClassificationBackend, RemoteClassifier};
use crate::classify::rules::RuleClassifier;
use crate::config::RemoteConfig;
use crate::error::RemoteError;
use crate::models::{ClassificationResult, Task};
use crate::rate_limiter::RequestBudget;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

const DEFAULT_BUDGET_LIMIT: usize = 30;
const DEFAULT_BUDGET_WINDOW: Duration = Duration::from_secs(60);

/// Side channel for remote failure kinds.
///
/// The notification layer implements this to tell the user *why* the engine
/// fell back (quota vs. credentials vs. generic). The returned classification
/// is never affected.
pub trait ClassifyObserver: Send + Sync {
    fn on_remote_error(&self, kind: &RemoteError);
}

/// Default observer: reports fallback causes through `tracing`.
pub struct TracingObserver;

impl ClassifyObserver for TracingObserver {
    fn on_remote_error(&self, kind: &RemoteError) {
        warn!(error = %kind, "remote classification failed, using rule fallback");
    }
}

/// The task classification engine.
pub struct Classifier {
    remote: Option<Arc<dyn ClassificationBackend>>,
    rules: RuleClassifier,
    budget: Mutex<RequestBudget>,
    observer: Arc<dyn ClassifyObserver>,
    unavailable_reported: AtomicBool,
}

impl Classifier {
    /// Creates an engine; `None` disables the remote path entirely.
    pub fn new(config: Option<RemoteConfig>) -> Self {
        let remote: Option<Arc<dyn ClassificationBackend>> =
            config.map(|c| Arc::new(RemoteClassifier::new(c)) as Arc<dyn ClassificationBackend>);
        Self::with_remote(remote)
    }

    /// Creates an engine from environment configuration.
    pub fn from_env() -> Self {
        Self::new(RemoteConfig::from_env())
    }

    /// Creates an engine that only ever uses the rule classifier.
    pub fn offline() -> Self {
        Self::with_remote(None)
    }

    /// Creates an engine with an explicit backend (used by tests).
    pub fn with_backend(backend: Arc<dyn ClassificationBackend>) -> Self {
        Self::with_remote(Some(backend))
    }

    fn with_remote(remote: Option<Arc<dyn ClassificationBackend>>) -> Self {
        Self {
            remote,
            rules: RuleClassifier::new(),
            budget: Mutex::new(RequestBudget::new(DEFAULT_BUDGET_LIMIT, DEFAULT_BUDGET_WINDOW)),
            observer: Arc::new(TracingObserver),
            unavailable_reported: AtomicBool::new(false),
        }
    }

    /// Replaces the fallback observer.
    pub fn with_observer(mut self, observer: Arc<dyn ClassifyObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the remote request budget.
    pub fn with_budget(self, limit: usize, window: Duration) -> Self {
        Self {
            budget: Mutex::new(RequestBudget::new(limit, window)),
            ..self
        }
    }

    /// Classifies task text, remote-first with rule fallback.
    ///
    /// Infallible: the caller always receives a valid category/priority pair,
    /// identical to the deterministic rule result whenever the remote path is
    /// unavailable, over budget, or failing.
    pub async fn classify(&self, text: &str) -> ClassificationResult {
        if let Some(remote) = &self.remote {
            if self.budget.lock().await.check() {
                match remote.classify(text).await {
                    Ok((result, degraded)) => {
                        // Per-field defaults were substituted; the result is
                        // still valid, only the kind goes to the side channel.
                        if let Some(kind) = degraded {
                            self.observer.on_remote_error(&kind);
                        }
                        return result;
                    }
                    Err(kind) => self.observer.on_remote_error(&kind),
                }
            } else {
                self.observer.on_remote_error(&RemoteError::QuotaExceeded);
            }
        } else {
            self.report_unavailable_once();
        }

        self.rules.classify(text)
    }

    /// Requests a free-text productivity insight for the task collection.
    ///
    /// Returns `None` when the remote service is unconfigured, over budget,
    /// or failing; there is no local substitute for insights.
    pub async fn insight(&self, tasks: &[Task]) -> Option<String> {
        let Some(remote) = self.remote.as_ref() else {
            self.report_unavailable_once();
            return None;
        };

        if !self.budget.lock().await.check() {
            self.observer.on_remote_error(&RemoteError::QuotaExceeded);
            return None;
        }

        match remote.insight(tasks).await {
            Ok(text) => Some(text),
            Err(kind) => {
                self.observer.on_remote_error(&kind);
                None
            }
        }
    }

    /// Reports `Unavailable` the first time the unconfigured path is taken.
    ///
    /// Running without a remote is a normal mode, so the notification layer
    /// hears about it once per engine instead of on every call.
    fn report_unavailable_once(&self) {
        if !self.unavailable_reported.swap(true, Ordering::Relaxed) {
            self.observer.on_remote_error(&RemoteError::Unavailable);
        }
    }
}
