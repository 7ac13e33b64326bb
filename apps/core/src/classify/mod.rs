//! # Classification Module
//!
//! Assigns a `(category, priority)` pair to free-text task content.
//!
//! ## Components
//! - `rules`: deterministic keyword inference (fast path, always available)
//! - `remote`: OpenAI-compatible categorization client (when configured)
//! - `engine`: orchestrator wiring remote-first with unconditional rule fallback

pub mod engine;
pub mod remote;
pub mod rules;

pub use engine::{Classifier, ClassifyObserver, TracingObserver};
pub use remote::{ClassificationBackend, RemoteClassifier};
pub use rules::RuleClassifier;
