use std::time::{Duration, Instant};

/// A sliding-window budget for outbound remote classification requests.
///
/// Tracks request timestamps and refuses new requests once `limit` have been
/// issued inside the current `window`. The engine treats a refusal as a local
/// quota signal and resolves to the rule fallback without touching the network.
pub struct RequestBudget {
    /// Timestamps of requests issued inside the window.
    stamps: Vec<Instant>,
    /// The maximum number of requests allowed within the `window`.
    limit: usize,
    /// The duration of the sliding window.
    window: Duration,
}

impl RequestBudget {
    /// Creates a new `RequestBudget` allowing `limit` requests per `window`.
    pub fn new(limit: usize, window: Duration) -> Self {
        RequestBudget {
            stamps: Vec::new(),
            limit,
            window,
        }
    }

    /// Checks whether another request is allowed right now.
    ///
    /// If it is, the request is recorded and the function returns `true`.
    pub fn check(&mut self) -> bool {
        let now = Instant::now();
        let window_start = now - self.window;

        self.stamps.retain(|&stamp| stamp > window_start);

        if self.stamps.len() < self.limit {
            self.stamps.push(now);
            true
        } else {
            false
        }
    }
}
