//! Stale response detection.
//!
//! Every query round takes a token; a response is only applied if its token
//! is still the latest one handed out. Anything older was superseded by a
//! query the user typed afterwards.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one query round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Hands out monotonically increasing [`RequestToken`]s.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round, superseding every earlier token.
    pub fn next(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` belongs to the most recent round.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}
