//! Latest-request-wins guard for responses that arrive out of order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket handed out for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the most recent request so stale responses can be dropped.
///
/// Navigating from one app to another starts a new request; when the old
/// one finally resolves its ticket is no longer current and the caller
/// discards the result instead of overwriting the newer state.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    generation: Arc<AtomicU64>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `apply` with `value` only if `ticket` is still current.
    pub fn apply_if_current<T>(&self, ticket: Ticket, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(ticket) {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_invalidates_older() {
        let guard = LatestRequest::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_stale_response_is_not_applied() {
        let guard = LatestRequest::new();
        let stale = guard.begin();
        let fresh = guard.begin();

        let mut shown = None;
        assert!(guard.apply_if_current(fresh, "fresh", |v| shown = Some(v)));
        assert!(!guard.apply_if_current(stale, "stale", |v| shown = Some(v)));
        assert_eq!(shown, Some("fresh"));
    }

    #[test]
    fn test_clones_share_generation() {
        let guard = LatestRequest::new();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!guard.is_current(ticket));
    }
}
