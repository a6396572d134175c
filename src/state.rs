use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide service state. The liveness flag starts out true and stays
/// true for the lifetime of the process; no route mutates it.
pub struct AppState {
    healthy: AtomicBool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            healthy: AtomicBool::new(true),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    /// Transition seam for a future draining phase. Not wired to any route.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_healthy() {
        let state = AppState::new();
        assert!(state.is_healthy());
    }

    #[test]
    fn test_state_set_healthy() {
        let state = AppState::new();
        state.set_healthy(false);
        assert!(!state.is_healthy());
        state.set_healthy(true);
        assert!(state.is_healthy());
    }
}
