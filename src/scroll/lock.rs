//! Cross-fade transition lock

/// How long a chapter cross-fade blocks further activations
pub const TRANSITION_MS: f64 = 600.0;

/// Time-based lock taken when a cross-fade starts
///
/// The lock expires on its own once `duration_ms` has elapsed; suppressed
/// scroll events are dropped, not queued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionLock {
    duration_ms: f64,
    held_since: Option<f64>,
}

impl Default for TransitionLock {
    fn default() -> Self {
        Self::new(TRANSITION_MS)
    }
}

impl TransitionLock {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            held_since: None,
        }
    }

    pub fn is_held(&self, now_ms: f64) -> bool {
        match self.held_since {
            Some(since) => now_ms - since < self.duration_ms,
            None => false,
        }
    }

    /// Take the lock unless it is still held
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if self.is_held(now_ms) {
            return false;
        }
        self.held_since = Some(now_ms);
        true
    }

    pub fn release(&mut self) {
        self.held_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_expires_after_duration() {
        let mut lock = TransitionLock::default();
        assert!(!lock.is_held(0.0));
        assert!(lock.try_acquire(100.0));
        assert!(!lock.try_acquire(200.0));
        assert!(lock.is_held(699.9));
        assert!(!lock.is_held(700.0));
        assert!(lock.try_acquire(700.0));
    }
}
