//! Scroll event debouncing.
//!
//! Accumulates scroll deltas over a time window to prevent jittery scrolling
//! from high-resolution scroll events (e.g., trackpads, precision mice), and
//! reports when a burst of scrolling has come to rest. The picker uses the
//! latter as its "momentum end" signal for the sheet.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut scroll_helper = ScrollHelper::default();
//!
//! // In event loop:
//! if let Some(delta) = scroll_helper.accumulate(scroll_delta) {
//!     picker.move_cursor_by(delta);
//! }
//!
//! // On tick:
//! if scroll_helper.settle() {
//!     sheet.handle_child_scroll_end();
//! }
//! ```

use std::time::{Duration, Instant};

/// Helper for debouncing scroll events.
///
/// Accumulates scroll deltas and only returns a value once the threshold is
/// reached, preventing rapid-fire scroll events from causing jumpy behavior.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    /// Accumulated scroll delta since last emission
    accumulated_delta: i32,
    /// Time of last scroll event
    last_event: Option<Instant>,
    /// Debounce duration in milliseconds
    debounce_ms: u64,
    /// Minimum delta threshold before emitting
    threshold: i32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::new(50, 1)
    }
}

impl ScrollHelper {
    /// Create a new scroll helper with specified debounce time and threshold.
    ///
    /// # Arguments
    /// * `debounce_ms` - Time window for accumulating scroll events (milliseconds)
    /// * `threshold` - Minimum accumulated delta before emitting a scroll action
    pub fn new(debounce_ms: u64, threshold: i32) -> Self {
        Self {
            accumulated_delta: 0,
            last_event: None,
            debounce_ms,
            threshold,
        }
    }

    /// Accumulate a scroll delta and return the accumulated value if ready.
    pub fn accumulate(&mut self, delta: i32) -> Option<i32> {
        let now = Instant::now();

        match self.last_event {
            Some(last) if now.duration_since(last) <= self.window() => {
                // Still within debounce window, accumulate
                self.accumulated_delta += delta;
            }
            _ => {
                // First event of a new burst
                self.accumulated_delta = delta;
            }
        }

        self.last_event = Some(now);
        self.flush()
    }

    /// Whether a scroll burst is currently in progress.
    pub fn is_scrolling(&self) -> bool {
        self.last_event.is_some()
    }

    /// End the current burst if the debounce window has passed since the
    /// last event. Returns `true` exactly once per burst.
    pub fn settle(&mut self) -> bool {
        match self.last_event {
            Some(last) if last.elapsed() > self.window() => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Reset the scroll helper state.
    pub fn reset(&mut self) {
        self.accumulated_delta = 0;
        self.last_event = None;
    }

    /// Return the pending accumulated delta if it reached the threshold.
    pub fn flush(&mut self) -> Option<i32> {
        if self.accumulated_delta.abs() >= self.threshold {
            let result = self.accumulated_delta;
            self.accumulated_delta = 0;
            Some(result)
        } else {
            None
        }
    }

    fn window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_accumulate_within_debounce() {
        let mut helper = ScrollHelper::new(100, 3);

        assert!(helper.accumulate(1).is_none());
        assert!(helper.accumulate(1).is_none());

        // Third event reaches threshold
        assert_eq!(helper.accumulate(1), Some(3));
    }

    #[test]
    fn test_accumulate_after_debounce() {
        let mut helper = ScrollHelper::new(10, 1);

        assert_eq!(helper.accumulate(5), Some(5));

        thread::sleep(Duration::from_millis(20));

        // Second event should start fresh accumulation
        assert_eq!(helper.accumulate(3), Some(3));
    }

    #[test]
    fn test_negative_delta() {
        let mut helper = ScrollHelper::new(100, 2);

        assert!(helper.accumulate(-1).is_none());
        assert_eq!(helper.accumulate(-1), Some(-2));
    }

    #[test]
    fn test_settle_fires_once_per_burst() {
        let mut helper = ScrollHelper::new(10, 1);
        assert!(!helper.settle());

        helper.accumulate(1);
        assert!(helper.is_scrolling());
        assert!(!helper.settle());

        thread::sleep(Duration::from_millis(20));
        assert!(helper.settle());
        assert!(!helper.settle());
        assert!(!helper.is_scrolling());
    }
}
