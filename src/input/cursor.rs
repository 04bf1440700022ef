use std::time::Duration;

/// Hides the pointer after a period without movement.
///
/// Time is passed in by the caller as the elapsed duration since some fixed origin, so the timer
/// runs the same under a real clock and in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorIdle {
    delay: Duration,
    last_move: Option<Duration>,
}

impl Default for CursorIdle {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl CursorIdle {
    /// Timer hiding the cursor `delay` after the last movement.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_move: None,
        }
    }

    /// Configured idle delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Show the cursor and restart the timer.
    pub fn pointer_moved(&mut self, now: Duration) {
        self.last_move = Some(now);
    }

    /// Whether the cursor should be hidden at `now`.
    ///
    /// The timer is unarmed until the first [`Self::pointer_moved`]; hosts call it once at startup.
    pub fn is_hidden(&self, now: Duration) -> bool {
        self.last_move
            .is_some_and(|t| now.saturating_sub(t) >= self.delay)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/cursor.rs"]
mod tests;
