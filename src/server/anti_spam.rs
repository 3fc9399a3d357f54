use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::MAX_REQUESTS_PER_SECOND;

/// Tracks input flood state for a single game connection.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    // Number of requests received in the current second
    requests_this_tick: u32,
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            requests_this_tick: 0,
        }
    }

    /// Call at the start of every incoming request (message).
    /// Returns true if the request exceeds the per-second limit and must be dropped.
    pub fn record_request(&mut self, game_id: &str) -> bool {
        self.record_request_at(game_id, Instant::now())
    }

    fn record_request_at(&mut self, game_id: &str, now: Instant) -> bool {
        self.tick(now);
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND {
            if self.requests_this_tick == MAX_REQUESTS_PER_SECOND + 1 {
                warn!("[AntiSpam] game_id={} exceeded {} requests per second", game_id, MAX_REQUESTS_PER_SECOND);
            }
            return true;
        }
        false
    }

    /// Call when sending an error. Returns true if the error should be sent (not suppressed).
    pub fn should_send_error(&mut self, error_code: &str, game_id: &str) -> bool {
        if let Some(last) = &self.last_error_code {
            if last == error_code {
                // Suppress duplicate error
                warn!("[AntiSpam] Suppressed duplicate error '{}' for game_id={}", error_code, game_id);
                return false;
            }
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a valid action is performed (state-changing, not error).
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.requests_this_tick = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_over_limit_are_dropped() {
        let mut state = AntiSpamState::new();
        let now = state.last_tick;
        for _ in 0..MAX_REQUESTS_PER_SECOND {
            assert!(!state.record_request_at("g", now));
        }
        assert!(state.record_request_at("g", now));
        assert!(state.record_request_at("g", now + Duration::from_millis(500)));
    }

    #[test]
    fn test_counter_resets_each_second() {
        let mut state = AntiSpamState::new();
        let now = state.last_tick;
        for _ in 0..=MAX_REQUESTS_PER_SECOND {
            state.record_request_at("g", now);
        }
        assert!(!state.record_request_at("g", now + Duration::from_secs(1)));
    }

    #[test]
    fn test_duplicate_errors_suppressed_until_valid_action() {
        let mut state = AntiSpamState::new();
        assert!(state.should_send_error("OUT_OF_RANGE", "g"));
        assert!(!state.should_send_error("OUT_OF_RANGE", "g"));
        assert!(state.should_send_error("INVALID_COMMAND", "g"));

        state.reset_on_valid_action();
        assert!(state.should_send_error("INVALID_COMMAND", "g"));
    }
}
