//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as session duration,
//! timer periods, viewport breakpoints and slot counts.

use std::time::Duration;

/// Length of a session in seconds.
pub const SESSION_DURATION_SECS: u32 = 30;

/// Period of the countdown cycle in milliseconds.
pub const COUNTDOWN_PERIOD_MS: u64 = 1000;

/// Period of the spawn cycle in milliseconds. Fixed for every device class.
pub const SPAWN_PERIOD_MS: u64 = 1200;

/// Viewports narrower than this are compact.
pub const COMPACT_MAX_WIDTH: u32 = 640;

/// Viewports narrower than this (and not compact) are medium.
pub const MEDIUM_MAX_WIDTH: u32 = 1024;

/// Number of slots on a compact grid.
pub const COMPACT_SLOT_COUNT: usize = 4;

/// Number of slots on a medium or full grid.
pub const FULL_SLOT_COUNT: usize = 9;

/// Height a visible target is raised to.
pub const TARGET_RAISED: u8 = 100;

/// Periods of the two session cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    pub countdown_period: Duration,
    pub spawn_period: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            countdown_period: Duration::from_millis(COUNTDOWN_PERIOD_MS),
            spawn_period: Duration::from_millis(SPAWN_PERIOD_MS),
        }
    }
}
