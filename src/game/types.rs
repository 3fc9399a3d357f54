use serde::{Serialize, Deserialize};

use crate::config::game::{
    COMPACT_MAX_WIDTH, MEDIUM_MAX_WIDTH, COMPACT_SLOT_COUNT, FULL_SLOT_COUNT, TARGET_RAISED,
};

/// One hole of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    pub visible: bool,
    /// 0 while hidden, `TARGET_RAISED` while a target is up.
    pub raised: u8,
}

impl Slot {
    pub const HIDDEN: Slot = Slot { visible: false, raised: 0 };
    pub const RAISED: Slot = Slot { visible: true, raised: TARGET_RAISED };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceClass {
    Compact,
    Medium,
    #[default]
    Full,
}

impl DeviceClass {
    /// Classify a viewport by its width.
    pub fn from_width(width: u32) -> Self {
        if width < COMPACT_MAX_WIDTH {
            DeviceClass::Compact
        } else if width < MEDIUM_MAX_WIDTH {
            DeviceClass::Medium
        } else {
            DeviceClass::Full
        }
    }

    pub fn slot_count(self) -> usize {
        match self {
            DeviceClass::Compact => COMPACT_SLOT_COUNT,
            DeviceClass::Medium | DeviceClass::Full => FULL_SLOT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Result of a countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time decreased, session still running.
    Counted(u32),
    /// Time ran out on this tick.
    Expired,
    /// Session was not running.
    Ignored,
}

/// Result of activating a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhackOutcome {
    Hit,
    Miss,
    /// Session idle or over.
    Ignored,
}
