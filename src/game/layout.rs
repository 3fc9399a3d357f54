//! Per-device grid configuration.
//!
//! The client renders from these values; the server only uses `slot_count`.

use serde::{Serialize, Deserialize};

use super::types::DeviceClass;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    pub slot_count: usize,
    /// Scale applied to a raised target.
    pub target_scale: f32,
    pub perspective_px: u32,
    /// Duration of the raise animation. Not tied to the spawn period.
    pub target_speed_ms: u32,
    /// Decorative particles drawn behind the grid.
    pub particle_count: usize,
}

impl GridConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        let (cols, target_scale, perspective_px, target_speed_ms, particle_count) = match device {
            DeviceClass::Compact => (2, 1.0, 500, 1500, 10),
            DeviceClass::Medium => (3, 1.1, 700, 1800, 20),
            DeviceClass::Full => (3, 1.2, 1000, 2000, 20),
        };
        let slot_count = device.slot_count();
        GridConfig {
            cols,
            rows: slot_count.div_ceil(cols),
            slot_count,
            target_scale,
            perspective_px,
            target_speed_ms,
            particle_count,
        }
    }
}
