use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::config::game::SESSION_DURATION_SECS;
use crate::game::error::GameError;
use crate::game::grid::{generate_grid, pick_targets, raise_targets};
use crate::game::layout::GridConfig;
use crate::game::types::{DeviceClass, Phase, Slot, TickOutcome, WhackOutcome};

/// State of one play-through. Owned by a single `GameSession` actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub score: u32,
    pub seconds_remaining: u32,
    pub phase: Phase,
    pub device_class: DeviceClass,
    pub slots: Vec<Slot>,
}

/// Read model pushed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub seconds_remaining: u32,
    pub is_over: bool,
    pub device_class: DeviceClass,
    pub slots: Vec<Slot>,
    pub layout: GridConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DeviceClass::default())
    }
}

impl Session {
    pub fn new(device_class: DeviceClass) -> Self {
        Session {
            score: 0,
            seconds_remaining: SESSION_DURATION_SECS,
            phase: Phase::Idle,
            device_class,
            slots: generate_grid(device_class.slot_count()),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn slot_count(&self) -> usize {
        self.device_class.slot_count()
    }

    /// Begin a new play-through. Valid from any phase.
    pub fn start(&mut self) {
        self.score = 0;
        self.seconds_remaining = SESSION_DURATION_SECS;
        self.phase = Phase::Running;
        self.slots = generate_grid(self.slot_count());
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = Phase::GameOver;
            TickOutcome::Expired
        } else {
            TickOutcome::Counted(self.seconds_remaining)
        }
    }

    /// Reposition targets at random. Returns false when the session is not running.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> bool {
        let targets = pick_targets(rng, self.slot_count());
        self.spawn_at(&targets)
    }

    /// Replace the grid with one where exactly `targets` are raised.
    pub fn spawn_at(&mut self, targets: &[usize]) -> bool {
        if !self.is_running() {
            return false;
        }
        self.slots = raise_targets(self.slot_count(), targets);
        true
    }

    /// Whack the target at `index`.
    pub fn activate(&mut self, index: usize) -> Result<WhackOutcome, GameError> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or(GameError::OutOfRange { index, len })?;

        if self.phase != Phase::Running {
            return Ok(WhackOutcome::Ignored);
        }
        if !slot.visible {
            return Ok(WhackOutcome::Miss);
        }
        *slot = Slot::HIDDEN;
        self.score += 1;
        Ok(WhackOutcome::Hit)
    }

    /// Record the client's viewport. Returns true if the device class changed.
    ///
    /// A running grid keeps its slots until the next spawn; an idle or finished
    /// grid is resized at once.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        let device_class = DeviceClass::from_width(width);
        if device_class == self.device_class {
            return false;
        }
        self.device_class = device_class;
        if !self.is_running() {
            self.slots = generate_grid(self.slot_count());
        }
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            seconds_remaining: self.seconds_remaining,
            is_over: self.is_over(),
            device_class: self.device_class,
            slots: self.slots.clone(),
            layout: GridConfig::for_device(self.device_class),
        }
    }
}
