//! Fixed-timestep frame driver
//!
//! The frontend reports wall-clock time between frames; the driver turns that
//! into whole `SIM_DT` ticks so gameplay runs the same at any refresh rate.

use super::machine::InputEvent;
use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and queues input until the next tick runs
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    accumulator: f32,
    pending: TickInput,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input event for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.pending.events.push(event);
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.pending.idle_mode = idle;
    }

    /// Run as many ticks as `elapsed` seconds allow. Queued events go to the
    /// first tick only. Returns the number of ticks run.
    pub fn advance(&mut self, state: &mut GameState, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, &self.pending, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.pending.events.clear();
        }

        // Don't carry a backlog we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}
