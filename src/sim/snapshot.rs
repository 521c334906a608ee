//! Read-only view for renderers
//!
//! A snapshot is an owned copy, so a renderer on another thread never shares
//! mutable state with the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameMode, GameState, ObstacleKind};

/// One obstacle as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub slot: usize,
    pub lane: usize,
    pub pos: Vec2,
    pub kind: ObstacleKind,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub viewport: (f32, f32),
    pub lanes: Vec<f32>,
    pub vehicle_lane: usize,
    pub vehicle_pos: Vec2,
    pub lives: u8,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub speed_multiplier: f32,
    pub scroll_offset: f32,
    pub roster: Vec<String>,
    pub cursor: usize,
    pub input_buffer: String,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            viewport: (self.viewport.width, self.viewport.height),
            lanes: self.lanes.positions().to_vec(),
            vehicle_lane: self.vehicle.lane(),
            vehicle_pos: Vec2::new(self.vehicle_x(), crate::consts::VEHICLE_Y),
            lives: self.vehicle.lives,
            obstacles: self
                .obstacles
                .iter()
                .enumerate()
                .map(|(slot, o)| ObstacleView {
                    slot,
                    lane: o.lane,
                    pos: o.pos,
                    kind: o.kind.clone(),
                })
                .collect(),
            score: self.session.score,
            speed_multiplier: self.session.speed_multiplier,
            scroll_offset: self.session.scroll_offset,
            roster: self.roster.names().to_vec(),
            cursor: self.roster.cursor(),
            input_buffer: self.input_buffer.clone(),
        }
    }
}
