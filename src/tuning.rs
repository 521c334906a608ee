//! Data-driven game balance
//!
//! Speeds are expressed per second. The original game advanced a fixed
//! distance per display refresh; at the 60 Hz reference rate that is 3 units
//! per frame for obstacles and 5 per frame for the road markers.

use serde::{Deserialize, Serialize};

/// How strictly a respawning obstacle must keep clear of the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementRule {
    /// Only obstacles in a different lane block a spawn. Same-lane pairs may
    /// stack inside the clearance band.
    CrossLane,
    /// Any obstacle inside the clearance band blocks a spawn
    #[default]
    AnyLane,
}

/// Balance knobs for one game instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Obstacle fall speed at multiplier 1.0 (units/s at reference height)
    pub obstacle_speed: f32,
    /// Road marker scroll speed (units/s at reference height)
    pub scroll_speed: f32,
    /// Speed multiplier gained per second of play
    pub speed_ramp: f32,
    /// Half-height of the vertical band in which a same-lane obstacle hits
    pub collision_band: f32,
    /// Minimum vertical gap between a fresh spawn and existing obstacles
    pub spawn_clearance: f32,
    /// Lives at the start of an episode
    pub starting_lives: u8,
    pub placement: PlacementRule,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            obstacle_speed: 180.0,
            scroll_speed: 300.0,
            speed_ramp: 0.03,
            collision_band: 40.0,
            spawn_clearance: 150.0,
            starting_lives: 3,
            placement: PlacementRule::AnyLane,
        }
    }
}

impl Tuning {
    /// Balance matching the original release, including its lenient
    /// same-lane placement check
    pub fn classic() -> Self {
        Self {
            placement: PlacementRule::CrossLane,
            ..Self::default()
        }
    }
}
