//! Car Arcade - A three-lane obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (state machine, obstacles, collisions, scoring)
//! - `roster`: Registered player names
//! - `ui`: Named clickable regions for pointer input
//! - `settings`: Run configuration
//! - `tuning`: Data-driven game balance
//!
//! Rendering, text layout and windowing are left to the embedding frontend,
//! which reads [`sim::Snapshot`] values and feeds [`sim::InputEvent`]s back.

pub mod roster;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use roster::Roster;
pub use settings::Settings;
pub use tuning::{PlacementRule, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the reference display rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will simulate in one go (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Reference viewport; speeds and sizes are tuned against it
    pub const REFERENCE_WIDTH: f32 = 500.0;
    pub const REFERENCE_HEIGHT: f32 = 700.0;

    /// Number of lanes on the road
    pub const LANE_COUNT: usize = 3;
    /// Lane spacing as a fraction of viewport width (100 at reference)
    pub const LANE_SPACING_FRACTION: f32 = 0.2;
    /// Lane the vehicle starts in and is recentered to after a crash
    pub const MIDDLE_LANE: usize = 1;
    /// Lives per episode; configured values are clamped to `1..=MAX_LIVES`
    pub const MAX_LIVES: u8 = 3;

    /// Vehicle sits at a fixed height above the bottom edge
    pub const VEHICLE_Y: f32 = 70.0;
    pub const VEHICLE_HALF_WIDTH: f32 = 25.0;
    pub const VEHICLE_HALF_HEIGHT: f32 = 20.0;

    /// Obstacle footprint (cars, gutters)
    pub const OBSTACLE_HALF_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HALF_HEIGHT: f32 = 25.0;

    /// Number of obstacle slots for the whole session
    pub const POOL_SIZE: usize = 4;
    /// Initial layout: slot i starts at height + OFFSET - i * SPACING
    pub const RESET_SPAWN_OFFSET: f32 = 300.0;
    pub const RESET_SPAWN_SPACING: f32 = 250.0;
    /// Slots below -RECYCLE_DEPTH * speed factor are respawned
    pub const RECYCLE_DEPTH: f32 = 50.0;

    /// Foliage blobs per bush
    pub const BUSH_BLOBS: usize = 5;

    /// Period of the dashed lane markers
    pub const DASH_PERIOD: f32 = 40.0;

    /// Longest name accepted while registering
    pub const MAX_NAME_LEN: usize = 12;
}
