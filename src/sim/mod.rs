//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Explicit time step only
//! - Seeded RNG only
//! - Stable iteration order (by obstacle slot)

pub mod clock;
pub mod collision;
pub mod lanes;
pub mod machine;
pub mod pool;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::FrameDriver;
pub use collision::{collides, has_passed, in_collision_band};
pub use lanes::LaneSet;
pub use machine::{InputEvent, handle_event};
pub use pool::ObstaclePool;
pub use snapshot::{ObstacleView, Snapshot};
pub use state::{
    BushBlob, GameMode, GameState, Obstacle, ObstacleKind, Session, Vehicle, Viewport,
};
pub use tick::{TickInput, tick};
