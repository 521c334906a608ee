//! Game state and core simulation types
//!
//! `GameState` is the whole application context: one value per running game,
//! handed to every event handler and tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lanes::LaneSet;
use super::pool::ObstaclePool;
use crate::consts::*;
use crate::roster::Roster;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Which screen is active and how input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen
    #[default]
    Menu,
    /// Choosing who plays
    PlayerSelect,
    /// Typing a new player name
    Register,
    /// Active gameplay
    Playing,
    /// Lives exhausted, score frozen
    GameOver,
}

/// Viewport size in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
        }
    }
}

impl Viewport {
    /// Scale applied to vertical speeds so a taller window doesn't feel slower
    pub fn speed_factor(&self) -> f32 {
        self.height / REFERENCE_HEIGHT
    }

    /// Height of the spawn line (top edge of the visible world)
    pub fn spawn_line(&self) -> f32 {
        self.height
    }
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    lane: usize,
    pub lives: u8,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            lane: MIDDLE_LANE,
            lives: MAX_LIVES,
        }
    }
}

impl Vehicle {
    /// Fresh vehicle in the middle lane. `lives` is clamped to `1..=MAX_LIVES`.
    pub fn new(lives: u8) -> Self {
        Self {
            lane: MIDDLE_LANE,
            lives: lives.clamp(1, MAX_LIVES),
        }
    }

    /// Current lane index, always in `0..LANE_COUNT`
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// Shift one lane left. Returns false at the left edge.
    pub fn move_left(&mut self) -> bool {
        if self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        true
    }

    /// Shift one lane right. Returns false at the right edge.
    pub fn move_right(&mut self) -> bool {
        if self.lane + 1 >= LANE_COUNT {
            return false;
        }
        self.lane += 1;
        true
    }

    /// Back to the middle lane (after a crash or on reset)
    pub fn recenter(&mut self) {
        self.lane = MIDDLE_LANE;
    }

    /// Horizontal position, always the lane table value for the current lane
    pub fn x(&self, lanes: &LaneSet) -> f32 {
        lanes.position(self.lane)
    }
}

/// One foliage circle of a bush
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BushBlob {
    /// Offset from the obstacle center
    pub offset: Vec2,
    pub radius: f32,
    /// Green channel intensity (0-1)
    pub green: f32,
}

impl BushBlob {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let dx = rng.random_range(-7..=7) as f32;
        let dy = rng.random_range(-7..=7) as f32;
        let radius = rng.random_range(10..=15) as f32;
        let green = (0.6 + 0.15 * rng.random_range(0..4) as f32).min(1.0);
        Self {
            offset: Vec2::new(dx, dy),
            radius,
            green,
        }
    }
}

/// Obstacle types. Only bushes carry decoration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Car,
    Bush { blobs: [BushBlob; BUSH_BLOBS] },
    Gutter,
    Rock,
}

impl ObstacleKind {
    /// Pick one of the four kinds uniformly, with fresh decoration
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4) {
            0 => ObstacleKind::Car,
            1 => ObstacleKind::Bush {
                blobs: std::array::from_fn(|_| BushBlob::random(&mut *rng)),
            },
            2 => ObstacleKind::Gutter,
            _ => ObstacleKind::Rock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Car => "car",
            ObstacleKind::Bush { .. } => "bush",
            ObstacleKind::Gutter => "gutter",
            ObstacleKind::Rock => "rock",
        }
    }
}

/// An obstacle slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Lane index; `pos.x` is that lane's position
    pub lane: usize,
    /// Center position; y decreases as the obstacle falls
    pub pos: Vec2,
    pub kind: ObstacleKind,
    /// Already scored this pass
    pub passed: bool,
    /// Already cost a life this pass
    pub struck: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind) -> Self {
        Self {
            lane: 0,
            pos: Vec2::ZERO,
            kind,
            passed: false,
            struck: false,
        }
    }
}

/// Per-episode counters, reset when PLAYING starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    /// Set by the life-ending collision; gates scoring and life loss
    pub collided: bool,
    /// Difficulty ramp, >= 1.0
    pub speed_multiplier: f32,
    /// Road marker phase in `[0, DASH_PERIOD)`
    pub scroll_offset: f32,
    /// Simulation ticks this episode
    pub time_ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            collided: false,
            speed_multiplier: 1.0,
            scroll_offset: 0.0,
            time_ticks: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub mode: GameMode,
    pub viewport: Viewport,
    pub lanes: LaneSet,
    pub vehicle: Vehicle,
    pub obstacles: ObstaclePool,
    pub session: Session,
    pub roster: Roster,
    /// Name being typed in REGISTER mode
    pub input_buffer: String,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with default settings and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_settings(&Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let seed = settings.resolve_seed();
        let (width, height) = settings.viewport;
        let viewport = Viewport {
            width: width.max(1.0),
            height: height.max(1.0),
        };
        let lanes = LaneSet::for_viewport(viewport.width);

        let mut state = Self {
            seed,
            mode: GameMode::Menu,
            viewport,
            lanes,
            vehicle: Vehicle::new(settings.tuning.starting_lives),
            obstacles: ObstaclePool::new(),
            session: Session::default(),
            roster: Roster::with_names(&settings.default_players),
            input_buffer: String::new(),
            tuning: settings.tuning.clone(),
            rng: Pcg32::seed_from_u64(seed),
        };

        // Lay out obstacles so the first snapshot already has a road
        state
            .obstacles
            .reset_layout(&state.lanes, state.viewport.spawn_line(), &mut state.rng);

        log::info!("New game (seed {})", seed);
        state
    }

    /// Start a fresh episode: score, lives, speed, vehicle and obstacles
    pub fn reset_session(&mut self) {
        self.session = Session::default();
        self.vehicle = Vehicle::new(self.tuning.starting_lives);
        self.obstacles
            .reset_layout(&self.lanes, self.viewport.spawn_line(), &mut self.rng);
        log::info!(
            "Episode started for {}",
            self.roster.selected().unwrap_or("<anonymous>")
        );
    }

    /// Viewport resize hook. Lanes are recomputed, obstacles snap to the
    /// nearest new lane and the vehicle keeps its lane index.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("Ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.viewport = Viewport { width, height };
        self.lanes = LaneSet::for_viewport(width);
        self.obstacles.remap_lanes(&self.lanes);
        log::debug!("Viewport resized to {}x{}", width, height);
    }

    /// Vehicle's horizontal position
    pub fn vehicle_x(&self) -> f32 {
        self.vehicle.x(&self.lanes)
    }
}
