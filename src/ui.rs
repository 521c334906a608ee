//! Clickable regions
//!
//! The frontend draws buttons wherever it likes, but pointer input is matched
//! against this layout so both agree on what a click means. Coordinates are
//! world units with the origin at the bottom-left, like the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::roster::{ROSTER_CAPACITY, Roster};
use crate::sim::{GameMode, Viewport};

/// A named clickable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    /// MENU: go to player selection
    Start,
    /// PLAYER_SELECT: play as the roster entry at this index
    SelectPlayer(usize),
    /// PLAYER_SELECT: delete the roster entry at this index
    DeletePlayer(usize),
    /// PLAYER_SELECT: open the name entry screen
    Register,
    /// GAME_OVER: play again as the same player
    Restart,
    /// GAME_OVER: back to player selection
    ChangePlayer,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Edges count as inside
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

const BUTTON_WIDTH: f32 = 150.0;
const BUTTON_HEIGHT: f32 = 40.0;
const ROW_WIDTH: f32 = 200.0;
const ROW_PITCH: f32 = 50.0;
const DELETE_SIZE: f32 = 40.0;

/// Button placement for a viewport
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    width: f32,
    height: f32,
}

impl Layout {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }

    fn centered(&self, y: f32, w: f32) -> Rect {
        Rect::new((self.width - w) / 2.0, y, w, BUTTON_HEIGHT)
    }

    fn row_y(&self, index: usize) -> f32 {
        self.height - 200.0 - index as f32 * ROW_PITCH
    }

    /// Where a button sits; `None` for roster rows past capacity
    pub fn rect(&self, button: Button) -> Option<Rect> {
        let rect = match button {
            Button::Start => self.centered(self.height - 300.0, BUTTON_WIDTH),
            Button::Restart => self.centered(self.height / 2.0 - 60.0, BUTTON_WIDTH),
            Button::ChangePlayer => self.centered(self.height / 2.0 - 110.0, ROW_WIDTH),
            Button::SelectPlayer(i) if i < ROSTER_CAPACITY => {
                let x = (self.width - ROW_WIDTH - DELETE_SIZE - 10.0) / 2.0;
                Rect::new(x, self.row_y(i), ROW_WIDTH, BUTTON_HEIGHT)
            }
            Button::DeletePlayer(i) if i < ROSTER_CAPACITY => {
                let x = (self.width + ROW_WIDTH - DELETE_SIZE + 10.0) / 2.0;
                Rect::new(x, self.row_y(i), DELETE_SIZE, DELETE_SIZE)
            }
            Button::Register => {
                self.centered(self.row_y(ROSTER_CAPACITY) - 10.0, BUTTON_WIDTH)
            }
            Button::SelectPlayer(_) | Button::DeletePlayer(_) => return None,
        };
        Some(rect)
    }

    /// Buttons live in `mode` given the current roster
    pub fn buttons(&self, mode: GameMode, roster: &Roster) -> Vec<Button> {
        match mode {
            GameMode::Menu => vec![Button::Start],
            GameMode::PlayerSelect => {
                let mut buttons = Vec::with_capacity(roster.len() * 2 + 1);
                for i in 0..roster.len() {
                    buttons.push(Button::SelectPlayer(i));
                    buttons.push(Button::DeletePlayer(i));
                }
                if !roster.is_full() {
                    buttons.push(Button::Register);
                }
                buttons
            }
            GameMode::GameOver => vec![Button::Restart, Button::ChangePlayer],
            GameMode::Register | GameMode::Playing => Vec::new(),
        }
    }

    /// Which live button, if any, contains `pos`
    pub fn hit_test(&self, mode: GameMode, roster: &Roster, pos: Vec2) -> Option<Button> {
        self.buttons(mode, roster)
            .into_iter()
            .find(|b| self.rect(*b).is_some_and(|r| r.contains(pos)))
    }
}

/// Convert a window position (origin top-left, y down) to world coordinates
pub fn screen_to_world(x: f32, y: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(x, viewport.height - y)
}
