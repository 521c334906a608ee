//! Game mode transitions
//!
//! Every input event goes through [`handle_event`]. Events that mean nothing
//! in the current mode are ignored, never treated as errors.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameMode, GameState};
use crate::consts::MAX_NAME_LEN;
use crate::ui::{Button, Layout};

/// Discrete input from the frontend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Steer one lane left (PLAYING)
    MoveLeft,
    /// Steer one lane right (PLAYING)
    MoveRight,
    /// Pointer activation at a world position
    Click { pos: Vec2 },
    /// A named region activated without a pointer (keyboard shortcut, test)
    Activate(Button),
    /// Typed character (REGISTER)
    Char(char),
    /// Delete last character (REGISTER)
    Backspace,
    /// Submit the typed name (REGISTER)
    Confirm,
}

/// Apply one input event. Returns true if it changed anything.
pub fn handle_event(state: &mut GameState, event: &InputEvent) -> bool {
    match (state.mode, *event) {
        (GameMode::Playing, InputEvent::MoveLeft) => state.vehicle.move_left(),
        (GameMode::Playing, InputEvent::MoveRight) => state.vehicle.move_right(),

        (_, InputEvent::Click { pos }) => {
            let layout = Layout::new(&state.viewport);
            match layout.hit_test(state.mode, &state.roster, pos) {
                Some(button) => activate(state, button),
                None => false,
            }
        }
        (_, InputEvent::Activate(button)) => activate(state, button),

        (GameMode::Register, InputEvent::Char(c)) => {
            if c.is_control() || state.input_buffer.chars().count() >= MAX_NAME_LEN {
                return false;
            }
            state.input_buffer.push(c);
            true
        }
        (GameMode::Register, InputEvent::Backspace) => state.input_buffer.pop().is_some(),
        (GameMode::Register, InputEvent::Confirm) => {
            let name = std::mem::take(&mut state.input_buffer);
            if !name.trim().is_empty() {
                state.roster.register(&name);
            }
            set_mode(state, GameMode::PlayerSelect);
            true
        }

        _ => false,
    }
}

/// Act on a button if it is live in the current mode
fn activate(state: &mut GameState, button: Button) -> bool {
    match (state.mode, button) {
        (GameMode::Menu, Button::Start) => {
            set_mode(state, GameMode::PlayerSelect);
            true
        }

        (GameMode::PlayerSelect, Button::SelectPlayer(index)) => {
            if !state.roster.select(index) {
                return false;
            }
            state.reset_session();
            set_mode(state, GameMode::Playing);
            true
        }
        (GameMode::PlayerSelect, Button::DeletePlayer(index)) => {
            state.roster.remove(index).is_some()
        }
        (GameMode::PlayerSelect, Button::Register) => {
            if state.roster.is_full() {
                return false;
            }
            state.input_buffer.clear();
            set_mode(state, GameMode::Register);
            true
        }

        (GameMode::GameOver, Button::Restart) => {
            state.reset_session();
            set_mode(state, GameMode::Playing);
            true
        }
        (GameMode::GameOver, Button::ChangePlayer) => {
            set_mode(state, GameMode::PlayerSelect);
            true
        }

        _ => false,
    }
}

pub(crate) fn set_mode(state: &mut GameState, mode: GameMode) {
    if state.mode != mode {
        log::info!("Mode {:?} -> {:?}", state.mode, mode);
    }
    state.mode = mode;
}
