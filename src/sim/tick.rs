//! Simulation tick
//!
//! Advances obstacles, resolves collisions and scoring, and ramps difficulty.
//! Distances are speeds times the explicit `dt`, so the simulation rate is
//! independent of how often the frontend draws.

use super::collision::{collides, has_passed};
use super::machine::{InputEvent, handle_event, set_mode};
use super::state::{GameMode, GameState};
use crate::consts::{DASH_PERIOD, LANE_COUNT, MIDDLE_LANE, RECYCLE_DEPTH, SIM_DT, VEHICLE_Y};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events applied, in order, before the simulation advances
    pub events: Vec<InputEvent>,
    /// Demo mode - the simulation steers the vehicle itself
    pub idle_mode: bool,
}

/// Apply input, then advance the game by `dt` seconds if it is being played.
/// Long intervals are split into steps short enough that no obstacle can jump
/// across the collision band.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    for event in &input.events {
        handle_event(state, event);
    }

    if state.mode != GameMode::Playing {
        return;
    }

    if input.idle_mode {
        if let Some(event) = autopilot(state) {
            handle_event(state, &event);
        }
    }

    let mut remaining = dt.max(0.0);
    while remaining > 0.0 && state.mode == GameMode::Playing {
        let h = remaining.min(max_step(state));
        step(state, h);
        remaining -= h;
    }
}

/// Longest step whose fall stays within one band half-height
fn max_step(state: &GameState) -> f32 {
    let speed = state.tuning.obstacle_speed
        * state.viewport.speed_factor()
        * state.session.speed_multiplier;
    let band = state.tuning.collision_band;
    if speed > 0.0 && band > 0.0 {
        SIM_DT.min(band / speed)
    } else {
        SIM_DT
    }
}

/// One simulation step. Obstacles are processed in slot order.
fn step(state: &mut GameState, dt: f32) {
    let speed_factor = state.viewport.speed_factor();
    let pace = dt * speed_factor * state.session.speed_multiplier;
    let fall = state.tuning.obstacle_speed * pace;
    let recycle_below = -RECYCLE_DEPTH * speed_factor;
    let band = state.tuning.collision_band;

    state.session.time_ticks += 1;
    let offset =
        (state.session.scroll_offset - state.tuning.scroll_speed * pace).rem_euclid(DASH_PERIOD);
    // rem_euclid can round up to the period itself
    state.session.scroll_offset = if offset < DASH_PERIOD { offset } else { 0.0 };

    for slot in 0..state.obstacles.len() {
        let hit = state
            .obstacles
            .get(slot)
            .is_some_and(|o| !state.session.collided && collides(o, &state.vehicle, band));
        if hit {
            if let Some(obstacle) = state.obstacles.get_mut(slot) {
                obstacle.struck = true;
            }
            lose_life(state);
        }

        let Some(obstacle) = state.obstacles.get_mut(slot) else {
            continue;
        };
        obstacle.pos.y -= fall;

        if !state.session.collided
            && !obstacle.passed
            && !obstacle.struck
            && has_passed(obstacle.pos.y)
        {
            obstacle.passed = true;
            state.session.score += 1;
        }

        if obstacle.pos.y < recycle_below {
            state.obstacles.try_respawn(
                slot,
                &state.lanes,
                state.viewport.spawn_line(),
                &state.tuning,
                &mut state.rng,
            );
        }
    }

    if !state.session.collided {
        state.session.speed_multiplier += state.tuning.speed_ramp * dt;
    }
}

/// Take one life. The last one ends the episode; otherwise the vehicle is
/// put back in the middle lane.
fn lose_life(state: &mut GameState) {
    state.vehicle.lives = state.vehicle.lives.saturating_sub(1);
    if state.vehicle.lives == 0 {
        state.session.collided = true;
        log::info!(
            "Game over: score {} after {} ticks",
            state.session.score,
            state.session.time_ticks
        );
        set_mode(state, GameMode::GameOver);
    } else {
        log::debug!("Crash, {} lives left", state.vehicle.lives);
        state.vehicle.recenter();
    }
}

/// Pick a lane change toward the lane whose nearest oncoming obstacle is
/// farthest away. Moves at most one lane per tick.
fn autopilot(state: &GameState) -> Option<InputEvent> {
    let clearance = |lane: usize| {
        state
            .obstacles
            .iter()
            .filter(|o| o.lane == lane && !o.struck)
            .map(|o| o.pos.y - VEHICLE_Y)
            .filter(|gap| *gap > -state.tuning.collision_band)
            .fold(f32::INFINITY, f32::min)
    };

    let current = state.vehicle.lane();
    let best = (0..LANE_COUNT).max_by(|a, b| {
        clearance(*a)
            .partial_cmp(&clearance(*b))
            .unwrap_or(std::cmp::Ordering::Equal)
            // Prefer staying put, then the middle lane
            .then_with(|| (*a == current).cmp(&(*b == current)))
            .then_with(|| (*a == MIDDLE_LANE).cmp(&(*b == MIDDLE_LANE)))
    })?;

    if clearance(best) <= clearance(current) {
        return None;
    }
    match best.cmp(&current) {
        std::cmp::Ordering::Less => Some(InputEvent::MoveLeft),
        std::cmp::Ordering::Greater => Some(InputEvent::MoveRight),
        std::cmp::Ordering::Equal => None,
    }
}
