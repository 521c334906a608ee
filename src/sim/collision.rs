//! Collision and pass detection
//!
//! Vehicles never leave their lane centers, so a hit reduces to "same lane and
//! vertically close". Everything here is a pure predicate on positions.

use super::state::{Obstacle, Vehicle};
use crate::consts::{OBSTACLE_HALF_HEIGHT, VEHICLE_HALF_HEIGHT, VEHICLE_Y};

/// True if `obstacle_y` lies strictly inside the band of half-height `band`
/// around `vehicle_y`
#[inline]
pub fn in_collision_band(obstacle_y: f32, vehicle_y: f32, band: f32) -> bool {
    obstacle_y > vehicle_y - band && obstacle_y < vehicle_y + band
}

/// Check whether an obstacle hits the vehicle. Obstacles that already cost a
/// life never hit again.
pub fn collides(obstacle: &Obstacle, vehicle: &Vehicle, band: f32) -> bool {
    !obstacle.struck
        && obstacle.lane == vehicle.lane()
        && in_collision_band(obstacle.pos.y, VEHICLE_Y, band)
}

/// True once the obstacle is fully past: its top edge has dropped below the
/// vehicle's bottom edge
#[inline]
pub fn has_passed(obstacle_y: f32) -> bool {
    obstacle_y + OBSTACLE_HALF_HEIGHT < VEHICLE_Y - VEHICLE_HALF_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use glam::Vec2;

    fn obstacle_at(lane: usize, y: f32) -> Obstacle {
        let mut obstacle = Obstacle::new(ObstacleKind::Car);
        obstacle.lane = lane;
        obstacle.pos = Vec2::new(250.0, y);
        obstacle
    }

    #[test]
    fn test_band_boundaries() {
        assert!(in_collision_band(VEHICLE_Y + 39.0, VEHICLE_Y, 40.0));
        assert!(in_collision_band(VEHICLE_Y - 39.0, VEHICLE_Y, 40.0));
        assert!(!in_collision_band(VEHICLE_Y + 41.0, VEHICLE_Y, 40.0));
        assert!(!in_collision_band(VEHICLE_Y - 41.0, VEHICLE_Y, 40.0));
        // The band is open at both ends
        assert!(!in_collision_band(VEHICLE_Y + 40.0, VEHICLE_Y, 40.0));
    }

    #[test]
    fn test_collides_requires_same_lane() {
        let vehicle = Vehicle::default();
        assert!(collides(&obstacle_at(1, VEHICLE_Y), &vehicle, 40.0));
        assert!(!collides(&obstacle_at(0, VEHICLE_Y), &vehicle, 40.0));
        assert!(!collides(&obstacle_at(2, VEHICLE_Y), &vehicle, 40.0));
    }

    #[test]
    fn test_struck_obstacle_does_not_collide() {
        let mut obstacle = obstacle_at(1, VEHICLE_Y);
        obstacle.struck = true;
        assert!(!collides(&obstacle, &Vehicle::default(), 40.0));
    }

    #[test]
    fn test_has_passed_threshold() {
        // Top edge at y + 25 must clear the vehicle's bottom edge at 50
        assert!(!has_passed(25.0));
        assert!(has_passed(24.9));
    }
}
