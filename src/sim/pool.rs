//! Fixed obstacle pool with in-place recycling
//!
//! Slots are never added or removed. A slot that scrolls off the bottom is
//! respawned at the spawn line once the placement check allows it; until then
//! it stays where it is and is retried on the next tick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lanes::LaneSet;
use super::state::{Obstacle, ObstacleKind};
use crate::consts::{LANE_COUNT, POOL_SIZE, RESET_SPAWN_OFFSET, RESET_SPAWN_SPACING};
use crate::tuning::{PlacementRule, Tuning};

/// Arena of obstacle slots indexed by stable slot number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: [Obstacle; POOL_SIZE],
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Obstacle::new(ObstacleKind::Car)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Obstacle> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Obstacle> {
        self.slots.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter()
    }

    /// Staggered start-of-episode layout above the spawn line
    pub fn reset_layout<R: Rng>(&mut self, lanes: &LaneSet, spawn_line: f32, rng: &mut R) {
        for (i, obstacle) in self.slots.iter_mut().enumerate() {
            let lane = rng.random_range(0..LANE_COUNT);
            let y = spawn_line + RESET_SPAWN_OFFSET - i as f32 * RESET_SPAWN_SPACING;
            *obstacle = Obstacle::new(ObstacleKind::random(rng));
            obstacle.lane = lane;
            obstacle.pos = glam::Vec2::new(lanes.position(lane), y);
        }
    }

    /// Would an obstacle at (`lane`, `y`) in `slot` crowd any other slot?
    pub fn placement_blocked(
        &self,
        slot: usize,
        lane: usize,
        y: f32,
        clearance: f32,
        rule: PlacementRule,
    ) -> bool {
        self.slots.iter().enumerate().any(|(j, other)| {
            if j == slot || (other.pos.y - y).abs() >= clearance {
                return false;
            }
            match rule {
                PlacementRule::CrossLane => other.lane != lane,
                PlacementRule::AnyLane => true,
            }
        })
    }

    /// Try to respawn `slot` at the spawn line in a random lane.
    ///
    /// Returns false (leaving the slot untouched) if the candidate lane is
    /// crowded; the caller retries on a later tick.
    pub fn try_respawn<R: Rng>(
        &mut self,
        slot: usize,
        lanes: &LaneSet,
        spawn_line: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> bool {
        if slot >= self.slots.len() {
            return false;
        }
        let lane = rng.random_range(0..LANE_COUNT);
        if self.placement_blocked(slot, lane, spawn_line, tuning.spawn_clearance, tuning.placement)
        {
            log::debug!("Spawn of slot {} in lane {} rejected", slot, lane);
            return false;
        }

        let obstacle = &mut self.slots[slot];
        obstacle.kind = ObstacleKind::random(rng);
        obstacle.lane = lane;
        obstacle.pos = glam::Vec2::new(lanes.position(lane), spawn_line);
        obstacle.passed = false;
        obstacle.struck = false;
        log::trace!("Slot {} respawned as {} in lane {}", slot, obstacle.kind.as_str(), lane);
        true
    }

    /// Snap every obstacle to the lane of `lanes` nearest its current x
    pub fn remap_lanes(&mut self, lanes: &LaneSet) {
        for obstacle in &mut self.slots {
            obstacle.lane = lanes.nearest(obstacle.pos.x);
            obstacle.pos.x = lanes.position(obstacle.lane);
        }
    }

    /// Put `slot` at a given lane and height with fresh flags, keeping its kind
    pub fn place(&mut self, slot: usize, lane: usize, y: f32, lanes: &LaneSet) {
        if let Some(obstacle) = self.slots.get_mut(slot) {
            obstacle.lane = lane.min(LANE_COUNT - 1);
            obstacle.pos = glam::Vec2::new(lanes.position(obstacle.lane), y);
            obstacle.passed = false;
            obstacle.struck = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn lanes() -> LaneSet {
        LaneSet::for_viewport(500.0)
    }

    #[test]
    fn test_reset_layout_staggers_slots() {
        let mut pool = ObstaclePool::new();
        let mut rng = Pcg32::seed_from_u64(9);
        pool.reset_layout(&lanes(), 700.0, &mut rng);
        let ys: Vec<f32> = pool.iter().map(|o| o.pos.y).collect();
        assert_eq!(ys, vec![1000.0, 750.0, 500.0, 250.0]);
        assert!(pool.iter().all(|o| o.lane < LANE_COUNT && !o.passed));
    }

    #[test]
    fn test_respawn_succeeds_with_clear_road() {
        let lanes = lanes();
        let mut pool = ObstaclePool::new();
        for slot in 1..POOL_SIZE {
            pool.place(slot, slot - 1, 5000.0, &lanes);
        }
        pool.place(0, 0, -60.0, &lanes);
        if let Some(o) = pool.get_mut(0) {
            o.passed = true;
        }

        let mut rng = Pcg32::seed_from_u64(1);
        assert!(pool.try_respawn(0, &lanes, 700.0, &Tuning::default(), &mut rng));
        let o = pool.get(0).unwrap();
        assert_eq!(o.pos.y, 700.0);
        assert_eq!(o.pos.x, lanes.position(o.lane));
        assert!(!o.passed);
    }

    #[test]
    fn test_cross_lane_neighbour_blocks_spawn() {
        let lanes = lanes();
        let mut pool = ObstaclePool::new();
        // One neighbour in every lane just below the spawn line
        for slot in 1..POOL_SIZE {
            pool.place(slot, slot - 1, 650.0, &lanes);
        }
        pool.place(0, 2, -60.0, &lanes);

        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..20 {
            assert!(!pool.try_respawn(0, &lanes, 700.0, &Tuning::classic(), &mut rng));
        }
        let o = pool.get(0).unwrap();
        assert_eq!(o.pos.y, -60.0);
        assert_eq!(o.lane, 2);
    }

    #[test]
    fn test_same_lane_rule_differs_between_policies() {
        let lanes = lanes();
        let mut pool = ObstaclePool::new();
        pool.place(1, 1, 650.0, &lanes);
        pool.place(2, 1, 5000.0, &lanes);
        pool.place(3, 1, 5000.0, &lanes);

        // Same lane and 50 units apart
        assert!(!pool.placement_blocked(0, 1, 700.0, 150.0, PlacementRule::CrossLane));
        assert!(pool.placement_blocked(0, 1, 700.0, 150.0, PlacementRule::AnyLane));
        // Different lane is blocked either way
        assert!(pool.placement_blocked(0, 0, 700.0, 150.0, PlacementRule::CrossLane));
        // Exactly at the clearance distance is allowed
        assert!(!pool.placement_blocked(0, 0, 800.0, 150.0, PlacementRule::AnyLane));
    }

    #[test]
    fn test_remap_lanes_snaps_positions() {
        let mut pool = ObstaclePool::new();
        for slot in 0..POOL_SIZE {
            pool.place(slot, 2, 100.0, &lanes());
        }
        // x=350 sits 50 from the new left lane and 150 from the middle one
        let wide = LaneSet::for_viewport(1000.0);
        pool.remap_lanes(&wide);
        assert!(pool.iter().all(|o| o.lane == 0 && o.pos.x == 300.0));
    }

    #[test]
    fn test_remap_lanes_picks_nearest_not_same_index() {
        let mut pool = ObstaclePool::new();
        for slot in 0..POOL_SIZE {
            pool.place(slot, 0, 100.0, &lanes());
        }
        // Lanes at 60/100/140: the old left lane x=150 is closest to the right one
        let narrow = LaneSet::for_viewport(200.0);
        pool.remap_lanes(&narrow);
        for obstacle in pool.iter() {
            assert_eq!(obstacle.lane, 2);
            assert_eq!(obstacle.pos.x, 140.0);
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_keeps_cross_lane_clearance(
            seed in any::<u64>(),
            heights in proptest::collection::vec(-100.0f32..1200.0, 3),
            neighbour_lanes in proptest::collection::vec(0usize..3, 3),
        ) {
            let lanes = lanes();
            let mut pool = ObstaclePool::new();
            for slot in 1..POOL_SIZE {
                pool.place(slot, neighbour_lanes[slot - 1], heights[slot - 1], &lanes);
            }
            pool.place(0, 0, -100.0, &lanes);

            let mut rng = Pcg32::seed_from_u64(seed);
            for rule in [PlacementRule::CrossLane, PlacementRule::AnyLane] {
                let tuning = Tuning { placement: rule, ..Tuning::default() };
                if pool.try_respawn(0, &lanes, 700.0, &tuning, &mut rng) {
                    let spawned = pool.get(0).unwrap().clone();
                    for other in pool.iter().skip(1) {
                        if other.lane != spawned.lane {
                            prop_assert!((other.pos.y - spawned.pos.y).abs() >= 150.0);
                        }
                    }
                    pool.place(0, 0, -100.0, &lanes);
                }
            }
        }
    }
}
