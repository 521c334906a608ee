//! Lane geometry
//!
//! The road is centered in the viewport with three evenly spaced lanes. Lane
//! positions are recomputed whenever the viewport changes size; everything
//! else refers to lanes by index.

use serde::{Deserialize, Serialize};

use crate::consts::{LANE_COUNT, LANE_SPACING_FRACTION};

/// Horizontal positions of the lanes, left to right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneSet {
    positions: [f32; LANE_COUNT],
}

impl LaneSet {
    /// Lay out lanes for a viewport of the given width
    pub fn for_viewport(width: f32) -> Self {
        let center = width / 2.0;
        let spacing = width * LANE_SPACING_FRACTION;
        let mid = (LANE_COUNT / 2) as f32;
        let positions = std::array::from_fn(|i| center + (i as f32 - mid) * spacing);
        Self { positions }
    }

    /// X coordinate of lane `index` (clamped to the last lane)
    #[inline]
    pub fn position(&self, index: usize) -> f32 {
        self.positions[index.min(LANE_COUNT - 1)]
    }

    pub fn positions(&self) -> &[f32; LANE_COUNT] {
        &self.positions
    }

    /// Index of the lane closest to `x`; ties go to the leftmost lane
    pub fn nearest(&self, x: f32) -> usize {
        self.positions
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (x - **a)
                    .abs()
                    .partial_cmp(&(x - **b).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Distance between neighbouring lanes
    pub fn spacing(&self) -> f32 {
        self.positions[1] - self.positions[0]
    }
}
