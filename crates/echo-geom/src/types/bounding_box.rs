// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;
use crate::math::{Vec3, EPSILON};
use crate::sweep::SweepResult;
use crate::types::face::BlockFace;

/// Axis-aligned box attached to an entity, expressed relative to the entity's
/// position (its anchor).
///
/// Invariants:
/// - `width`, `height`, `depth` are finite and `>= 0`.
/// - The box spans `offset ..= offset + (width, height, depth)` relative to the
///   anchor. The default offset `(-width/2, 0, -depth/2)` centres the box on
///   the anchor in X/Z and stands it on the anchor in Y (feet-anchored).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    width: f64,
    height: f64,
    depth: f64,
    offset: Vec3,
}

impl BoundingBox {
    /// Builds a feet-anchored box centred on the anchor in X and Z.
    ///
    /// # Errors
    /// Returns [`GeomError::InvalidDimension`] if any dimension is negative or
    /// not finite.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, GeomError> {
        Self::with_offset(
            width,
            height,
            depth,
            Vec3::new(-width / 2.0, 0.0, -depth / 2.0),
        )
    }

    /// Builds a box whose minimum corner sits at `offset` relative to the anchor.
    ///
    /// # Errors
    /// Returns [`GeomError::InvalidDimension`] for a negative or non-finite
    /// dimension and [`GeomError::InvalidOffset`] for a non-finite offset.
    pub fn with_offset(
        width: f64,
        height: f64,
        depth: f64,
        offset: Vec3,
    ) -> Result<Self, GeomError> {
        for (axis, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeomError::InvalidDimension { axis, value });
            }
        }
        if !offset.is_finite() {
            return Err(GeomError::InvalidOffset(offset.to_array()));
        }
        Ok(Self {
            width,
            height,
            depth,
            offset,
        })
    }

    /// Extent along X.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Extent along Y.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Extent along Z.
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// Minimum corner relative to the anchor.
    pub const fn relative_start(&self) -> Vec3 {
        self.offset
    }

    /// Maximum corner relative to the anchor.
    pub fn relative_end(&self) -> Vec3 {
        self.offset
            .add(&Vec3::new(self.width, self.height, self.depth))
    }

    /// Relative minimum X.
    pub const fn min_x(&self) -> f64 {
        self.offset.x()
    }

    /// Relative maximum X.
    pub fn max_x(&self) -> f64 {
        self.offset.x() + self.width
    }

    /// Relative minimum Y.
    pub const fn min_y(&self) -> f64 {
        self.offset.y()
    }

    /// Relative maximum Y.
    pub fn max_y(&self) -> f64 {
        self.offset.y() + self.height
    }

    /// Relative minimum Z.
    pub const fn min_z(&self) -> f64 {
        self.offset.z()
    }

    /// Relative maximum Z.
    pub fn max_z(&self) -> f64 {
        self.offset.z() + self.depth
    }

    /// Centre of the box relative to the anchor.
    pub fn center_offset(&self) -> Vec3 {
        self.offset
            .add(&Vec3::new(self.width, self.height, self.depth).scale(0.5))
    }

    /// Distance from the anchor to the farthest corner of the box.
    ///
    /// Any point of the box lies within this radius of the anchor, so a
    /// proximity query sized with it never misses a box the anchor can reach.
    pub fn bounding_radius(&self) -> f64 {
        let start = self.relative_start().to_array();
        let end = self.relative_end().to_array();
        let far = Vec3::new(
            start[0].abs().max(end[0].abs()),
            start[1].abs().max(end[1].abs()),
            start[2].abs().max(end[2].abs()),
        );
        far.length()
    }

    /// Returns a box grown by `x`, `y`, `z` in total along each axis, keeping
    /// its centre fixed. Negative amounts shrink the box, never below zero.
    #[must_use]
    pub fn expand(&self, x: f64, y: f64, z: f64) -> Self {
        let width = (self.width + x).max(0.0);
        let height = (self.height + y).max(0.0);
        let depth = (self.depth + z).max(0.0);
        let center = self.center_offset();
        Self {
            width,
            height,
            depth,
            offset: center.sub(&Vec3::new(width, height, depth).scale(0.5)),
        }
    }

    /// Returns a box shrunk by `x`, `y`, `z` in total along each axis.
    #[must_use]
    pub fn contract(&self, x: f64, y: f64, z: f64) -> Self {
        self.expand(-x, -y, -z)
    }

    /// Returns `true` if `point` (relative to the anchor) lies inside the box,
    /// inclusive on faces.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let p = point.to_array();
        let a = self.relative_start().to_array();
        let b = self.relative_end().to_array();
        (0..3).all(|i| a[i] <= p[i] && p[i] <= b[i])
    }

    /// World-space minimum and maximum corners when anchored at `position`.
    pub fn world_bounds(&self, position: &Vec3) -> (Vec3, Vec3) {
        (
            position.add(&self.relative_start()),
            position.add(&self.relative_end()),
        )
    }

    /// Returns `true` if this box, displaced by `position_relative`, overlaps
    /// `other` (anchored at the origin).
    ///
    /// Overlap is exclusive on faces: boxes must interpenetrate by more than
    /// `EPSILON / 2` on every axis, so boxes resting flush against each other
    /// are not overlapping.
    pub fn intersect_box(&self, position_relative: &Vec3, other: &Self) -> bool {
        let rel = position_relative.to_array();
        let a_min = self.relative_start().to_array();
        let a_max = self.relative_end().to_array();
        let b_min = other.relative_start().to_array();
        let b_max = other.relative_end().to_array();
        let half = EPSILON / 2.0;
        (0..3).all(|i| {
            a_min[i] + rel[i] <= b_max[i] - half && a_max[i] + rel[i] >= b_min[i] + half
        })
    }

    /// Sweeps `moving` from `ray_start` along `ray_direction` against this box
    /// placed at `shape_pos`, recording the first contact in `result`.
    ///
    /// The target is expanded by `moving` (Minkowski sum) and the mover's
    /// anchor is cast as a ray against it with the slab method. A hit is
    /// accepted only if:
    /// - the entry fraction lies in `[0, 1]` and is strictly below
    ///   `result.res()`,
    /// - the ray actually passes through the interior (`entry < exit`), so
    ///   grazing an edge or sliding flush along a face is not a hit,
    /// - the volumes are not already interpenetrating at the start, which has
    ///   no meaningful entry time (use [`Self::intersect_box`] for that).
    ///
    /// On a hit `result` receives the entry fraction, the contact normal
    /// (pointing back against the motion), the mover's leading face, and the
    /// collided position; the method returns `true`. Otherwise `result` is left
    /// untouched and the method returns `false`.
    pub fn intersect_box_swept(
        &self,
        ray_start: &Vec3,
        ray_direction: &Vec3,
        shape_pos: &Vec3,
        moving: &Self,
        result: &mut SweepResult,
    ) -> bool {
        let origin = ray_start.to_array();
        let dir = ray_direction.to_array();
        let lo = shape_pos
            .add(&self.relative_start())
            .sub(&moving.relative_end())
            .to_array();
        let hi = shape_pos
            .add(&self.relative_end())
            .sub(&moving.relative_start())
            .to_array();
        let half = EPSILON / 2.0;

        let mut entry = f64::NEG_INFINITY;
        let mut exit = f64::INFINITY;
        let mut entry_axis = None;
        for axis in 0..3 {
            let near = lo[axis] - origin[axis];
            let far = hi[axis] - origin[axis];
            let d = dir[axis];
            if d == 0.0 {
                // Not moving on this axis: the mover must already sit inside
                // the slab or it can never touch the target.
                if near > -half || far < half {
                    return false;
                }
                continue;
            }
            let (t_near, t_far) = if d > 0.0 {
                (near / d, far / d)
            } else {
                (far / d, near / d)
            };
            if t_near > entry {
                entry = t_near;
                entry_axis = Some(axis);
            }
            exit = exit.min(t_far);
        }

        let Some(axis) = entry_axis else {
            return false;
        };
        if entry >= exit || entry < -EPSILON || entry > 1.0 {
            return false;
        }
        // Flush starts on a negative axis divide to -0.0; report them as 0.0.
        let entry = if entry <= 0.0 { 0.0 } else { entry };
        if entry >= result.res() {
            return false;
        }

        let positive = dir[axis] > 0.0;
        let mut normal = [0.0; 3];
        normal[axis] = if positive { -1.0 } else { 1.0 };
        result.record_hit(
            entry,
            Vec3::from(normal),
            BlockFace::from_axis(axis, positive),
            ray_start.add(&ray_direction.scale(entry)),
        );
        true
    }
}
