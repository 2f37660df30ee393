// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_geom::{BoundingBox, SweepResult, Vec3};

use crate::entity::CollisionEntity;

/// Spatial lookup answering "which entities are near this point".
///
/// Implementations must be conservative: every entity whose anchor lies
/// within `radius` of `point` has to be returned. Extra entities are fine,
/// the query filters them out. Order is unspecified.
pub trait ProximitySource {
    /// Entity type stored by the source.
    type Entity: CollisionEntity;
    /// Failure raised by the lookup; passed through the query unchanged.
    type Error: std::error::Error + 'static;

    /// Entities whose anchor is within `radius` of `point`.
    fn nearby(&self, point: &Vec3, radius: f64) -> Result<Vec<&Self::Entity>, Self::Error>;
}

/// Static and swept box tests used by the collision query.
pub trait VolumeIntersector {
    /// Returns `true` if `target`, displaced by `offset` from the mover's
    /// anchor, already overlaps `mover`.
    fn overlaps(&self, offset: &Vec3, target: &BoundingBox, mover: &BoundingBox) -> bool;

    /// Sweeps `mover` from `origin` along `displacement` against `target`
    /// resting at `target_pos`.
    ///
    /// Records the contact in `state` and returns `true` only when it is
    /// earlier than `state.res()`; otherwise leaves `state` untouched.
    fn sweep(
        &self,
        origin: &Vec3,
        displacement: &Vec3,
        target_pos: &Vec3,
        target: &BoundingBox,
        mover: &BoundingBox,
        state: &mut SweepResult,
    ) -> bool;
}

/// Axis-aligned box tests from `echo-geom`.
#[derive(Debug, Default, Copy, Clone)]
pub struct AabbIntersector;

impl VolumeIntersector for AabbIntersector {
    fn overlaps(&self, offset: &Vec3, target: &BoundingBox, mover: &BoundingBox) -> bool {
        target.intersect_box(offset, mover)
    }

    fn sweep(
        &self,
        origin: &Vec3,
        displacement: &Vec3,
        target_pos: &Vec3,
        target: &BoundingBox,
        mover: &BoundingBox,
        state: &mut SweepResult,
    ) -> bool {
        target.intersect_box_swept(origin, displacement, target_pos, mover, state)
    }
}
