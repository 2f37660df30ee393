// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scratch state carried through a swept box test.

use crate::math::Vec3;
use crate::types::face::BlockFace;

/// Best contact found so far by one or more swept tests.
///
/// `res` is the fraction of the displacement at which contact first occurs.
/// Values `>= 1` (including the [`SweepResult::NO_HIT`] sentinel) mean the
/// mover does not reach anything within the step. Sweep tests only ever lower
/// `res`, so seeding it with a bound makes them ignore contacts that would
/// happen no earlier than that bound.
///
/// One value belongs to one evaluation; create a fresh one per candidate
/// rather than sharing it across candidates or threads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepResult {
    res: f64,
    normal: Vec3,
    face: Option<BlockFace>,
    collided_position: Vec3,
}

impl SweepResult {
    /// Sentinel time-of-impact meaning "no collision".
    pub const NO_HIT: f64 = f64::MAX;

    /// Creates an empty result whose best time-of-impact is `res`.
    pub const fn new(res: f64) -> Self {
        Self {
            res,
            normal: Vec3::ZERO,
            face: None,
            collided_position: Vec3::ZERO,
        }
    }

    /// Creates an empty result bounded by `bound`, or unbounded when `None`.
    pub fn bounded(bound: Option<f64>) -> Self {
        Self::new(bound.unwrap_or(Self::NO_HIT))
    }

    /// Best time-of-impact recorded so far.
    pub const fn res(&self) -> f64 {
        self.res
    }

    /// Contact normal of the recorded hit (zero when nothing was hit).
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Face of the mover that leads into the recorded hit.
    pub const fn face(&self) -> Option<BlockFace> {
        self.face
    }

    /// Mover anchor position at the moment of the recorded hit.
    pub const fn collided_position(&self) -> Vec3 {
        self.collided_position
    }

    /// Returns `true` if the recorded contact happens within the step.
    pub fn hit_within_step(&self) -> bool {
        self.res < 1.0
    }

    /// Overwrites the recorded hit. Intersectors call this once they have
    /// found a contact earlier than [`Self::res`].
    pub fn record_hit(
        &mut self,
        res: f64,
        normal: Vec3,
        face: Option<BlockFace>,
        collided_position: Vec3,
    ) {
        self.res = res;
        self.normal = normal;
        self.face = face;
        self.collided_position = collided_position;
    }
}

impl Default for SweepResult {
    fn default() -> Self {
        Self::new(Self::NO_HIT)
    }
}
