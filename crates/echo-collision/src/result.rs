// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::cmp::Ordering;

use echo_geom::{BlockFace, Vec3};

/// How a result was produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// The volumes already interpenetrated at the start of the step.
    Overlap,
    /// The mover sweeps into the entity during the step.
    Swept,
}

/// One entity contacted by a swept mover.
///
/// Ordering compares `time_of_impact` only (ascending, `f64::total_cmp`):
/// earlier contacts sort first and results with equal time-of-impact compare
/// equal regardless of which entity they reference. `==` follows the same
/// relation.
#[derive(Debug)]
pub struct EntityCollisionResult<'w, E> {
    point: Vec3,
    entity: &'w E,
    face: Option<BlockFace>,
    time_of_impact: f64,
    kind: ContactKind,
}

impl<'w, E> EntityCollisionResult<'w, E> {
    /// Result for a mover that already overlaps `entity` at `origin`.
    pub const fn overlap(origin: Vec3, entity: &'w E) -> Self {
        Self {
            point: origin,
            entity,
            face: None,
            time_of_impact: 0.0,
            kind: ContactKind::Overlap,
        }
    }

    /// Result for a swept contact at `time_of_impact`, reached at `point`.
    /// A `-0.0` time-of-impact is stored as `0.0`.
    pub const fn swept(
        point: Vec3,
        entity: &'w E,
        face: Option<BlockFace>,
        time_of_impact: f64,
    ) -> Self {
        Self {
            point,
            entity,
            face,
            time_of_impact: if time_of_impact == 0.0 { 0.0 } else { time_of_impact },
            kind: ContactKind::Swept,
        }
    }

    /// Mover anchor position at the moment of contact.
    pub const fn point(&self) -> Vec3 {
        self.point
    }

    /// The contacted entity.
    pub const fn entity(&self) -> &'w E {
        self.entity
    }

    /// Face of the mover that made contact; `None` for a starting overlap.
    pub const fn face(&self) -> Option<BlockFace> {
        self.face
    }

    /// Fraction of the displacement travelled before contact, in `[0, 1)`.
    pub const fn time_of_impact(&self) -> f64 {
        self.time_of_impact
    }

    /// How this result was produced.
    pub const fn kind(&self) -> ContactKind {
        self.kind
    }
}

impl<E> Clone for EntityCollisionResult<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntityCollisionResult<'_, E> {}

impl<E> PartialEq for EntityCollisionResult<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for EntityCollisionResult<'_, E> {}

impl<E> PartialOrd for EntityCollisionResult<'_, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for EntityCollisionResult<'_, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time_of_impact.total_cmp(&other.time_of_impact)
    }
}

/// Sorts results by time-of-impact, earliest first. Ties keep query order.
pub fn sort_by_time_of_impact<E>(results: &mut [EntityCollisionResult<'_, E>]) {
    results.sort();
}

/// Earliest contact in `results`, if any.
pub fn first_contact<'a, 'w, E>(
    results: &'a [EntityCollisionResult<'w, E>],
) -> Option<&'a EntityCollisionResult<'w, E>> {
    results.iter().min()
}
