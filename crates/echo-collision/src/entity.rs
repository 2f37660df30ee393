// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use echo_geom::{BoundingBox, Vec3};

/// Read-only view of an entity as seen by the collision query.
///
/// Values are read once per candidate per query; implementations should
/// return a consistent snapshot for the duration of the call.
pub trait CollisionEntity {
    /// Stable identifier, used for deterministic ordering and filtering.
    type Id: Copy + Ord + fmt::Debug;

    /// Identifier of this entity.
    fn id(&self) -> Self::Id;

    /// Whether the entity takes part in entity collision at all.
    fn has_collision(&self) -> bool {
        true
    }

    /// Anchor position of the entity.
    fn position(&self) -> Vec3;

    /// Bounding box relative to [`Self::position`].
    fn bounding_box(&self) -> BoundingBox;
}

/// Plain entity record: id, anchor position, box, and a collision flag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    id: u64,
    position: Vec3,
    bounding_box: BoundingBox,
    collidable: bool,
}

impl Body {
    /// Creates a collidable body.
    pub const fn new(id: u64, position: Vec3, bounding_box: BoundingBox) -> Self {
        Self {
            id,
            position,
            bounding_box,
            collidable: true,
        }
    }

    /// Marks the body as non-collidable (ghosts, markers, spectators).
    #[must_use]
    pub const fn without_collision(mut self) -> Self {
        self.collidable = false;
        self
    }

    /// Moves the body's anchor.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Toggles participation in entity collision.
    pub fn set_collidable(&mut self, collidable: bool) {
        self.collidable = collidable;
    }
}

impl CollisionEntity for Body {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn has_collision(&self) -> bool {
        self.collidable
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }
}
