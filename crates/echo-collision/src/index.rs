// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::convert::Infallible;
use std::collections::BTreeMap;

use echo_geom::Vec3;

use crate::entity::CollisionEntity;
use crate::source::ProximitySource;

/// In-memory entity store answering radius lookups by linear scan.
///
/// Why this exists:
/// - Reference [`ProximitySource`] for tests, benches, and small worlds.
/// - Keyed by entity id in a `BTreeMap`, so `nearby` yields candidates in
///   ascending id order and repeated queries see identical sequences.
///
/// Lookups are `O(n)`. Worlds with many entities should answer
/// [`ProximitySource::nearby`] from their chunk or grid index instead.
#[derive(Debug, Clone)]
pub struct EntityIndex<E: CollisionEntity> {
    items: BTreeMap<E::Id, E>,
}

impl<E: CollisionEntity> Default for EntityIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CollisionEntity> EntityIndex<E> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the entity with the same id, returning the old one.
    pub fn upsert(&mut self, entity: E) -> Option<E> {
        self.items.insert(entity.id(), entity)
    }

    /// Removes an entity if present.
    pub fn remove(&mut self, id: &E::Id) -> Option<E> {
        self.items.remove(id)
    }

    /// Looks up an entity by id.
    pub fn get(&self, id: &E::Id) -> Option<&E> {
        self.items.get(id)
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when no entity is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.items.values()
    }

    /// Entities whose anchor lies within `radius` of `point` (inclusive), in
    /// ascending id order.
    pub fn within(&self, point: &Vec3, radius: f64) -> Vec<&E> {
        let limit = radius * radius;
        self.items
            .values()
            .filter(|e| e.position().distance_squared(point) <= limit)
            .collect()
    }
}

impl<E: CollisionEntity> FromIterator<E> for EntityIndex<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut index = Self::new();
        for entity in iter {
            index.upsert(entity);
        }
        index
    }
}

impl<E: CollisionEntity> ProximitySource for EntityIndex<E> {
    type Entity = E;
    type Error = Infallible;

    fn nearby(&self, point: &Vec3, radius: f64) -> Result<Vec<&E>, Infallible> {
        Ok(self.within(point, radius))
    }
}
