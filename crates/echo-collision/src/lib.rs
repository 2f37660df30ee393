// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-collision: swept entity-vs-entity collision for tick-based movers.
//!
//! Given a mover's box, start position, and displacement for one tick, the
//! query gathers nearby entities from a [`ProximitySource`], filters them, and
//! reports every entity the mover overlaps at the start or sweeps into before
//! the end of the step, with the fraction of the displacement at which contact
//! happens. Results order by that fraction so the physics step can clamp
//! motion to the first contact and fire contact events for the rest.
//!
//! The query is pure: it reads entity snapshots and never mutates them.
#![forbid(unsafe_code)]

mod config;
mod entity;
mod error;
mod index;
mod query;
mod result;
mod source;

pub use config::{CollisionConfig, ConfigError, ConfigService, ConfigStore, MemoryConfigStore};
pub use echo_geom::{BlockFace, BoundingBox, GeomError, SweepResult, Vec3};
pub use entity::{Body, CollisionEntity};
pub use error::CollisionError;
pub use index::EntityIndex;
pub use query::{characteristic_radius, check_collision, QueryResult, SweepQuery};
pub use result::{first_contact, sort_by_time_of_impact, ContactKind, EntityCollisionResult};
pub use source::{AabbIntersector, ProximitySource, VolumeIntersector};
