// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_geom::{BoundingBox, SweepResult, Vec3};
use tracing::{debug, instrument, trace};

use crate::config::CollisionConfig;
use crate::entity::CollisionEntity;
use crate::error::CollisionError;
use crate::result::EntityCollisionResult;
use crate::source::{AabbIntersector, ProximitySource, VolumeIntersector};

/// Results of one query, borrowing entities from the proximity source.
pub type QueryResult<'s, S> = Result<
    Vec<EntityCollisionResult<'s, <S as ProximitySource>::Entity>>,
    CollisionError<<S as ProximitySource>::Error>,
>;

/// A swept entity-collision query for one mover over one step.
///
/// The mover's `bounding_box` starts at `origin` and travels along
/// `displacement`. Running the query gathers candidates within
/// [`SweepQuery::search_radius`] of `origin` and reports, per admitted
/// collidable candidate:
/// - an overlap result (`time_of_impact == 0`, no face, point = `origin`) when
///   the volumes already interpenetrate at `origin`, and independently
/// - a swept result when the mover reaches the candidate strictly before the
///   end of the step (`time_of_impact < 1`) and no later than `prior_best`.
///
/// A candidate can therefore yield two results. Results are returned in
/// candidate order; sort them with [`crate::sort_by_time_of_impact`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepQuery {
    bounding_box: BoundingBox,
    origin: Vec3,
    displacement: Vec3,
    extend_radius: f64,
    prior_best: Option<f64>,
}

impl SweepQuery {
    /// Creates a query with no extra search margin and no prior bound.
    pub const fn new(bounding_box: BoundingBox, origin: Vec3, displacement: Vec3) -> Self {
        Self {
            bounding_box,
            origin,
            displacement,
            extend_radius: 0.0,
            prior_best: None,
        }
    }

    /// Adds `radius` to the proximity search (prediction slop, large targets).
    #[must_use]
    pub fn extend_radius(mut self, radius: f64) -> Self {
        self.extend_radius = radius;
        self
    }

    /// Bounds swept contacts by a time-of-impact already established for this
    /// step (e.g. against terrain). Overlap results are unaffected.
    #[must_use]
    pub fn prior_best(mut self, prior_best: Option<f64>) -> Self {
        self.prior_best = prior_best;
        self
    }

    /// Applies the search margin from `config`.
    #[must_use]
    pub fn with_config(self, config: &CollisionConfig) -> Self {
        self.extend_radius(config.extend_radius)
    }

    /// The mover's box.
    pub const fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Mover position at the start of the step.
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Intended motion for the step.
    pub const fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// Radius handed to the proximity source:
    /// `extend_radius + characteristic_radius + |displacement|`.
    pub fn search_radius(&self) -> f64 {
        self.extend_radius + characteristic_radius(&self.bounding_box) + self.displacement.length()
    }

    /// Checks the query's preconditions.
    ///
    /// # Errors
    /// Returns the name of the first violated precondition.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.origin.is_finite() {
            return Err("origin must be finite");
        }
        if !self.displacement.is_finite() {
            return Err("displacement must be finite");
        }
        if !self.extend_radius.is_finite() || self.extend_radius < 0.0 {
            return Err("extend radius must be finite and non-negative");
        }
        if let Some(prior) = self.prior_best {
            if prior.is_nan() || prior < 0.0 {
                return Err("prior time-of-impact must be non-negative");
            }
        }
        Ok(())
    }

    /// Runs the query with the axis-aligned box tests.
    ///
    /// # Errors
    /// [`CollisionError::InvalidArgument`] if [`Self::validate`] fails, or
    /// [`CollisionError::Proximity`] if `source` fails.
    pub fn run<'s, S, F>(&self, source: &'s S, filter: F) -> QueryResult<'s, S>
    where
        S: ProximitySource,
        F: FnMut(&S::Entity) -> bool,
    {
        self.run_with(source, &AabbIntersector, filter)
    }

    /// Runs the query with a caller-supplied intersector.
    ///
    /// # Errors
    /// Same as [`Self::run`].
    #[instrument(
        level = "trace",
        name = "entity_sweep",
        skip_all,
        fields(origin = ?self.origin, displacement = ?self.displacement)
    )]
    pub fn run_with<'s, S, I, F>(
        &self,
        source: &'s S,
        intersector: &I,
        mut filter: F,
    ) -> QueryResult<'s, S>
    where
        S: ProximitySource,
        I: VolumeIntersector + ?Sized,
        F: FnMut(&S::Entity) -> bool,
    {
        self.validate().map_err(CollisionError::InvalidArgument)?;

        let search_radius = self.search_radius();
        let candidates = source
            .nearby(&self.origin, search_radius)
            .map_err(CollisionError::Proximity)?;

        let mut results = Vec::new();
        for &entity in &candidates {
            if !filter(entity) {
                trace!(id = ?entity.id(), "rejected by filter");
                continue;
            }
            if !entity.has_collision() {
                trace!(id = ?entity.id(), "not collidable");
                continue;
            }

            let position = entity.position();
            let target = entity.bounding_box();

            // Interpenetrating volumes have no entry time; report them as
            // touching at the start of the step.
            let overlapping =
                intersector.overlaps(&position.sub(&self.origin), &target, &self.bounding_box);
            if overlapping {
                trace!(id = ?entity.id(), "overlapping at start");
                results.push(EntityCollisionResult::overlap(self.origin, entity));
            }

            let mut sweep = SweepResult::bounded(self.prior_best);
            let improved = intersector.sweep(
                &self.origin,
                &self.displacement,
                &position,
                &target,
                &self.bounding_box,
                &mut sweep,
            );
            // `sweep` starts at the prior bound, so `res < 1` alone can hold
            // without any hit; only a contact recorded for this candidate counts.
            if improved && sweep.hit_within_step() {
                let t = sweep.res();
                trace!(id = ?entity.id(), t, face = ?sweep.face(), overlapping, "swept contact");
                results.push(EntityCollisionResult::swept(
                    self.origin.add(&self.displacement.scale(t)),
                    entity,
                    sweep.face(),
                    t,
                ));
            }
        }

        debug!(
            search_radius,
            candidates = candidates.len(),
            contacts = results.len(),
            "entity sweep complete"
        );
        Ok(results)
    }
}

/// Conservative scalar size of a box: the distance from its anchor to its
/// farthest corner, `sqrt(h² + (w/2)² + (d/2)²)` for a default-offset box.
pub fn characteristic_radius(bounding_box: &BoundingBox) -> f64 {
    bounding_box.bounding_radius()
}

/// Swept collision of `bounding_box` moving from `origin` by `displacement`
/// against the entities of `source`.
///
/// Equivalent to building a [`SweepQuery`] and calling [`SweepQuery::run`].
///
/// # Errors
/// See [`SweepQuery::run`].
pub fn check_collision<'s, S, F>(
    source: &'s S,
    bounding_box: BoundingBox,
    origin: Vec3,
    displacement: Vec3,
    extend_radius: f64,
    filter: F,
    prior_best: Option<f64>,
) -> QueryResult<'s, S>
where
    S: ProximitySource,
    F: FnMut(&S::Entity) -> bool,
{
    SweepQuery::new(bounding_box, origin, displacement)
        .extend_radius(extend_radius)
        .prior_best(prior_best)
        .run(source, filter)
}
