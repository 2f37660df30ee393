// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors emitted by the entity collision query.
///
/// `E` is the error type of the [`crate::ProximitySource`] the query ran
/// against.
#[derive(Debug, Error)]
pub enum CollisionError<E>
where
    E: std::error::Error + 'static,
{
    /// A query argument violated its precondition; nothing was evaluated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The proximity source failed; its error is passed through as-is.
    #[error(transparent)]
    Proximity(E),
}
