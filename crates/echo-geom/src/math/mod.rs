// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vector helpers for entity positions and displacements.
//!
//! All operations are `f64` to match the precision entity positions are
//! stored with.

mod vec3;

pub use vec3::Vec3;

/// Tolerance used by box overlap and sweep tests.
///
/// Faces closer than this are treated as touching rather than overlapping, so
/// two boxes resting flush against each other never report an overlap.
pub const EPSILON: f64 = 1e-7;
