// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by entity collision (bounding box, faces).
//!
//! Determinism notes:
//! - Overlap semantics are exclusive on faces (with an `EPSILON / 2` margin)
//!   so entities standing flush against each other never report contact.
//! - Sweep math is plain `f64` without fused multiply-add, so identical
//!   inputs yield identical time-of-impact values on every platform.

#[doc = "Entity-relative axis-aligned boxes with static and swept tests."]
pub mod bounding_box;
#[doc = "Axis-aligned box faces."]
pub mod face;
