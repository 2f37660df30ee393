// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Echo entity collision.

This crate provides:
- `f64` vectors for positions and displacements (`Vec3`).
- Entity-relative axis-aligned boxes (`BoundingBox`) with a static overlap
  test and a swept (continuous) test against a stationary box.
- Box faces (`BlockFace`) and the sweep scratch record (`SweepResult`).

Design notes:
- Deterministic: no ambient RNG, no FMA; identical inputs give identical
  time-of-impact values.
- Boxes are validated on construction; dimensions are finite and `>= 0`.
- Rustdoc is treated as part of the contract; public items are documented.
"]

mod error;
/// Vector math and tolerances.
pub mod math;
/// Swept-test scratch state.
pub mod sweep;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use math::{Vec3, EPSILON};
pub use sweep::SweepResult;
pub use types::bounding_box::BoundingBox;
pub use types::face::BlockFace;
