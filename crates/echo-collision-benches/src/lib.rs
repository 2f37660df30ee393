// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared world builders for the entity sweep benchmarks.

use echo_collision::{Body, BoundingBox, EntityIndex, GeomError, Vec3};

/// Lays `n` unit-box bodies on a square grid in the XZ plane, `spacing`
/// blocks apart, centred on the origin. Ids start at 1.
pub fn grid_world(n: u32, spacing: f64) -> Result<EntityIndex<Body>, GeomError> {
    let unit = BoundingBox::new(1.0, 1.0, 1.0)?;
    let mut side = 1_u32;
    while side * side < n {
        side += 1;
    }
    let half = f64::from(side - 1) * spacing / 2.0;
    Ok((0..n)
        .map(|i| {
            let x = f64::from(i % side) * spacing - half;
            let z = f64::from(i / side) * spacing - half;
            Body::new(u64::from(i) + 1, Vec3::new(x, 0.0, z), unit)
        })
        .collect())
}
