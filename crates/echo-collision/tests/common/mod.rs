// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_collision::{Body, BoundingBox, EntityIndex, Vec3};

pub fn unit_box() -> BoundingBox {
    BoundingBox::new(1.0, 1.0, 1.0).expect("unit box")
}

pub fn body_at(id: u64, x: f64, y: f64, z: f64) -> Body {
    Body::new(id, Vec3::new(x, y, z), unit_box())
}

pub fn world(bodies: impl IntoIterator<Item = Body>) -> EntityIndex<Body> {
    bodies.into_iter().collect()
}

/// Routes `tracing` output to the test harness; set `RUST_LOG=echo_collision=trace`
/// to see per-candidate decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
