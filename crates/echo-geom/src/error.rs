// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised when constructing geometry values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A box dimension was negative, NaN, or infinite.
    #[error("invalid {axis} dimension: {value}")]
    InvalidDimension {
        /// Dimension name (`width`, `height`, or `depth`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A box offset component was NaN or infinite.
    #[error("invalid box offset: {0:?}")]
    InvalidOffset([f64; 3]),
}
