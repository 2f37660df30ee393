// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// One of the six axis-aligned faces of a box.
///
/// Naming follows world compass directions: `East`/`West` are `+X`/`-X`,
/// `Top`/`Bottom` are `+Y`/`-Y`, `South`/`North` are `+Z`/`-Z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockFace {
    /// `-Y` face.
    Bottom,
    /// `+Y` face.
    Top,
    /// `-Z` face.
    North,
    /// `+Z` face.
    South,
    /// `-X` face.
    West,
    /// `+X` face.
    East,
}

impl BlockFace {
    /// All faces in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Bottom,
        Self::Top,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Returns the face on the opposite side of the box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Bottom => Self::Top,
            Self::Top => Self::Bottom,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Outward unit normal of the face.
    #[must_use]
    pub const fn normal(self) -> Vec3 {
        match self {
            Self::Bottom => Vec3::new(0.0, -1.0, 0.0),
            Self::Top => Vec3::new(0.0, 1.0, 0.0),
            Self::North => Vec3::new(0.0, 0.0, -1.0),
            Self::South => Vec3::new(0.0, 0.0, 1.0),
            Self::West => Vec3::new(-1.0, 0.0, 0.0),
            Self::East => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Face whose outward normal points along `axis` (0 = X, 1 = Y, 2 = Z)
    /// in the positive (`positive == true`) or negative direction.
    ///
    /// Returns `None` for an axis index outside `0..3`.
    #[must_use]
    pub const fn from_axis(axis: usize, positive: bool) -> Option<Self> {
        match (axis, positive) {
            (0, true) => Some(Self::East),
            (0, false) => Some(Self::West),
            (1, true) => Some(Self::Top),
            (1, false) => Some(Self::Bottom),
            (2, true) => Some(Self::South),
            (2, false) => Some(Self::North),
            _ => None,
        }
    }
}
