use std::fmt;

/// Continuous position on the horizontal plane.
///
/// `z` is the second horizontal axis, not height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Returns this position translated by the given displacement.
    pub fn translated(self, movement: Movement) -> Self {
        Self {
            x: self.x + movement.diff.x,
            z: self.z + movement.diff.z,
        }
    }

    /// Euclidean distance to `other`. No tolerance is applied.
    pub fn distance(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn distance_from_origin(self) -> f32 {
        self.distance(Self::ORIGIN)
    }

    /// Advances this position toward `target` by at most `step`.
    ///
    /// If the remaining distance is within `step` the result lands exactly on
    /// `target`; otherwise the result is this position plus the scaled delta.
    pub fn lerp_toward(self, target: Position, step: f32) -> Self {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        let length = (dx * dx + dz * dz).sqrt();
        if length <= step {
            return target;
        }
        let scale = step / length;
        Self {
            x: self.x + dx * scale,
            z: self.z + dz * scale,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Displacement vector applied to a position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    pub diff: Position,
}

impl Movement {
    pub fn new(dx: f32, dz: f32) -> Self {
        Self {
            diff: Position::new(dx, dz),
        }
    }
}
