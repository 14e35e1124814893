/// World tunables.
///
/// Damage is a fixed constant applied exactly once per attack call, keeping
/// combat deterministic; the value is parameterized here rather than baked
/// into the combat path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Occupancy radius used by `exists_at`: a position is occupied when any
    /// thing lies strictly within this Euclidean distance.
    pub collision_radius: f32,

    /// Damage applied by a single attack.
    pub attack_damage: f32,
}

impl WorldConfig {
    pub const DEFAULT_COLLISION_RADIUS: f32 = 1.0;
    pub const DEFAULT_ATTACK_DAMAGE: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            collision_radius: Self::DEFAULT_COLLISION_RADIUS,
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}
