//! Enemy-related components.

use bevy::prelude::*;

/// An enemy that turns toward and creeps after its player once the player
/// enters its view cone.
#[derive(Component, Default, Clone, Copy, Debug)]
#[require(Transform, WorldMatrix, TargetHighlight)]
pub struct Enemy {
    /// Player being chased. Not owned; `None` makes every tick a no-op.
    pub player: Option<Entity>,
}

impl Enemy {
    pub fn chasing(player: Entity) -> Self {
        Self { player: Some(player) }
    }
}

/// Cached world matrix the steering update works on.
///
/// Always a rigid transform: rotation plus translation, unit scale. The
/// `Transform` is rebuilt from it after every steering tick.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct WorldMatrix(pub Mat4);

impl WorldMatrix {
    /// Identity rotation and unit scale at `translation`.
    pub fn from_translation(translation: Vec3) -> Self {
        Self(Mat4::from_translation(translation))
    }
}

/// Lock-on flag. Flipping it recolors the enemy's material.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetHighlight(pub bool);
