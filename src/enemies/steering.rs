//! View-cone steering math.
//!
//! Pure functions over a world matrix so the per-frame system stays a thin
//! wrapper around them.

use bevy::prelude::*;

use super::data::SteeringConfig;

/// What a single steering tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteerOutcome {
    /// Target is outside the view cone; the matrix was left alone.
    OutOfView,
    /// Turned by `yaw` radians (positive turns +Z toward +X) and stepped
    /// forward along the new facing.
    Chasing { yaw: f32 },
}

/// Sign of the yaw needed to swing forward toward the target, taken from
/// the vertical component of `forward × to_target`.
///
/// Zero when the two vectors are parallel on the ground plane, so a target
/// dead ahead produces no turn instead of a NaN rotation.
pub fn yaw_sign(cross_y: f32) -> f32 {
    if cross_y > 0.0 {
        1.0
    } else if cross_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Advance `world` by one steering tick toward `target`.
///
/// The rotation is applied in local space, then the matrix moves
/// `step_length` along its new local +Z axis.
pub fn steer(world: &mut Mat4, target: Vec3, config: &SteeringConfig) -> SteerOutcome {
    let position = world.w_axis.truncate();
    let forward = world.transform_vector3(Vec3::Z);
    let to_target = (target - position).normalize_or_zero();

    let cos = to_target.dot(forward);
    if cos < config.view_cone_cos() {
        return SteerOutcome::OutOfView;
    }

    let cross = forward.cross(to_target);
    let yaw = cos.clamp(-1.0, 1.0).acos().min(config.max_turn_radians()) * yaw_sign(cross.y);

    let turned = *world * Mat4::from_rotation_y(yaw);
    let step = turned.transform_vector3(Vec3::new(0.0, 0.0, config.step_length));

    // Rebuild from rotation + translation so float drift never creeps into scale
    let (_, rotation, _) = turned.to_scale_rotation_translation();
    *world = Mat4::from_rotation_translation(rotation.normalize(), position + step);

    SteerOutcome::Chasing { yaw }
}
