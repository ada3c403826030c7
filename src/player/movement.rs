//! Ground-plane player movement relative to the arena camera.

use bevy::prelude::*;

use super::components::*;

/// Marker component for the arena camera.
#[derive(Component)]
pub struct ArenaCamera;

/// Pressed state of the four movement keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn from_input(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keyboard.pressed(KeyCode::KeyW),
            back: keyboard.pressed(KeyCode::KeyS),
            left: keyboard.pressed(KeyCode::KeyA),
            right: keyboard.pressed(KeyCode::KeyD),
        }
    }
}

/// Unit direction on the XZ plane for the pressed keys, with "forward"
/// being the camera's view direction flattened onto the ground.
///
/// Zero when nothing (or only opposing keys) is pressed.
pub fn ground_direction(keys: MoveKeys, camera_rotation: Quat) -> Vec3 {
    let forward = (camera_rotation * Vec3::NEG_Z).with_y(0.0).normalize_or_zero();
    let right = (camera_rotation * Vec3::X).with_y(0.0).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if keys.forward {
        direction += forward;
    }
    if keys.back {
        direction -= forward;
    }
    if keys.left {
        direction -= right;
    }
    if keys.right {
        direction += right;
    }

    // Normalize to prevent faster diagonal movement
    direction.normalize_or_zero()
}

/// Handle WASD movement, sprinting with Shift.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<PlayerConfig>,
    camera_query: Query<&Transform, (With<ArenaCamera>, Without<Player>)>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let camera_rotation = camera_query
        .get_single()
        .map(|camera| camera.rotation)
        .unwrap_or(Quat::IDENTITY);

    let direction = ground_direction(MoveKeys::from_input(&keyboard), camera_rotation);
    if direction == Vec3::ZERO {
        return;
    }

    let speed = if keyboard.pressed(KeyCode::ShiftLeft) {
        config.move_speed * config.sprint_multiplier
    } else {
        config.move_speed
    };

    player_transform.translation += direction * speed * time.delta_secs();
}

/// Spawn the player body.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) -> Entity {
    commands
        .spawn((
            Player,
            Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.2, 0.4, 0.9),
                perceptual_roughness: 0.6,
                ..default()
            })),
            Transform::from_translation(position),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_no_keys_is_zero() {
        assert_eq!(ground_direction(MoveKeys::default(), Quat::IDENTITY), Vec3::ZERO);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let keys = MoveKeys {
            forward: true,
            back: true,
            ..default()
        };
        assert_eq!(ground_direction(keys, Quat::IDENTITY), Vec3::ZERO);
    }

    #[test]
    fn test_forward_follows_camera_yaw() {
        let keys = MoveKeys {
            forward: true,
            ..default()
        };
        let camera = Transform::from_xyz(0.0, 10.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let direction = ground_direction(keys, camera.rotation);
        assert!(direction.abs_diff_eq(Vec3::Z, EPSILON));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let keys = MoveKeys {
            forward: true,
            right: true,
            ..default()
        };
        let direction = ground_direction(keys, Quat::IDENTITY);
        assert!((direction.length() - 1.0).abs() < EPSILON);
        assert_eq!(direction.y, 0.0);
    }
}
