//! FOV Chase - Entry Point
//!
//! Enemies turn toward the player once it enters their view cone and creep
//! after it.
//!
//! Controls:
//! - WASD: Move
//! - Shift: Sprint
//! - Tab: Cycle lock-on target
//! - Escape: Pause/Unpause

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "FOV Chase".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(fov_chase::FovChasePlugin)

        .run();
}
