//! Lock-on highlight: recolors an enemy when it becomes the player's target.

use bevy::prelude::*;

use super::components::TargetHighlight;

/// Base color of a locked-on enemy.
pub const TARGETED_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Base color of every other enemy.
pub const UNTARGETED_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

pub fn highlight_color(enabled: bool) -> Color {
    if enabled {
        TARGETED_COLOR
    } else {
        UNTARGETED_COLOR
    }
}

/// Push changed highlight flags into each enemy's own material.
pub fn apply_target_highlight(
    query: Query<(&TargetHighlight, &MeshMaterial3d<StandardMaterial>), Changed<TargetHighlight>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (highlight, material) in query.iter() {
        let Some(material) = materials.get_mut(&material.0) else {
            warn!("Highlighted enemy has no loaded material");
            continue;
        };
        material.base_color = highlight_color(highlight.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, apply_target_highlight);
        app
    }

    fn add_material(app: &mut App) -> Handle<StandardMaterial> {
        app.world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default())
    }

    fn color_of(app: &App, handle: &Handle<StandardMaterial>) -> Color {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .expect("material missing")
            .base_color
    }

    #[test]
    fn test_highlight_colors_are_exact() {
        assert_eq!(highlight_color(true), Color::srgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(highlight_color(false), Color::srgba(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_highlight_colors_share_srgb_space() {
        assert!(matches!(TARGETED_COLOR, Color::Srgba(_)));
        assert!(matches!(UNTARGETED_COLOR, Color::Srgba(_)));
    }

    #[test]
    fn test_toggle_recolors_material() {
        let mut app = setup_app();
        let handle = add_material(&mut app);
        let enemy = app
            .world_mut()
            .spawn((TargetHighlight(true), MeshMaterial3d(handle.clone())))
            .id();

        app.update();
        assert_eq!(color_of(&app, &handle), TARGETED_COLOR);

        app.world_mut().entity_mut(enemy).insert(TargetHighlight(false));
        app.update();
        assert_eq!(color_of(&app, &handle), UNTARGETED_COLOR);
    }

    #[test]
    fn test_materials_are_recolored_independently() {
        let mut app = setup_app();
        let first = add_material(&mut app);
        let second = add_material(&mut app);
        app.world_mut()
            .spawn((TargetHighlight(true), MeshMaterial3d(first.clone())));
        app.world_mut()
            .spawn((TargetHighlight(false), MeshMaterial3d(second.clone())));

        app.update();

        assert_eq!(color_of(&app, &first), TARGETED_COLOR);
        assert_eq!(color_of(&app, &second), UNTARGETED_COLOR);
    }
}
