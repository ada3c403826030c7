//! Lock-on targeting: Tab cycles through enemies and drives their highlight flag.

use bevy::prelude::*;

use super::components::LockOn;
use crate::enemies::{Enemy, TargetHighlight};

/// Target after `current` in `candidates`, wrapping to the first.
///
/// Starts from the first candidate when nothing is locked or the current
/// target is gone. `None` only when there are no candidates.
pub fn next_target(current: Option<Entity>, candidates: &[Entity]) -> Option<Entity> {
    let start = current
        .and_then(|target| candidates.iter().position(|&c| c == target))
        .map_or(0, |index| index + 1);
    candidates
        .get(start % candidates.len().max(1))
        .copied()
}

/// Cycle the lock-on target with Tab.
pub fn cycle_lock_on(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut lock_on: ResMut<LockOn>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    if !keyboard.just_pressed(KeyCode::Tab) {
        return;
    }

    let mut candidates: Vec<Entity> = enemy_query.iter().collect();
    candidates.sort();

    lock_on.target = next_target(lock_on.target, &candidates);
    info!("Lock-on target: {:?}", lock_on.target);
}

/// Mirror the lock-on resource into each enemy's highlight flag.
pub fn sync_lock_on_highlight(
    lock_on: Res<LockOn>,
    mut enemy_query: Query<(Entity, &mut TargetHighlight), With<Enemy>>,
) {
    for (entity, mut highlight) in enemy_query.iter_mut() {
        highlight.set_if_neq(TargetHighlight(lock_on.target == Some(entity)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: u32) -> Vec<Entity> {
        (0..count).map(Entity::from_raw).collect()
    }

    #[test]
    fn test_next_target_starts_at_first() {
        let candidates = entities(3);
        assert_eq!(next_target(None, &candidates), Some(candidates[0]));
    }

    #[test]
    fn test_next_target_wraps() {
        let candidates = entities(3);
        assert_eq!(next_target(Some(candidates[1]), &candidates), Some(candidates[2]));
        assert_eq!(next_target(Some(candidates[2]), &candidates), Some(candidates[0]));
    }

    #[test]
    fn test_next_target_without_candidates() {
        assert_eq!(next_target(Some(Entity::from_raw(7)), &[]), None);
    }

    #[test]
    fn test_next_target_after_despawn_restarts() {
        let candidates = entities(2);
        assert_eq!(next_target(Some(Entity::from_raw(9)), &candidates), Some(candidates[0]));
    }

    #[test]
    fn test_only_locked_enemy_is_highlighted() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<LockOn>()
            .add_systems(Update, sync_lock_on_highlight);

        let first = app.world_mut().spawn(Enemy::default()).id();
        let second = app.world_mut().spawn(Enemy::default()).id();
        app.world_mut().resource_mut::<LockOn>().target = Some(second);

        app.update();

        let highlighted = |app: &App, entity: Entity| app.world().get::<TargetHighlight>(entity).copied();
        assert_eq!(highlighted(&app, first), Some(TargetHighlight(false)));
        assert_eq!(highlighted(&app, second), Some(TargetHighlight(true)));

        app.world_mut().resource_mut::<LockOn>().target = None;
        app.update();
        assert_eq!(highlighted(&app, second), Some(TargetHighlight(false)));
    }
}
