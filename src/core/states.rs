//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Enemy steering
//! and player movement only run in the InGame state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files are read
/// - Enter `InGame` once loading completes
/// - `Paused` freezes steering but keeps the world visible
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - reading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Game is paused (overlay on gameplay)
    Paused,
}
