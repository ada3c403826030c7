//! Core game module - states and pause handling.
//!
//! This module provides the foundation that all other game systems build upon.

mod plugin;
mod states;

pub use plugin::CorePlugin;
pub use states::*;
