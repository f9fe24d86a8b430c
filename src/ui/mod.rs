//! UI layer: App orchestrator, SceneView trait, theme, and scene views.

pub mod app;
pub mod theme;
pub mod view;
pub mod views;
