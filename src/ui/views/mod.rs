//! Registered scene views, each implementing `SceneView`.

pub mod activity_view;
pub mod champions_view;
pub mod roster_view;
pub mod stats_view;
pub mod top10_view;
