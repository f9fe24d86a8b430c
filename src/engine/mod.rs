//! Engine sub-modules: scene list, scene player, scroll animator, formatting,
//! card view-models and the per-scene content board. Nothing here touches
//! egui or the network.

pub mod board;
pub mod cards;
pub mod format;
pub mod player;
pub mod scene;
pub mod scroll;
