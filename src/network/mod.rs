//! Network layer: inter-thread message types for the API fetch loop.

pub mod client;

use crate::engine::board::SceneData;
use crate::engine::scene::SceneId;
use crate::types::KioskConfig;

/// Messages sent from the background fetch loop to the UI thread.
pub enum AppMessage {
    /// Fresh content for one scene, tagged with the request's generation.
    Scene { generation: u64, data: SceneData },
    /// A reloaded `/api/config`.
    Config(KioskConfig),
}

/// Control commands sent from the UI thread to the background fetch loop.
pub enum Control {
    Load { scene: SceneId, generation: u64 },
    ReloadConfig,
}
