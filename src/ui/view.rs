//! The `SceneView` trait and the shared `SceneState` view passed to each scene.
//!
//! To add a new scene:
//! 1. Add a variant to `SceneId` and its endpoint.
//! 2. Create a new file in `ui/views/` implementing `SceneView`.
//! 3. Push `Box::new(MyView::default())` into `App::views` in `App::new()`,
//!    keeping `SceneId::ALL` order.

use eframe::egui::{self, Color32, RichText};

use crate::engine::board::SceneBoard;
use crate::engine::scene::SceneId;
use crate::ui::theme::Theme;

/// Read-only view of application state shared with every scene's `show` call.
pub struct SceneState<'a> {
    pub board: &'a SceneBoard,
    pub theme: &'a Theme,
}

/// Trait implemented by every scene.
///
/// A view only paints; it never fetches. Scrolling is handled by the
/// orchestrator for scenes whose [`SceneId::scrolls`] is true, so `show`
/// should lay out its full content without a scroll area of its own.
pub trait SceneView {
    fn scene(&self) -> SceneId;

    /// Draw the scene body. Called every frame while the scene is active.
    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>);
}

/// Built view-models, rebuilt only when the board revision moves.
pub struct CardCache<T> {
    revision: Option<u64>,
    cards: Vec<T>,
}

impl<T> Default for CardCache<T> {
    fn default() -> Self {
        Self {
            revision: None,
            cards: Vec::new(),
        }
    }
}

impl<T> CardCache<T> {
    pub fn get(&mut self, revision: u64, build: impl FnOnce() -> Vec<T>) -> &[T] {
        if self.revision != Some(revision) {
            self.cards = build();
            self.revision = Some(revision);
        }
        &self.cards
    }
}

/// Rounded, padded background used for every card.
pub fn card_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(14))
}

pub fn scene_heading(ui: &mut egui::Ui, scene: SceneId, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(scene.title())
                .size(40.0)
                .strong()
                .color(theme.primary),
        );
    });
    ui.add_space(12.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_cache_rebuilds_on_new_revision_only() {
        let mut cache = CardCache::default();
        let mut builds = 0;
        for revision in [1, 1, 1, 2, 2] {
            cache.get(revision, || {
                builds += 1;
                vec![revision]
            });
        }
        assert_eq!(builds, 2);
        assert_eq!(cache.get(2, Vec::new), &[2]);
    }
}
