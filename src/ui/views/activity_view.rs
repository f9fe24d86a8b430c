//! Recent Activity: the latest plays, personal bests highlighted.

use crate::engine::cards::{ActivityItem, activity_items};
use crate::engine::scene::SceneId;
use crate::ui::theme::GOLD;
use crate::ui::view::{CardCache, SceneState, SceneView, card_frame};
use eframe::egui::{self, Align, Color32, Layout, RichText};

#[derive(Default)]
pub struct ActivityView {
    items: CardCache<ActivityItem>,
}

impl SceneView for ActivityView {
    fn scene(&self) -> SceneId {
        SceneId::Activity
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>) {
        let theme = state.theme;
        let items = self
            .items
            .get(state.board.revision, || activity_items(&state.board.activity));

        for item in items {
            let fill = if item.personal_best {
                theme.highlight_fill()
            } else {
                theme.card_fill()
            };
            card_frame(fill).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&item.player).size(24.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(&item.time_ago)
                                .size(18.0)
                                .color(theme.text.gamma_multiply(0.6)),
                        );
                    });
                });
                ui.label(RichText::new(&item.game).size(18.0).color(theme.accent));
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&item.score).size(24.0).strong());
                    if item.personal_best {
                        ui.add_space(12.0);
                        egui::Frame::new()
                            .fill(GOLD)
                            .corner_radius(egui::CornerRadius::same(6))
                            .inner_margin(egui::Margin::symmetric(8, 2))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new("PERSONAL BEST!")
                                        .size(14.0)
                                        .strong()
                                        .color(Color32::BLACK),
                                );
                            });
                    }
                });
            });
            ui.add_space(6.0);
        }
    }
}
