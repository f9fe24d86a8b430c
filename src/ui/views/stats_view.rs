//! Statistics: six league-wide figures in a 3×2 grid.

use crate::engine::cards::{StatCard, stat_cards};
use crate::engine::scene::SceneId;
use crate::ui::view::{CardCache, SceneState, SceneView, card_frame};
use eframe::egui::{self, RichText};

const COLUMNS: usize = 3;

#[derive(Default)]
pub struct StatsView {
    cards: CardCache<StatCard>,
}

impl SceneView for StatsView {
    fn scene(&self) -> SceneId {
        SceneId::Statistics
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>) {
        let theme = state.theme;
        let Some(stats) = state.board.statistics.as_ref() else {
            return;
        };
        let cards = self.cards.get(state.board.revision, || stat_cards(stats));

        let spacing = 24.0;
        let card_width = (ui.available_width() - spacing * (COLUMNS as f32 - 1.0)) / COLUMNS as f32 - 28.0;

        egui::Grid::new("stats_grid")
            .num_columns(COLUMNS)
            .spacing([spacing, spacing])
            .show(ui, |ui| {
                for (i, card) in cards.iter().enumerate() {
                    card_frame(theme.card_fill()).show(ui, |ui| {
                        ui.set_width(card_width.max(120.0));
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(&card.value)
                                    .size(42.0)
                                    .strong()
                                    .color(theme.primary),
                            );
                            ui.label(RichText::new(card.label).size(18.0));
                        });
                    });
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    }
}
