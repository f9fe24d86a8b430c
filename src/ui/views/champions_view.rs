//! Game Champions: the best score on every machine.

use crate::engine::cards::{ChampionCard, champion_cards};
use crate::engine::scene::SceneId;
use crate::ui::theme::GOLD;
use crate::ui::view::{CardCache, SceneState, SceneView, card_frame};
use eframe::egui::{self, Align, Layout, RichText};

#[derive(Default)]
pub struct ChampionsView {
    cards: CardCache<ChampionCard>,
}

impl SceneView for ChampionsView {
    fn scene(&self) -> SceneId {
        SceneId::Champions
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>) {
        let theme = state.theme;
        let cards = self
            .cards
            .get(state.board.revision, || champion_cards(&state.board.champions));

        for card in cards {
            card_frame(theme.card_fill()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(format!("🎯 {}", card.game))
                        .size(22.0)
                        .color(theme.accent),
                );
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.champion).size(28.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&card.score).size(28.0).strong().color(GOLD));
                    });
                });
            });
            ui.add_space(8.0);
        }
    }
}
