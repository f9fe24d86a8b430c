//! Top 10: ranked player cards with medals and rank movement.

use crate::engine::cards::{PlayerCard, player_cards};
use crate::engine::scene::SceneId;
use crate::types::Trend;
use crate::ui::theme::{TREND_DOWN, TREND_UP, Theme, medal_color};
use crate::ui::view::{CardCache, SceneState, SceneView, card_frame};
use eframe::egui::{self, Align, Color32, Layout, RichText};

#[derive(Default)]
pub struct Top10View {
    cards: CardCache<PlayerCard>,
}

fn trend_color(trend: Trend, theme: &Theme) -> Color32 {
    match trend {
        Trend::Up => TREND_UP,
        Trend::Down => TREND_DOWN,
        Trend::Neutral => theme.text.gamma_multiply(0.5),
    }
}

impl SceneView for Top10View {
    fn scene(&self) -> SceneId {
        SceneId::Top10
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>) {
        let theme = state.theme;
        let cards = self
            .cards
            .get(state.board.revision, || player_cards(&state.board.top10));

        for card in cards {
            let fill = if card.medal.is_some() {
                theme.highlight_fill()
            } else {
                theme.card_fill()
            };
            card_frame(fill).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let badge = card.medal.map(medal_color).unwrap_or(theme.accent);
                    ui.add_sized(
                        [56.0, 48.0],
                        egui::Label::new(RichText::new(&card.rank).size(34.0).strong().color(badge)),
                    );
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&card.name).size(26.0).strong());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("💯 {}", card.score)).size(18.0));
                            ui.add_space(16.0);
                            ui.label(RichText::new(format!("🎮 {}", card.games)).size(18.0));
                        });
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(&card.trend_text)
                                .size(28.0)
                                .strong()
                                .color(trend_color(card.trend, theme)),
                        );
                    });
                });
            });
            ui.add_space(6.0);
        }
    }
}
