//! Full Roster: every ranked player, one striped row each.

use crate::engine::cards::{RosterRow, roster_rows};
use crate::engine::scene::SceneId;
use crate::ui::view::{CardCache, SceneState, SceneView};
use eframe::egui::{self, RichText};

#[derive(Default)]
pub struct RosterView {
    rows: CardCache<RosterRow>,
}

impl SceneView for RosterView {
    fn scene(&self) -> SceneId {
        SceneId::Roster
    }

    fn show(&mut self, ui: &mut egui::Ui, state: &SceneState<'_>) {
        let theme = state.theme;
        let rows = self
            .rows
            .get(state.board.revision, || roster_rows(&state.board.roster));

        egui::Grid::new("roster_grid")
            .num_columns(3)
            .striped(true)
            .min_col_width(120.0)
            .spacing([48.0, 10.0])
            .show(ui, |ui| {
                for row in rows {
                    ui.label(RichText::new(&row.rank).size(22.0).color(theme.accent));
                    ui.label(RichText::new(&row.name).size(22.0));
                    ui.label(RichText::new(&row.score).size(22.0).strong());
                    ui.end_row();
                }
            });
    }
}
