use eframe::egui;

use super::pet_card;
use crate::egui_app::search::SearchMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Find a pet");

    let mode = state.dashboard.mode();
    let toggle_label = match mode {
        SearchMode::Name => "Search by type instead",
        SearchMode::Type => "Search by name instead",
    };

    ui.horizontal(|ui| {
        let response = ui.add_sized(
            [320.0, 28.0],
            egui::TextEdit::singleline(&mut state.dashboard.search_input)
                .hint_text(format!("Search pets by {}", mode.label()))
                .text_color(colors::TEXT_DARK),
        );
        if response.changed() {
            state.search_changed();
        }
        ui.add_space(8.0);
        if ui.add(styles::primary_button(toggle_label)).clicked() {
            state.toggle_search_mode();
        }
    });
    ui.add_space(12.0);

    if state.dashboard.search_input.trim().is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "Start typing to search the available pets");
        return;
    }

    let mut open = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for pet in &state.dashboard.results {
            if pet_card(ui, pet, |_| {}) {
                open = Some(pet.id);
            }
        }
    });
    if let Some(id) = open {
        state.navigate(AppView::PetDetail(id));
    }
}
