use eframe::egui;

use super::pet_card;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render_basket(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Your Basket");
    styles::status_line(ui, &state.basket.message);

    if state.basket.adopting {
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_LIGHT, "Finalizing adoptions...");
            ui.spinner();
        });
        return;
    }

    if !state.basket.has_pets() {
        ui.colored_label(colors::TEXT_SECONDARY, "Your basket is empty");
        return;
    }

    let mut remove = None;
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            for pet in &state.basket.pets {
                pet_card(ui, pet, |ui| {
                    if ui.add(styles::danger_button("Remove")).clicked() {
                        remove = Some(pet.clone());
                    }
                });
            }
        });

    ui.add_space(8.0);
    let adopt = ui.add(styles::primary_button("Adopt all")).clicked();

    if let Some(pet) = remove {
        state.remove_from_basket(&pet);
    } else if adopt {
        state.adopt();
    }
}

pub fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Adoption History");

    if !state.history.has_pets() {
        ui.colored_label(colors::TEXT_SECONDARY, "You haven't adopted any pets yet");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for pet in &state.history.pets {
            pet_card(ui, pet, |ui| {
                ui.colored_label(colors::SUCCESS, "Adopted");
            });
        }
    });
}
