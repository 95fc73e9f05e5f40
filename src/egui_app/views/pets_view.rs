use eframe::egui;

use super::pet_card;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::models::Pet;

enum PetAction {
    Open(i32),
    Delete(i32),
    Basket(Pet),
}

pub fn render_list(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Pets");
    styles::status_line(ui, &state.pets.message);

    let is_admin = state.session.is_authorized();
    if is_admin {
        let mut add = false;
        styles::form_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, "Name:");
                ui.text_edit_singleline(&mut state.pets.name_input);
                ui.colored_label(colors::TEXT_LIGHT, "Type:");
                ui.text_edit_singleline(&mut state.pets.type_input);
                add = ui.add(styles::primary_button("Add pet")).clicked();
            });
        });
        ui.add_space(12.0);
        if add {
            state.add_pet();
        }
    }

    let mut action = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for pet in &state.pets.pets {
            let opened = pet_card(ui, pet, |ui| {
                if is_admin {
                    if ui.add(styles::danger_button("Delete")).clicked() {
                        action = Some(PetAction::Delete(pet.id));
                    }
                } else if ui.add(styles::primary_button("Add to basket")).clicked() {
                    action = Some(PetAction::Basket(pet.clone()));
                }
            });
            if opened {
                action = Some(PetAction::Open(pet.id));
            }
        }
    });

    match action {
        Some(PetAction::Open(id)) => state.navigate(AppView::PetDetail(id)),
        Some(PetAction::Delete(id)) => state.delete_pet(id),
        Some(PetAction::Basket(pet)) => state.add_to_basket(&pet),
        None => {}
    }
}

pub fn render_detail(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Pet Details");
    styles::status_line(ui, &state.pet_detail.message);

    let is_admin = state.session.is_authorized();
    let saving = state.pet_detail.saving;
    let has_pet = state.pet_detail.pet.is_some();

    if let Some(pet) = state.pet_detail.pet.as_mut() {
        styles::form_frame().show(ui, |ui| {
            egui::Grid::new("pet_detail_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Id:");
                    ui.colored_label(colors::TEXT_LIGHT, pet.id.to_string());
                    ui.end_row();

                    ui.colored_label(colors::TEXT_SECONDARY, "Name:");
                    if is_admin {
                        ui.text_edit_singleline(&mut pet.name);
                    } else {
                        ui.colored_label(colors::TEXT_LIGHT, pet.name.as_str());
                    }
                    ui.end_row();

                    ui.colored_label(colors::TEXT_SECONDARY, "Type:");
                    if is_admin {
                        ui.text_edit_singleline(&mut pet.animal_type);
                    } else {
                        ui.colored_label(colors::TEXT_LIGHT, pet.animal_type.as_str());
                    }
                    ui.end_row();
                });
        });
        ui.add_space(12.0);
    }

    if is_admin && !state.pet_detail.adopters.is_empty() {
        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Adopted by").strong());
        for user in &state.pet_detail.adopters {
            ui.colored_label(colors::TEXT_SECONDARY, format!("@{}", user.username));
        }
        ui.add_space(12.0);
    }

    let (back, save) = ui
        .horizontal(|ui| {
            let back = ui.add(styles::secondary_button("Back")).clicked();
            let save = is_admin
                && has_pet
                && ui.add_enabled(!saving, styles::primary_button("Save")).clicked();
            if saving {
                ui.spinner();
            }
            (back, save)
        })
        .inner;

    if save {
        state.save_pet();
    }
    if back {
        state.navigate(AppView::Pets);
    }
}
