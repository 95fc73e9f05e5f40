use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::models::Pet;

pub mod account_view;
pub mod auth_view;
pub mod basket_view;
pub mod dashboard_view;
pub mod pets_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🐾 uFund Adoption Center").size(18.0).strong(),
                );
                ui.add_space(16.0);

                let mut target = None;
                for item in AppView::nav_items(&state.session) {
                    let label = egui::RichText::new(item.title()).color(colors::TEXT_LIGHT);
                    if ui.selectable_label(is_active(state.current_view, item), label).clicked() {
                        target = Some(item);
                    }
                }
                if let Some(view) = target {
                    state.navigate(view);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.session.is_logged_in() {
                        ui.colored_label(
                            colors::TEXT_SECONDARY,
                            format!("@{}", state.session.current_user()),
                        );
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_panel_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Login => auth_view::render_login(ui, state),
            AppView::CreateUser => auth_view::render_create_user(ui, state),
            AppView::Dashboard => dashboard_view::render(ui, state),
            AppView::Pets => pets_view::render_list(ui, state),
            AppView::PetDetail(_) => pets_view::render_detail(ui, state),
            AppView::Basket => basket_view::render_basket(ui, state),
            AppView::History => basket_view::render_history(ui, state),
            AppView::Donate => account_view::render_donate(ui, state),
            AppView::Notifications => account_view::render_notifications(ui, state),
            AppView::Account => account_view::render_account(ui, state),
        });
}

/// The detail page belongs to the Pets entry
fn is_active(current: AppView, item: AppView) -> bool {
    current == item || matches!((current, item), (AppView::PetDetail(_), AppView::Pets))
}

/// One pet row; `actions` draws the buttons on the right.
/// Returns `true` when the pet's name was clicked.
pub(crate) fn pet_card(ui: &mut egui::Ui, pet: &Pet, actions: impl FnOnce(&mut egui::Ui)) -> bool {
    let mut opened = false;
    styles::pet_card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let name = egui::Label::new(
                egui::RichText::new(pet.name.as_str())
                    .size(16.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            )
            .sense(egui::Sense::click());
            opened = ui.add(name).clicked();
            ui.colored_label(colors::TEXT_SECONDARY, pet.animal_type.as_str());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), actions);
        });
    });
    ui.add_space(6.0);
    opened
}
