use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render_donate(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Donate");

    if state.donate.donated {
        ui.colored_label(colors::SUCCESS, state.donate.message.as_str());
        ui.add_space(8.0);
    } else {
        styles::status_line(ui, &state.donate.message);
    }

    let mut submit = false;
    styles::form_frame().show(ui, |ui| {
        let screen = &mut state.donate;
        egui::Grid::new("donate_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Card number:");
                ui.add(egui::TextEdit::singleline(&mut screen.card_input).hint_text("16 digits"));
                ui.end_row();

                ui.colored_label(colors::TEXT_SECONDARY, "Amount ($):");
                ui.text_edit_singleline(&mut screen.amount_input);
                ui.end_row();

                ui.colored_label(colors::TEXT_SECONDARY, "Name on card:");
                ui.text_edit_singleline(&mut screen.name_input);
                ui.end_row();

                ui.colored_label(colors::TEXT_SECONDARY, "Expiry date:");
                ui.add(egui::TextEdit::singleline(&mut screen.date_input).hint_text("MM/YY"));
                ui.end_row();
            });
        ui.add_space(8.0);
        submit = ui.add(styles::primary_button("Donate")).clicked();
    });

    if submit {
        state.donate();
    }
}

pub fn render_notifications(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Notifications");
    styles::status_line(ui, &state.notifications.message);

    if state.notifications.notifications.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No notifications");
        return;
    }

    let is_admin = state.notifications.is_admin(&state.session);
    let mut dismiss = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, text) in state.notifications.notifications.iter().enumerate() {
            styles::pet_card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_LIGHT, text.as_str());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if is_admin && ui.add(styles::danger_button("Dismiss")).clicked() {
                            dismiss = Some(index);
                        }
                    });
                });
            });
            ui.add_space(6.0);
        }
    });

    if let Some(text) = dismiss.and_then(|i| state.notifications.notifications.get(i).cloned()) {
        state.delete_notification(&text);
    }
}

pub fn render_account(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Account");
    ui.colored_label(colors::TEXT_LIGHT, state.account.greeting(&state.session));
    ui.add_space(16.0);

    if ui.add(styles::danger_button("Logout")).clicked() {
        state.logout();
    }
}
