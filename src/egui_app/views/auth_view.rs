use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 80.0;
const BUTTON_WIDTH: f32 = 140.0;

pub fn render_login(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 280.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        title(ui, "Welcome Back");
        styles::status_line(ui, &state.login.message);

        let offset = row_offset(available_rect.width());
        form_row(ui, offset, "Username:", &mut state.login.username_input, false);
        let entered = form_row(ui, offset, "Password:", &mut state.login.password_input, true);
        ui.add_space(20.0);

        let (login, create) = button_pair(ui, available_rect.width(), "Login", "Create Account");
        if login || entered {
            state.submit_login();
        }
        if create {
            state.login.message.clear();
            state.navigate(AppView::CreateUser);
        }

        if state.login.loading {
            loading(ui, available_rect.width());
        }
    });
}

pub fn render_create_user(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 320.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        title(ui, "Create Account");
        styles::status_line(ui, &state.create_user.message);

        let offset = row_offset(available_rect.width());
        let screen = &mut state.create_user;
        form_row(ui, offset, "Username:", &mut screen.username_input, false);
        form_row(ui, offset, "Password:", &mut screen.password_input, true);
        let entered = form_row(ui, offset, "Confirm:", &mut screen.confirm_input, true);
        ui.add_space(20.0);

        let (sign_up, back) = button_pair(ui, available_rect.width(), "Sign Up", "Back to Login");
        if sign_up || entered {
            state.submit_create_user();
        }
        if back {
            state.create_user.message.clear();
            state.navigate(AppView::Login);
        }

        if state.create_user.loading {
            loading(ui, available_rect.width());
        }
    });
}

fn title(ui: &mut egui::Ui, subtitle: &str) {
    ui.label(egui::RichText::new("🐾 uFund").size(32.0).strong().color(colors::TEXT_LIGHT));
    ui.add_space(20.0);
    ui.label(egui::RichText::new(subtitle).size(24.0).color(colors::TEXT_LIGHT));
    ui.add_space(20.0);
}

fn row_offset(available_width: f32) -> f32 {
    ((available_width - INPUT_WIDTH - LABEL_WIDTH - 20.0) / 2.0).max(0.0)
}

/// Labelled text field; returns `true` when Enter was pressed in it
fn form_row(ui: &mut egui::Ui, offset: f32, label: &str, value: &mut String, password: bool) -> bool {
    let entered = ui
        .horizontal(|ui| {
            ui.add_space(offset);
            ui.add_sized(
                [LABEL_WIDTH, 24.0],
                egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
            );
            let response = ui.add_sized(
                [INPUT_WIDTH, 28.0],
                egui::TextEdit::singleline(value)
                    .password(password)
                    .text_color(colors::TEXT_DARK),
            );
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        })
        .inner;
    ui.add_space(8.0);
    entered
}

/// Primary and secondary button side by side; returns which was clicked
fn button_pair(ui: &mut egui::Ui, available_width: f32, primary: &str, secondary: &str) -> (bool, bool) {
    ui.horizontal(|ui| {
        let total = BUTTON_WIDTH * 2.0 + 10.0;
        ui.add_space(((available_width - total) / 2.0).max(0.0));
        let first = ui
            .add_sized([BUTTON_WIDTH, 32.0], styles::primary_button(primary))
            .clicked();
        ui.add_space(10.0);
        let second = ui
            .add_sized([BUTTON_WIDTH, 32.0], styles::secondary_button(secondary))
            .clicked();
        (first, second)
    })
    .inner
}

fn loading(ui: &mut egui::Ui, available_width: f32) {
    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.add_space(((available_width - 100.0) / 2.0).max(0.0));
        ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
        ui.spinner();
    });
}
