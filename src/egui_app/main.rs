/**
 * egui Native Desktop App - Main Entry Point
 *
 * Sets up logging, configuration and the tokio runtime that carries all
 * backend work, then hands the window to eframe.
 */
use std::time::Duration;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use adoption_center::egui_app::{theme::styles, views, AppState};
use adoption_center::shared::AppConfig;

/// Redraw interval so background results show up without user input
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("adoption_center=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("adoption-worker")
        .build()?;
    let state = AppState::new(config, runtime.handle().clone())?;
    tracing::info!("[STARTUP] Client ready");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "uFund Adoption Center",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(AdoptionApp {
                state,
                _runtime: runtime,
            }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct AdoptionApp {
    state: AppState,
    // Owns the worker threads; dropped with the window.
    _runtime: tokio::runtime::Runtime,
}

impl eframe::App for AdoptionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.drain_events() {
            ctx.request_repaint();
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(POLL_INTERVAL);
    }
}
