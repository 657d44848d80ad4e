// Dropspot - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading from the platform config directory
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use dropspot::app;
pub use dropspot::core;
pub use dropspot::platform;
pub use dropspot::ui;
pub use dropspot::util;

use clap::{Parser, ValueEnum};
use dropspot::app::state::PanelKind;

/// Widget selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PanelArg {
    /// The image drop-zone / upload flow.
    Upload,
    /// The static placeholder panel.
    Loading,
}

/// Dropspot - image drop-zone with simulated upload progress.
///
/// Hosts two presentational widgets: an image-upload flow (drag-and-drop or
/// browse, simulated progress, live preview) and a placeholder loading
/// panel.
#[derive(Parser, Debug)]
#[command(name = "Dropspot", version, about)]
struct Cli {
    /// Widget to show at startup.
    #[arg(short = 'P', long = "panel", value_enum, default_value = "upload")]
    panel: PanelArg,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can apply from the first subscriber event.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Dropspot starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let panel = match cli.panel {
        PanelArg::Upload => PanelKind::Upload,
        PanelArg::Loading => PanelKind::Loading,
    };

    let dark_mode = config.dark_mode;
    let mut state = app::state::AppState::new(config, panel);
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([640.0, 640.0])
            .with_min_inner_size([420.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::DropspotApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Dropspot GUI: {e}");
        std::process::exit(1);
    }
}
