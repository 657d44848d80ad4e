// Dropspot - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and drives the upload session: drains the
// ticker and reader channels, routes drag-and-drop input, and executes
// the side effects panels request (file dialog, reset).

use crate::app::reader::{PreviewReader, ReadProgress};
use crate::app::state::{AppState, PanelKind};
use crate::app::ticker::ProgressTicker;
use crate::core::session::UploadPhase;
use crate::ui;
use crate::util::constants;
use std::path::PathBuf;
use std::time::Duration;

/// The Dropspot application.
pub struct DropspotApp {
    pub state: AppState,
    pub ticker: ProgressTicker,
    pub reader: PreviewReader,
}

impl DropspotApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            ticker: ProgressTicker::new(),
            reader: PreviewReader::new(),
        }
    }

    /// Offer a selected or dropped file to the session and, on acceptance,
    /// start the simulated progress and the preview read.
    fn offer_file(&mut self, path: PathBuf) {
        if self.state.session.offer(&path) {
            self.state.preview_texture = None;
            self.ticker.start(self.state.config.tick_interval_ms);
            self.reader.start_read(
                path,
                self.state.session.generation(),
                self.state.config.max_image_bytes,
            );
        }
    }

    /// Reset the session back to the drop zone.
    fn reset_session(&mut self) {
        self.state.session.reset();
        self.ticker.stop();
        self.state.preview_texture = None;
    }
}

impl eframe::App for DropspotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Simulated progress ticks ----
        let ticks = self.ticker.poll_ticks();
        for _ in 0..ticks {
            self.state.session.tick();
        }
        // The ticker is keyed on the uploading phase: stop it on every exit
        // path so no stray tick outlives the phase that started it.
        if self.state.session.phase() != UploadPhase::Uploading && self.ticker.is_active() {
            self.ticker.stop();
        }

        // ---- Preview read results ----
        for msg in self.reader.poll_progress() {
            match msg {
                ReadProgress::Completed {
                    generation,
                    preview,
                } => {
                    if self.state.session.attach_preview(generation, preview) {
                        self.state.preview_texture = None; // rebuilt below
                    }
                }
                ReadProgress::Failed { generation, error } => {
                    self.state.session.fail(generation, error.to_string());
                }
            }
        }

        // ---- Drag-and-drop input (upload widget only) ----
        if self.state.active_panel == PanelKind::Upload {
            let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
            self.state.session.set_dragging(hovering);

            let dropped = ctx.input(|i| i.raw.dropped_files.clone());
            if !dropped.is_empty() {
                self.state.session.set_dragging(false);
                if dropped.len() > 1 {
                    tracing::debug!(
                        discarded = dropped.len() - 1,
                        "Multiple files dropped; taking the first"
                    );
                }
                // Only the first dropped file is considered.
                if let Some(path) = dropped.into_iter().next().and_then(|f| f.path) {
                    self.offer_file(path);
                }
            }
        }

        // ---- Requests raised by panels ----
        if std::mem::take(&mut self.state.request_browse) {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", constants::IMAGE_DIALOG_EXTENSIONS)
                .pick_file()
            {
                self.offer_file(path);
            }
        }
        if std::mem::take(&mut self.state.request_reset) {
            self.reset_session();
        }

        // ---- Preview texture upload ----
        // Created lazily from the decoded pixels once a preview is attached.
        if self.state.preview_texture.is_none() {
            let image = self.state.session.preview().map(|p| {
                egui::ColorImage::from_rgba_unmultiplied([p.width, p.height], &p.rgba)
            });
            if let Some(image) = image {
                self.state.preview_texture = Some(ctx.load_texture(
                    "upload_preview",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }

        // Repaint promptly while background activity is in flight so tick
        // and preview messages are drained without user input.
        let read_pending = self.state.session.phase() == UploadPhase::Success
            && self.state.session.preview().is_none();
        if self.ticker.is_active() || read_pending {
            ctx.request_repaint_after(Duration::from_millis(constants::UI_POLL_REPAINT_MS));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let browsable = self.state.active_panel == PanelKind::Upload
                        && self.state.session.phase() == UploadPhase::Idle;
                    ui.add_enabled_ui(browsable, |ui| {
                        if ui.button("Open Image\u{2026}").clicked() {
                            self.state.request_browse = true;
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui
                        .radio_value(&mut self.state.active_panel, PanelKind::Upload, "Upload Widget")
                        .clicked()
                    {
                        ui.close_menu();
                    }
                    if ui
                        .radio_value(&mut self.state.active_panel, PanelKind::Loading, "Loading Panel")
                        .clicked()
                    {
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.status_line());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.state.warnings.is_empty() {
                        ui.label(format!("\u{26a0} {} warning(s)", self.state.warnings.len()))
                            .on_hover_text(self.state.warnings.join("\n"));
                    }
                });
            });
        });

        // Central panel: the active widget
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_panel {
            PanelKind::Upload => ui::panels::upload::render(ui, &mut self.state),
            PanelKind::Loading => ui::panels::loading::render(ui),
        });

        // About dialog (modal-ish)
        ui::panels::about::render(ctx, &mut self.state);
    }
}
