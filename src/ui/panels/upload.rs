// Dropspot - ui/panels/upload.rs
//
// The upload widget: one of four mutually exclusive variants depending on
// the session phase. Variants fade in on phase change; the drop zone
// highlight follows the drag-hover flag.
//
// This module only renders and raises request flags on the state; the
// shell (gui.rs) performs the side effects (file dialog, reset, workers).

use crate::app::state::AppState;
use crate::core::session::UploadPhase;
use crate::ui::theme;

/// Render the upload widget for the current session phase.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let phase = state.session.phase();

    // Advance all four variant fades every frame so the active one animates
    // from 0 whenever the phase changes.
    let fade_idle = variant_fade(ui, "idle", phase == UploadPhase::Idle);
    let fade_uploading = variant_fade(ui, "uploading", phase == UploadPhase::Uploading);
    let fade_success = variant_fade(ui, "success", phase == UploadPhase::Success);
    let fade_error = variant_fade(ui, "error", phase == UploadPhase::Error);

    ui.add_space(ui.available_height() * 0.12);
    ui.vertical_centered(|ui| match phase {
        UploadPhase::Idle => drop_zone(ui, state, fade_idle),
        UploadPhase::Uploading => progress_card(ui, state, fade_uploading),
        UploadPhase::Success => success_card(ui, state, fade_success),
        UploadPhase::Error => error_card(ui, state, fade_error),
    });
}

fn variant_fade(ui: &egui::Ui, name: &str, active: bool) -> f32 {
    ui.ctx()
        .animate_bool(egui::Id::new(("upload_variant", name)), active)
}

// =============================================================================
// Idle: the drop zone
// =============================================================================

fn drop_zone(ui: &mut egui::Ui, state: &mut AppState, fade: f32) {
    let drag = ui
        .ctx()
        .animate_bool(egui::Id::new("drop_zone_drag"), state.session.is_dragging());

    ui.scope(|ui| {
        ui.set_opacity(fade);

        let desired = egui::vec2(theme::CARD_WIDTH, theme::DROP_ZONE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

        let visuals = ui.visuals().clone();
        let fill = theme::mix(visuals.extreme_bg_color, theme::ACCENT_FAINT, drag);
        let border_base = visuals.widgets.noninteractive.bg_stroke.color;
        let border = theme::mix(border_base, theme::ACCENT, drag);

        let painter = ui.painter();
        painter.rect_filled(rect, theme::PANEL_CORNER_RADIUS, fill);
        dashed_border(painter, rect.shrink(1.0), egui::Stroke::new(2.0, border));

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(theme::PANEL_PADDING))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );

        content.add_space(8.0);
        // The glyph swells slightly while a file hovers the window.
        let icon_size = egui::lerp(theme::DROP_ICON_SIZE..=theme::DROP_ICON_SIZE * 1.15, drag);
        let icon_colour = theme::mix(visuals.weak_text_color(), theme::ACCENT, drag);
        content.label(
            egui::RichText::new("\u{2b06}")
                .size(icon_size)
                .color(icon_colour),
        );
        content.add_space(10.0);
        content.label(egui::RichText::new("Drop your image here or").strong());
        if content.link("Browse files").clicked() {
            state.request_browse = true;
        }
        content.add_space(14.0);
        content.label(
            egui::RichText::new("Supports PNG, JPG, GIF up to 10MB")
                .small()
                .weak(),
        );

        if response.clicked() {
            state.request_browse = true;
        }
    });
}

/// Draw a dashed rectangle border edge by edge.
fn dashed_border(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..corners.len() {
        let segment = [corners[i], corners[(i + 1) % corners.len()]];
        painter.extend(egui::Shape::dashed_line(
            &segment,
            stroke,
            theme::DASH_LENGTH,
            theme::DASH_GAP,
        ));
    }
}

// =============================================================================
// Uploading: simulated progress
// =============================================================================

fn progress_card(ui: &mut egui::Ui, state: &mut AppState, fade: f32) {
    let progress = state.session.progress();
    card(ui, fade, |ui| {
        ui.label(egui::RichText::new("Uploading\u{2026}").strong());
        ui.add_space(12.0);
        ui.add(
            egui::ProgressBar::new(f32::from(progress) / 100.0)
                .fill(theme::ACCENT)
                .animate(true),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("{progress}%")).weak());
    });
}

// =============================================================================
// Success: confirmation with preview
// =============================================================================

fn success_card(ui: &mut egui::Ui, state: &mut AppState, fade: f32) {
    card(ui, fade, |ui| {
        badge(ui, "\u{2714}", theme::ACCENT, theme::ACCENT_FAINT);
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Image uploaded successfully!").strong());
        ui.add_space(12.0);

        // The preview races the simulated progress; until the read lands
        // there is simply no image to show yet.
        if let Some(texture) = &state.preview_texture {
            ui.add(egui::Image::new(texture).max_size(egui::vec2(
                theme::CARD_WIDTH - 2.0 * theme::PANEL_PADDING,
                theme::PREVIEW_MAX_HEIGHT,
            )));
            ui.add_space(12.0);
        }

        if ui.button("Upload another image").clicked() {
            state.request_reset = true;
        }
    });
}

// =============================================================================
// Error: confirmation with retry
// =============================================================================

fn error_card(ui: &mut egui::Ui, state: &mut AppState, fade: f32) {
    card(ui, fade, |ui| {
        badge(ui, "\u{2716}", theme::ERROR_RED, theme::ERROR_FAINT);
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Error during upload").strong());
        if let Some(error) = state.session.error() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(error).small().weak());
        }
        ui.add_space(12.0);
        if ui.button("Try again").clicked() {
            state.request_reset = true;
        }
    });
}

// =============================================================================
// Shared pieces
// =============================================================================

/// A centred card frame with a fade-in opacity.
fn card(ui: &mut egui::Ui, fade: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.scope(|ui| {
        ui.set_opacity(fade);
        let fill = ui.visuals().extreme_bg_color;
        egui::Frame::new()
            .fill(fill)
            .corner_radius(theme::PANEL_CORNER_RADIUS)
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(theme::CARD_WIDTH - 2.0 * theme::PANEL_PADDING);
                ui.vertical_centered(add_contents);
            });
    });
}

/// A circular glyph badge (the check / cross confirmation mark).
fn badge(ui: &mut egui::Ui, glyph: &str, fg: egui::Color32, bg: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::BADGE_SIZE, theme::BADGE_SIZE),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.circle_filled(rect.center(), theme::BADGE_SIZE / 2.0, bg);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(28.0),
        fg,
    );
}
