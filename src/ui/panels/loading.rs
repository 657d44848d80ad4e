// Dropspot - ui/panels/loading.rs
//
// The placeholder loading panel: a fixed-size container of static filler
// text. No inputs, no state, no events.

use crate::ui::theme;

/// Filler copy shown while the panel stands in for real content.
const FILLER_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipisicing elit. \
    Eaque dolores magni corrupti obcaecati ab dignissimos repellat velit qui. \
    Provident, quia similique? Quia dolor repellendus ipsam odio ea voluptatibus \
    adipisci nihil!";

/// Render the loading panel, centred in the available space.
pub fn render(ui: &mut egui::Ui) {
    let avail = ui.available_rect_before_wrap();
    let size = theme::LOADING_PANEL_SIZE.min(avail.size());
    let rect = egui::Rect::from_center_size(avail.center(), size);

    ui.painter().rect_filled(
        rect,
        theme::PANEL_CORNER_RADIUS,
        ui.visuals().extreme_bg_color,
    );
    ui.put(
        rect.shrink(theme::PANEL_PADDING),
        egui::Label::new(egui::RichText::new(FILLER_TEXT).weak()).wrap(),
    );
}
