use eframe::egui;

pub struct Components;

impl Components {
    pub fn heading(ui: &mut egui::Ui, text: &str) {
        ui.label(egui::RichText::new(text).size(24.0).strong());
    }

    pub fn card_title(ui: &mut egui::Ui, text: &str) {
        ui.label(egui::RichText::new(text).size(18.0).strong());
    }

    /// Full-width filled card
    pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        let visuals = &ui.style().visuals.widgets.noninteractive;
        let (fill, rounding) = (visuals.bg_fill, visuals.rounding);

        egui::Frame::none()
            .inner_margin(egui::Margin::same(16.0))
            .rounding(rounding)
            .fill(fill)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui)
            })
            .inner
    }

    pub fn full_width_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
        ui.add_enabled(
            enabled,
            egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 44.0)),
        )
    }
}
