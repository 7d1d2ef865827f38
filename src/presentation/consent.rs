use crate::domain::models::Capability;
use eframe::egui;

/// Modal asking for the pending capabilities. Returns `Some(allow)` once
/// the user answers.
pub fn show(ctx: &egui::Context, capabilities: &[Capability]) -> Option<bool> {
    let mut decision = None;

    egui::Window::new("권한 요청")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("TESSEN 센서를 스캔하려면 다음 권한이 필요합니다.");
            ui.add_space(8.0);
            for capability in capabilities {
                ui.label(format!("• {}", capability.label()));
            }
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("허용").clicked() {
                    decision = Some(true);
                }
                if ui.button("거부").clicked() {
                    decision = Some(false);
                }
            });
        });

    decision
}
