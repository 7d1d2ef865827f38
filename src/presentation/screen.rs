//! Main Screen
//!
//! [`ScreenModel`] is a pure mapping from the two state flags to every
//! string and enablement the screen shows; [`render`] only draws it.

use crate::domain::reducer::ScanState;
use crate::presentation::components::Components;
use crate::presentation::theme::TessenPalette;
use eframe::egui;

pub const TITLE: &str = "TESSEN Tennis Sensor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Primary,
    Error,
}

/// User callbacks raised by the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    ToggleBluetooth,
    ToggleScan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub title: &'static str,
    pub status_heading: &'static str,
    pub status_text: &'static str,
    pub status_tone: StatusTone,
    pub bluetooth_button: &'static str,
    pub scan_button: &'static str,
    pub scan_enabled: bool,
    pub data_heading: &'static str,
    pub data_text: &'static str,
}

impl ScreenModel {
    pub fn new(is_bluetooth_enabled: bool, is_scanning: bool) -> Self {
        Self {
            title: TITLE,
            status_heading: "Bluetooth 상태",
            status_text: if is_bluetooth_enabled {
                "활성화됨"
            } else {
                "비활성화됨"
            },
            status_tone: if is_bluetooth_enabled {
                StatusTone::Primary
            } else {
                StatusTone::Error
            },
            bluetooth_button: if is_bluetooth_enabled {
                "Bluetooth 끄기"
            } else {
                "Bluetooth 켜기"
            },
            scan_button: if is_scanning {
                "스캔 중지"
            } else {
                "TESSEN 센서 스캔"
            },
            scan_enabled: is_bluetooth_enabled,
            data_heading: "센서 데이터",
            data_text: if is_scanning {
                "TESSEN 센서를 찾는 중..."
            } else {
                "센서를 연결하세요"
            },
        }
    }
}

impl From<ScanState> for ScreenModel {
    fn from(state: ScanState) -> Self {
        Self::new(state.is_bluetooth_enabled, state.is_scanning)
    }
}

pub fn render(ui: &mut egui::Ui, model: &ScreenModel, palette: &TessenPalette) -> Option<ScreenIntent> {
    let mut intent = None;

    ui.vertical_centered(|ui| {
        Components::heading(ui, model.title);
        ui.add_space(32.0);

        // Bluetooth status
        Components::card(ui, |ui| {
            ui.vertical_centered(|ui| {
                Components::card_title(ui, model.status_heading);
                let color = match model.status_tone {
                    StatusTone::Primary => palette.primary,
                    StatusTone::Error => palette.error,
                };
                ui.label(egui::RichText::new(model.status_text).color(color));

                ui.add_space(8.0);
                if ui.button(model.bluetooth_button).clicked() {
                    intent = Some(ScreenIntent::ToggleBluetooth);
                }
            });
        });

        if Components::full_width_button(ui, model.scan_button, model.scan_enabled).clicked() {
            intent = Some(ScreenIntent::ToggleScan);
        }

        // Sensor data placeholder
        Components::card(ui, |ui| {
            ui.vertical(|ui| {
                Components::card_title(ui, model.data_heading);
                ui.add_space(8.0);
                ui.label(model.data_text);
            });
        });
    });

    intent
}
