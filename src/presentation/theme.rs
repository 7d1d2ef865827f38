use eframe::egui;

/// Colours shared by the screen and the theme setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessenPalette {
    pub bg: egui::Color32,
    pub surface: egui::Color32,
    pub fg: egui::Color32,
    pub outline: egui::Color32,
    pub primary: egui::Color32,
    pub on_primary: egui::Color32,
    pub error: egui::Color32,
    pub accent_ball: egui::Color32,
}

impl TessenPalette {
    pub fn new(is_dark: bool) -> Self {
        if is_dark {
            Self {
                bg: egui::Color32::from_rgb(20, 24, 22),
                surface: egui::Color32::from_rgb(34, 40, 37),
                fg: egui::Color32::from_rgb(226, 232, 228),
                outline: egui::Color32::from_rgb(70, 80, 75),
                primary: egui::Color32::from_rgb(110, 214, 150),
                on_primary: egui::Color32::from_rgb(0, 57, 29),
                error: egui::Color32::from_rgb(255, 180, 171),
                accent_ball: egui::Color32::from_rgb(223, 255, 79),
            }
        } else {
            Self {
                bg: egui::Color32::from_rgb(246, 251, 246),
                surface: egui::Color32::from_rgb(232, 240, 234),
                fg: egui::Color32::from_rgb(24, 29, 26),
                outline: egui::Color32::from_rgb(192, 201, 194),
                primary: egui::Color32::from_rgb(0, 108, 60),
                on_primary: egui::Color32::WHITE,
                error: egui::Color32::from_rgb(186, 26, 26),
                accent_ball: egui::Color32::from_rgb(204, 238, 0),
            }
        }
    }
}

pub fn configure_tessen_theme(ctx: &egui::Context, is_dark: bool) -> TessenPalette {
    let mut style = (*ctx.style()).clone();
    let palette = TessenPalette::new(is_dark);
    let rounding = egui::Rounding::same(12.0);

    // Typography
    style
        .text_styles
        .iter_mut()
        .for_each(|(text_style, font_id)| {
            font_id.size = match text_style {
                egui::TextStyle::Heading => 24.0,
                egui::TextStyle::Body => 16.0,
                egui::TextStyle::Button => 16.0,
                _ => font_id.size,
            };
        });

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 16.0);
    style.spacing.button_padding = egui::vec2(20.0, 10.0);

    // Visuals
    style.visuals.dark_mode = is_dark;

    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.outline);
    style.visuals.widgets.noninteractive.rounding = rounding;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, palette.fg);
    style.visuals.widgets.noninteractive.bg_fill = palette.surface;

    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.rounding = rounding;
    style.visuals.widgets.inactive.bg_fill = palette.primary;
    style.visuals.widgets.inactive.weak_bg_fill = palette.primary;
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, palette.on_primary);

    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, palette.accent_ball);
    style.visuals.widgets.hovered.rounding = rounding;
    style.visuals.widgets.hovered.bg_fill = palette.primary;
    style.visuals.widgets.hovered.weak_bg_fill = palette.primary;
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, palette.on_primary);

    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, palette.accent_ball);
    style.visuals.widgets.active.rounding = rounding;
    style.visuals.widgets.active.bg_fill = palette.primary;
    style.visuals.widgets.active.weak_bg_fill = palette.primary;
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, palette.on_primary);

    style.visuals.selection.stroke = egui::Stroke::new(1.0, palette.on_primary);
    style.visuals.selection.bg_fill = palette.primary;

    style.visuals.window_rounding = rounding;
    style.visuals.window_stroke = egui::Stroke::new(1.0, palette.outline);
    style.visuals.window_fill = palette.surface;
    style.visuals.panel_fill = palette.bg;

    ctx.set_style(style);
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones_differ() {
        for is_dark in [false, true] {
            let palette = TessenPalette::new(is_dark);
            assert_ne!(palette.primary, palette.error);
        }
    }
}
