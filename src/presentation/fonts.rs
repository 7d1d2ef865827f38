//! Hangul font installation
//!
//! egui's bundled fonts have no Hangul glyphs, so a system font is loaded
//! and appended as a fallback for both font families.

use eframe::egui;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const FONT_NAME: &str = "tessen-hangul";

/// Well-known locations of Hangul-capable fonts, most specific first
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
];

/// First readable font: the configured path, then the system candidates
pub fn find_font(configured: Option<&str>) -> Option<PathBuf> {
    configured
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
        .find(|path| path.is_file())
}

pub fn install_hangul_font(ctx: &egui::Context, configured: Option<&str>) {
    let Some(path) = find_font(configured) else {
        warn!("No Hangul font found; Korean text will not render. Set `font_path` in settings.");
        return;
    };

    match load_definitions(&path) {
        Ok(fonts) => {
            info!("Using font {:?}", path);
            ctx.set_fonts(fonts);
        }
        Err(e) => warn!("Failed to load font {:?}: {}", path, e),
    }
}

fn load_definitions(path: &Path) -> std::io::Result<egui::FontDefinitions> {
    let bytes = std::fs::read(path)?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), egui::FontData::from_owned(bytes));

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_font_wins_when_present() {
        let path = std::env::temp_dir().join(format!("tessen-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"not really a font").unwrap();

        let found = find_font(path.to_str());
        let _ = std::fs::remove_file(&path);
        assert_eq!(found, Some(path));
    }

    #[test]
    fn missing_configured_font_is_skipped() {
        let found = find_font(Some("/nonexistent/tessen.ttf"));
        assert_ne!(found, Some(PathBuf::from("/nonexistent/tessen.ttf")));
    }

    #[test]
    fn definitions_append_fallback() {
        let path = std::env::temp_dir().join(format!("tessen-defs-{}.ttf", std::process::id()));
        std::fs::write(&path, b"font bytes").unwrap();

        let fonts = load_definitions(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(fonts.font_data.contains_key(FONT_NAME));
        let proportional = &fonts.families[&egui::FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some(FONT_NAME));
    }
}
