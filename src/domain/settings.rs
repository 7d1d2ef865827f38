use crate::domain::models::Capability;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Directory name under the platform config / data dirs
pub const APP_DIR_NAME: &str = "TESSEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_true")]
    pub file_logging_enabled: bool,
    #[serde(default = "default_true")]
    pub console_logging_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_prefix")]
    pub file_name_prefix: String,
    #[serde(default = "default_true")]
    pub show_file_line: bool,
    #[serde(default = "default_false")]
    pub show_thread_ids: bool,
    #[serde(default = "default_true")]
    pub show_target: bool,
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String, // "daily", "hourly", "minutely", "never"
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            file_logging_enabled: default_true(),
            console_logging_enabled: default_true(),
            log_dir: default_log_dir(),
            file_name_prefix: default_prefix(),
            show_file_line: default_true(),
            show_thread_ids: default_false(),
            show_target: default_true(),
            ansi_colors: default_true(),
            rotation: default_rotation(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_prefix() -> String {
    "tessen".to_string()
}
fn default_rotation() -> String {
    "daily".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_settings: LogSettings,

    // Appearance
    #[serde(default = "default_false")]
    pub dark_mode: bool,
    /// Font with Hangul coverage; system fonts are probed when unset
    #[serde(default)]
    pub font_path: Option<String>,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    // Platform hand-off. BlueZ hosts power the radio directly and only use
    // this when no BlueZ session is available.
    #[serde(default = "default_bluetooth_settings_command")]
    pub bluetooth_settings_command: Vec<String>,
    #[serde(default)]
    pub granted_capabilities: Vec<Capability>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_settings: LogSettings::default(),
            dark_mode: false,
            font_path: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            bluetooth_settings_command: default_bluetooth_settings_command(),
            granted_capabilities: Vec::new(),
        }
    }
}

fn default_window_width() -> f32 {
    480.0
}
fn default_window_height() -> f32 {
    720.0
}

fn default_bluetooth_settings_command() -> Vec<String> {
    let command: &[&str] = if cfg!(windows) {
        &["explorer", "ms-settings:bluetooth"]
    } else if cfg!(target_os = "macos") {
        &[
            "open",
            "x-apple.systempreferences:com.apple.preferences.Bluetooth",
        ]
    } else {
        &[]
    };
    command.iter().map(|s| s.to_string()).collect()
}

pub struct SettingsService {
    settings: Settings,
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Ok(Self::load_from(settings_path))
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_from(settings_path: PathBuf) -> Self {
        let settings = match Self::load_from_file(&settings_path) {
            Ok(settings) => settings,
            Err(e) => {
                // Logging is not initialised yet on first load; keep stderr too.
                if settings_path.exists() {
                    eprintln!("Ignoring unreadable settings {:?}: {}", settings_path, e);
                    warn!("Ignoring unreadable settings {:?}: {}", settings_path, e);
                }
                Settings::default()
            }
        };

        Self {
            settings,
            settings_path,
        }
    }

    fn get_settings_path() -> anyhow::Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push(APP_DIR_NAME);
        fs::create_dir_all(&path)?;
        path.push("settings.json");
        Ok(path)
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Settings> {
        let contents = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.settings_path, json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn set_granted(&mut self, capabilities: Vec<Capability>) -> anyhow::Result<()> {
        if self.settings.granted_capabilities == capabilities {
            return Ok(());
        }
        info!("Remembering granted capabilities: {:?}", capabilities);
        self.settings.granted_capabilities = capabilities;
        self.save()
    }
}
