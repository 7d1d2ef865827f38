use crate::domain::controller::ScanController;
use crate::domain::models::Capability;
use crate::domain::platform::AdapterPlatform;
use crate::domain::settings::SettingsService;
use crate::infrastructure::adapter;
use crate::infrastructure::permissions::ConsentPermissions;
use crate::presentation::screen::{self, ScreenIntent, ScreenModel};
use crate::presentation::theme::{configure_tessen_theme, TessenPalette};
use crate::presentation::{consent, fonts};
use eframe::egui;
use tracing::warn;

pub struct TessenApp {
    settings: SettingsService,
    controller: ScanController<Box<dyn AdapterPlatform>, ConsentPermissions>,
    palette: TessenPalette,
}

impl TessenApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsService) -> Self {
        let s = settings.get();
        fonts::install_hangul_font(&cc.egui_ctx, s.font_path.as_deref());
        let palette = configure_tessen_theme(&cc.egui_ctx, s.dark_mode);

        let adapter = adapter::default_adapter(s.bluetooth_settings_command.clone());
        let permissions = ConsentPermissions::new(s.granted_capabilities.iter().copied());

        Self {
            settings,
            controller: ScanController::new(adapter, permissions),
            palette,
        }
    }

    fn handle_intent(&mut self, intent: ScreenIntent) {
        match intent {
            ScreenIntent::ToggleBluetooth => self.controller.enable_bluetooth(),
            ScreenIntent::ToggleScan => self.controller.toggle_scan(),
        }
    }

    fn persist_grants(&mut self, granted: Vec<Capability>) {
        if let Err(e) = self.settings.set_granted(granted) {
            warn!("Failed to save granted capabilities: {}", e);
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = !self.settings.get().dark_mode;
        self.settings.get_mut().dark_mode = dark_mode;
        self.palette = configure_tessen_theme(ctx, dark_mode);
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn ui_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let switch_icon = if self.settings.get().dark_mode {
                    "☀"
                } else {
                    "🌙"
                };
                if ui.small_button(switch_icon).clicked() {
                    self.toggle_dark_mode(ctx);
                }

                let has_grants = !self.controller.permissions().granted().is_empty();
                if has_grants && ui.small_button("권한 초기화").clicked() {
                    self.controller.permissions_mut().revoke_all();
                    self.persist_grants(Vec::new());
                }
            });
        });
    }

    fn ui_consent(&mut self, ctx: &egui::Context) {
        let Some(capabilities) = self.controller.permissions().pending().map(<[_]>::to_vec) else {
            return;
        };

        if let Some(allow) = consent::show(ctx, &capabilities) {
            if let Some(granted) = self.controller.permissions_mut().answer(allow) {
                self.persist_grants(granted);
            }
            self.controller.poll();
        }
    }
}

impl eframe::App for TessenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();

        self.ui_top_bar(ctx);
        self.ui_consent(ctx);

        let model = ScreenModel::from(self.controller.state());
        let intent = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.add_space(16.0);
                        screen::render(ui, &model, &self.palette)
                    })
                    .inner
            })
            .inner;

        if let Some(intent) = intent {
            self.handle_intent(intent);
        }
    }
}
