/// Main `eframe::App` implementation for WimUpdater.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::AppState;
use crate::theme::WimUpdaterTheme;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so settings are
/// resolved before the OS window is created.
pub struct WimUpdaterState {
    pub(crate) inner: AppState,
}

impl WimUpdaterState {
    /// Resolve settings and bind the imaging tool. Call this before
    /// `eframe::run_native`.
    pub fn build() -> Self {
        let state = AppState::new();
        tracing::info!(
            "Imaging tool: {}",
            state.settings.tool_program.display()
        );
        Self { inner: state }
    }
}

/// The WimUpdater application.
pub struct WimUpdaterApp {
    state: AppState,
    theme: WimUpdaterTheme,
}

impl WimUpdaterApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: WimUpdaterState) -> Self {
        // ── Font: Segoe UI ────────────────────────────────────────────────
        // Registered as the highest-priority proportional font when present;
        // the Korean tool output still renders through egui's fallbacks.
        let system_root =
            std::env::var("SystemRoot").unwrap_or_else(|_| "C:\\Windows".to_string());
        let font_path = format!("{}\\Fonts\\segoeui.ttf", system_root);

        let mut fonts = egui::FontDefinitions::default();
        match std::fs::read(&font_path) {
            Ok(bytes) => {
                fonts.font_data.insert(
                    "SegoeUI".to_owned(),
                    egui::FontData::from_owned(bytes).into(),
                );
                fonts
                    .families
                    .entry(egui::FontFamily::Proportional)
                    .or_default()
                    .insert(0, "SegoeUI".to_owned());
                tracing::info!("Loaded Segoe UI from {}", font_path);
            }
            Err(e) => {
                tracing::warn!(
                    "Could not load Segoe UI from {}: {} -- using default font",
                    font_path,
                    e
                );
            }
        }
        cc.egui_ctx.set_fonts(fonts);

        let theme = WimUpdaterTheme::light();
        theme.apply(&cc.egui_ctx);

        Self {
            state: state.inner,
            theme,
        }
    }
}

impl eframe::App for WimUpdaterApp {
    /// Match the GPU clear colour to the panel background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Process background messages ───────────────────────────────────
        let _scan_changed = self.state.process_scan_messages();
        let _update_changed = self.state.process_update_messages();

        // Keep polling while a background thread is reporting.
        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &self.state, &self.theme);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &self.theme);
                ui.add_space(2.0);
            });

        // ── Update controls ───────────────────────────────────────────────
        egui::TopBottomPanel::bottom("control_panel")
            .min_height(72.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                panels::control_panel::control_panel(ui, &mut self.state, &self.theme);
                ui.add_space(6.0);
            });

        // ── Right log panel ───────────────────────────────────────────────
        egui::SidePanel::right("log_panel")
            .default_width(360.0)
            .min_width(240.0)
            .max_width(640.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::log_panel::log_panel(ui, &self.state, &self.theme);
            });

        // ── Central panel (folder + image list) ───────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::folder_panel::folder_panel(ui, &mut self.state, &self.theme);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);
            panels::image_list_panel::image_list_panel(ui, &mut self.state, &self.theme);
        });
    }
}
