/// Colour scheme for WimUpdater.
///
/// A single light palette. All colour constants live here so the panels
/// reference semantically-named values rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct WimUpdaterTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub danger: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    pub log_background: Color32,
}

impl Default for WimUpdaterTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl WimUpdaterTheme {
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xf9, 0xfa),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe9, 0xec, 0xef),
            text_primary: Color32::from_rgb(0x21, 0x25, 0x29),
            text_secondary: Color32::from_rgb(0x49, 0x50, 0x57),
            text_muted: Color32::from_rgb(0x6c, 0x75, 0x7d),
            accent: Color32::from_rgb(0x0d, 0x6e, 0xfd),
            accent_hover: Color32::from_rgb(0x0b, 0x5e, 0xd7),
            danger: Color32::from_rgb(0xdc, 0x35, 0x45),
            warning: Color32::from_rgb(0xfd, 0x7e, 0x14),
            success: Color32::from_rgb(0x19, 0x87, 0x54),
            separator: Color32::from_rgb(0xde, 0xe2, 0xe6),
            selection: Color32::from_rgba_premultiplied(0x0d, 0x6e, 0xfd, 0x30),
            log_background: Color32::from_rgb(0xf1, 0xf3, 0xf5),
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.log_background;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        visuals.widgets.inactive.bg_fill = self.surface_hover;
        visuals.widgets.inactive.weak_bg_fill = self.surface_hover;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent_hover);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.surface);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }

    /// Fill for a primary action button.
    pub fn primary_button<'a>(&self, text: &str) -> egui::Button<'a> {
        egui::Button::new(egui::RichText::new(text).color(self.surface).strong())
            .fill(self.accent)
            .min_size(egui::vec2(110.0, 30.0))
    }

    /// Fill for a destructive action button.
    pub fn danger_button<'a>(&self, text: &str) -> egui::Button<'a> {
        egui::Button::new(egui::RichText::new(text).color(self.surface).strong())
            .fill(self.danger)
            .min_size(egui::vec2(110.0, 30.0))
    }
}
