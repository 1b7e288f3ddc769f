//! Dashboard theme: soft pastels, rounded widgets, bold buttons.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Fixed palette. The window background itself cycles, see
/// [`crate::animation::BackgroundCycle`].
pub struct DashColors;

impl DashColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const PINK: Color32 = Color32::from_rgb(0xFF, 0xD8, 0xE8);
    pub const CALC_BUTTON: Color32 = Color32::from_rgb(0xFF, 0x69, 0xB4);
    pub const CALC_BUTTON_ACTIVE: Color32 = Color32::from_rgb(0xFF, 0x14, 0x93);
    pub const CLEAR_BUTTON: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
    pub const BAR_FILL: Color32 = Color32::from_rgb(0x6A, 0x5A, 0xCD);
    pub const FRAME: Color32 = Color32::from_rgb(0xC8, 0xC8, 0xC8);
}

pub struct DashTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_button: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for DashTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            font_size_button: 14.0,
            window_padding: 10.0,
            item_spacing: 6.0,
        }
    }
}

impl DashTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = DashColors::WHITE;
        visuals.panel_fill = DashColors::PINK;
        visuals.extreme_bg_color = DashColors::WHITE;
        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, DashColors::FRAME);

        let rounded = |ws: &mut egui::style::WidgetVisuals| {
            ws.rounding = Rounding::same(4.0);
        };
        rounded(&mut visuals.widgets.noninteractive);
        rounded(&mut visuals.widgets.inactive);
        rounded(&mut visuals.widgets.hovered);
        rounded(&mut visuals.widgets.active);
        rounded(&mut visuals.widgets.open);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(15.0, 5.0);

        ctx.set_style(style);
    }

    /// White chart panel with a ridge-like outline
    pub fn chart_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(DashColors::WHITE)
            .stroke(Stroke::new(2.0, DashColors::FRAME))
            .inner_margin(egui::Margin::same(4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(DashColors::WHITE)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            egui::menu::bar(ui, add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Cmd+/Cmd- so the dashboard layout is not zoomed out of shape.
/// Call at the start of `update()`.
pub fn consume_zoom_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| {
            !matches!(event,
                egui::Event::Key { key, modifiers, .. }
                    if modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
        });
    });
}
