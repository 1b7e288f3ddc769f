//! Custom widgets for the dashboard

use egui::{Color32, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::draw::{paint, DrawCommand};
use crate::theme::DashColors;

/// Horizontal result bar: white track, filled from the left.
pub struct ResultBar {
    fill_width: f32,
}

/// Track size; the fill width is capped to it.
const RESULT_BAR_SIZE: Vec2 = Vec2::new(300.0, 30.0);

impl ResultBar {
    pub fn new(fill_width: f32) -> Self {
        Self { fill_width }
    }
}

impl Widget for ResultBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(RESULT_BAR_SIZE, Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, DashColors::WHITE);
            let width = self.fill_width.clamp(0.0, rect.width());
            if width > 0.0 {
                let fill = egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
                painter.rect_filled(fill, 0.0, DashColors::BAR_FILL);
            }
        }
        response
    }
}

/// Solid colored button with white bold text; darker while pressed.
pub struct PillButton<'a> {
    text: &'a str,
    fill: Color32,
    active_fill: Color32,
    font_size: f32,
}

impl<'a> PillButton<'a> {
    pub fn new(text: &'a str, fill: Color32) -> Self {
        Self {
            text,
            fill,
            active_fill: fill,
            font_size: 14.0,
        }
    }

    pub fn active_fill(mut self, color: Color32) -> Self {
        self.active_fill = color;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

impl<'a> Widget for PillButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(self.text.to_string(), font.clone(), DashColors::WHITE);
        let padding = egui::vec2(20.0, 6.0);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let pressed = response.is_pointer_button_down_on();
            let fill = if pressed { self.active_fill } else { self.fill };
            painter.rect_filled(rect, 4.0, fill);
            if response.hovered() {
                painter.rect_stroke(rect, 4.0, Stroke::new(1.0, DashColors::WHITE));
            }
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                font,
                DashColors::WHITE,
            );
        }

        response
    }
}

/// Fixed-size white canvas painted from draw commands. Shapes outside the
/// canvas are clipped.
pub fn chart_canvas<'a>(
    ui: &mut Ui,
    size: Vec2,
    commands: impl IntoIterator<Item = &'a DrawCommand>,
) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, DashColors::WHITE);
        paint(&painter, rect.min, commands);
    }
    response
}

/// Status bar: white bg, thin top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(DashColors::WHITE)
        .stroke(Stroke::new(1.0, DashColors::FRAME))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}
