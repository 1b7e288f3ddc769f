//! Backend-neutral drawing commands and their egui painter.
//!
//! Chart renderers produce `DrawCommand`s in canvas-local coordinates
//! (origin at the canvas top-left). `paint` offsets them onto the screen.
//! Keeping the renderers free of `Painter` makes their output testable.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Rect {
        rect: Rect,
        fill: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    /// Filled convex polygon
    Polygon {
        points: Vec<Pos2>,
        fill: Color32,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

impl DrawCommand {
    pub fn line(from: Pos2, to: Pos2, width: f32, color: Color32) -> Self {
        DrawCommand::Line { from, to, width, color }
    }

    pub fn text(pos: Pos2, anchor: Align2, text: impl Into<String>, size: f32, color: Color32) -> Self {
        DrawCommand::Text {
            pos,
            anchor,
            text: text.into(),
            size,
            color,
        }
    }
}

/// Paint commands with `origin` as the canvas top-left. The painter should
/// already be clipped to the canvas; anything outside it is cut off.
pub fn paint<'a>(painter: &Painter, origin: Pos2, commands: impl IntoIterator<Item = &'a DrawCommand>) {
    let offset = origin.to_vec2();
    for cmd in commands {
        paint_one(painter, offset, cmd);
    }
}

fn paint_one(painter: &Painter, offset: Vec2, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Line { from, to, width, color } => {
            painter.line_segment([*from + offset, *to + offset], Stroke::new(*width, *color));
        }
        DrawCommand::Rect { rect, fill } => {
            painter.rect_filled(rect.translate(offset), 0.0, *fill);
        }
        DrawCommand::Circle { center, radius, fill } => {
            painter.circle_filled(*center + offset, *radius, *fill);
        }
        DrawCommand::Polygon { points, fill } => {
            let points = points.iter().map(|p| *p + offset).collect();
            painter.add(Shape::convex_polygon(points, *fill, Stroke::NONE));
        }
        DrawCommand::Text { pos, anchor, text, size, color } => {
            painter.text(*pos + offset, *anchor, text, FontId::proportional(*size), *color);
        }
    }
}
