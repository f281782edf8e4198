//! egui backend for the field renderer

use field_core::MIN_CANVAS_SIZE;
use field_renderer::{Canvas, Stroke, TextAnchor};
use glam::{Vec2, Vec4};

/// Size to allocate for the field view given the space left in the panel.
///
/// Never smaller than [`MIN_CANVAS_SIZE`] on either side, so the allocated
/// rect and the dimensions used for hit testing always agree.
pub fn surface_size(available: egui::Vec2) -> egui::Vec2 {
    let min = MIN_CANVAS_SIZE as f32;
    available.max(egui::vec2(min, min))
}

/// Draws onto an egui painter clipped to the field view rectangle.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    /// Canvas-local pixel to screen position
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x, self.rect.min.y + p.y)
    }
}

/// Convert a linear RGBA color in [0, 1] to egui's 8-bit color
pub fn to_color32(color: Vec4) -> egui::Color32 {
    let c = (color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
    egui::Color32::from_rgba_unmultiplied(c.x as u8, c.y as u8, c.z as u8, c.w as u8)
}

fn to_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

pub fn to_align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::LeftTop => egui::Align2::LEFT_TOP,
        TextAnchor::LeftBottom => egui::Align2::LEFT_BOTTOM,
        TextAnchor::CenterTop => egui::Align2::CENTER_TOP,
        TextAnchor::Center => egui::Align2::CENTER_CENTER,
        TextAnchor::RightTop => egui::Align2::RIGHT_TOP,
        TextAnchor::RightCenter => egui::Align2::RIGHT_CENTER,
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, color: Vec4) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], to_stroke(stroke));
    }

    fn rect(&mut self, center: Vec2, size: Vec2, fill: Option<Vec4>, stroke: Option<Stroke>) {
        let rect = egui::Rect::from_center_size(self.to_screen(center), egui::vec2(size.x, size.y));
        if let Some(fill) = fill {
            self.painter.rect_filled(rect, 0.0, to_color32(fill));
        }
        if let Some(stroke) = stroke {
            self.painter.rect_stroke(rect, 0.0, to_stroke(stroke));
        }
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Vec4>, stroke: Option<Stroke>) {
        self.painter.circle(
            self.to_screen(center),
            radius,
            fill.map(to_color32).unwrap_or(egui::Color32::TRANSPARENT),
            stroke.map(to_stroke).unwrap_or(egui::Stroke::NONE),
        );
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, color: Vec4) {
        self.painter.text(
            self.to_screen(pos),
            to_align(anchor),
            text,
            egui::FontId::proportional(size),
            to_color32(color),
        );
    }
}
