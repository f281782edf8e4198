//! Canvas that records draw calls instead of painting them.

use glam::{Vec2, Vec4};

use crate::canvas::{Canvas, Stroke, TextAnchor};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Vec4),
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Rect {
        center: Vec2,
        size: Vec2,
        fill: Option<Vec4>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Vec4>,
        stroke: Option<Stroke>,
    },
    Text {
        pos: Vec2,
        anchor: TextAnchor,
        text: String,
        size: f32,
        color: Vec4,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any drawn text contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Vec2, Vec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { center, size, .. } => Some((*center, *size)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Vec4) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn rect(&mut self, center: Vec2, size: Vec2, fill: Option<Vec4>, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::Rect {
            center,
            size,
            fill,
            stroke,
        });
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Vec4>, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, color: Vec4) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }
}
