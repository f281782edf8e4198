//! Drawing surface abstraction

use glam::{Vec2, Vec4};

/// Line stroke: width in pixels and RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Vec4,
}

impl Stroke {
    pub fn new(width: f32, color: Vec4) -> Self {
        Self { width, color }
    }
}

/// Which point of the text box sits on the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    LeftTop,
    LeftBottom,
    CenterTop,
    Center,
    RightTop,
    RightCenter,
}

/// A 2D surface in canvas-local pixels, origin at the top-left corner.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Vec4);

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    /// Axis-aligned rectangle centered on `center`.
    fn rect(&mut self, center: Vec2, size: Vec2, fill: Option<Vec4>, stroke: Option<Stroke>);

    fn circle(&mut self, center: Vec2, radius: f32, fill: Option<Vec4>, stroke: Option<Stroke>);

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, color: Vec4);
}
