//! Static field schematic

use glam::Vec4;

use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::types::FieldPoint;

/// Colors for field elements
pub mod field_colors {
    use glam::Vec4;

    pub const BOUNDARY: Vec4 = Vec4::new(0.85, 0.85, 0.85, 1.0); // Light gray
    pub const BLUE_GOAL: Vec4 = Vec4::new(0.2, 0.4, 1.0, 0.35); // Translucent blue
    pub const RED_GOAL: Vec4 = Vec4::new(1.0, 0.25, 0.2, 0.35); // Translucent red
    pub const CENTER_LINE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.9); // White
}

/// Goal zone depth along x, in meters
pub const GOAL_ZONE_DEPTH: f64 = 1.5;
/// Goal zone width along y, in meters
pub const GOAL_ZONE_WIDTH: f64 = 3.0;
/// Center line stroke thickness in meters
pub const CENTER_LINE_THICKNESS: f64 = 0.08;

/// One static element of the field schematic.
///
/// Positions and extents are in meters; the renderer projects them.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldElement {
    /// Axis-aligned rectangle centered on `center`.
    Rectangle {
        name: &'static str,
        center: FieldPoint,
        /// Full (width, height) in meters
        size: (f64, f64),
        color: Vec4,
        filled: bool,
    },
    /// Straight segment through `center`, spanning `extent` meters along x and y.
    Line {
        name: &'static str,
        center: FieldPoint,
        extent: (f64, f64),
        thickness: f64,
        color: Vec4,
    },
}

impl FieldElement {
    pub fn name(&self) -> &'static str {
        match self {
            FieldElement::Rectangle { name, .. } | FieldElement::Line { name, .. } => name,
        }
    }

    pub fn center(&self) -> FieldPoint {
        match self {
            FieldElement::Rectangle { center, .. } | FieldElement::Line { center, .. } => *center,
        }
    }

    /// Segment end points of a line element, in meters
    pub fn line_endpoints(&self) -> Option<(FieldPoint, FieldPoint)> {
        match self {
            FieldElement::Line { center, extent, .. } => {
                let half_x = extent.0 * 0.5;
                let half_y = extent.1 * 0.5;
                Some((
                    FieldPoint::new(center.x - half_x, center.y - half_y),
                    FieldPoint::new(center.x + half_x, center.y + half_y),
                ))
            }
            FieldElement::Rectangle { .. } => None,
        }
    }
}

/// The default schematic: boundary, two goal zones and the center line.
pub fn default_field_layout() -> Vec<FieldElement> {
    let mid_x = FIELD_WIDTH * 0.5;
    let mid_y = FIELD_HEIGHT * 0.5;

    vec![
        FieldElement::Rectangle {
            name: "boundary",
            center: FieldPoint::new(mid_x, mid_y),
            size: (FIELD_WIDTH, FIELD_HEIGHT),
            color: field_colors::BOUNDARY,
            filled: false,
        },
        FieldElement::Rectangle {
            name: "blue_goal",
            center: FieldPoint::new(GOAL_ZONE_DEPTH * 0.5, mid_y),
            size: (GOAL_ZONE_DEPTH, GOAL_ZONE_WIDTH),
            color: field_colors::BLUE_GOAL,
            filled: true,
        },
        FieldElement::Rectangle {
            name: "red_goal",
            center: FieldPoint::new(FIELD_WIDTH - GOAL_ZONE_DEPTH * 0.5, mid_y),
            size: (GOAL_ZONE_DEPTH, GOAL_ZONE_WIDTH),
            color: field_colors::RED_GOAL,
            filled: true,
        },
        FieldElement::Line {
            name: "center_line",
            center: FieldPoint::new(mid_x, mid_y),
            extent: (0.0, FIELD_HEIGHT),
            thickness: CENTER_LINE_THICKNESS,
            color: field_colors::CENTER_LINE,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_stays_on_field() {
        for element in default_field_layout() {
            assert!(element.center().is_on_field(), "{}", element.name());
            if let FieldElement::Rectangle { center, size, .. } = &element {
                assert!(center.x - size.0 * 0.5 >= 0.0);
                assert!(center.x + size.0 * 0.5 <= FIELD_WIDTH);
                assert!(center.y - size.1 * 0.5 >= 0.0);
                assert!(center.y + size.1 * 0.5 <= FIELD_HEIGHT);
            }
        }
    }

    #[test]
    fn test_center_line_spans_field_height() {
        let layout = default_field_layout();
        let line = layout
            .iter()
            .find(|e| e.name() == "center_line")
            .expect("center line present");
        let (a, b) = line.line_endpoints().expect("line element");
        assert_eq!(a, FieldPoint::new(7.5, 0.0));
        assert_eq!(b, FieldPoint::new(7.5, 8.0));
    }
}
