//! Draw element definitions for the doodle editor.

use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// CSS hex form (`#rrggbb`), as written into SVG attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The fixed pen palette offered by the editor chrome.
pub const PALETTE: [SerializableColor; 8] = [
    SerializableColor { r: 0x00, g: 0x00, b: 0x00, a: 255 }, // Black
    SerializableColor { r: 0x4B, g: 0x55, b: 0x63, a: 255 }, // Gray
    SerializableColor { r: 0xEF, g: 0x44, b: 0x44, a: 255 }, // Red
    SerializableColor { r: 0xF5, g: 0x9E, b: 0x0B, a: 255 }, // Orange
    SerializableColor { r: 0x10, g: 0xB9, b: 0x81, a: 255 }, // Green
    SerializableColor { r: 0x3B, g: 0x82, b: 0xF6, a: 255 }, // Blue
    SerializableColor { r: 0x8B, g: 0x5C, b: 0xF6, a: 255 }, // Purple
    SerializableColor { r: 0xEC, g: 0x48, b: 0x99, a: 255 }, // Pink
];

/// Background color of the drawing surface. Erase strokes are painted in
/// this color rather than removing geometry underneath.
pub const SURFACE_BACKGROUND: SerializableColor = SerializableColor {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Stroke properties captured when an element is committed.
///
/// Later palette or width changes in the editor never touch these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: SerializableColor,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            width: 5.0,
        }
    }
}

/// A committed element of a doodle, rendered in sequence order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DrawElement {
    /// Smoothed freehand path (MoveTo followed by QuadTo segments).
    Path { path: BezPath, stroke: Stroke },
    /// Circle around a center point.
    Circle {
        center: Point,
        radius: f64,
        stroke: Stroke,
    },
    /// Axis-aligned rectangle.
    Rectangle {
        origin: Point,
        width: f64,
        height: f64,
        stroke: Stroke,
    },
    /// Straight line segment.
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    /// Text label anchored at its baseline origin.
    Text {
        origin: Point,
        content: String,
        stroke: Stroke,
    },
}

impl DrawElement {
    /// Get the stroke properties of this element.
    pub fn stroke(&self) -> Stroke {
        match self {
            DrawElement::Path { stroke, .. }
            | DrawElement::Circle { stroke, .. }
            | DrawElement::Rectangle { stroke, .. }
            | DrawElement::Line { stroke, .. }
            | DrawElement::Text { stroke, .. } => *stroke,
        }
    }

    /// Get the bounding box of this element's geometry.
    ///
    /// Text bounds are approximated from the font size (3x stroke width)
    /// since the core does no text layout.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawElement::Path { path, .. } => path.bounding_box(),
            DrawElement::Circle { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
            DrawElement::Rectangle {
                origin,
                width,
                height,
                ..
            } => Rect::new(origin.x, origin.y, origin.x + width, origin.y + height),
            DrawElement::Line { start, end, .. } => Rect::new(
                start.x.min(end.x),
                start.y.min(end.y),
                start.x.max(end.x),
                start.y.max(end.y),
            ),
            DrawElement::Text {
                origin, content, ..
            } => {
                let font_size = self.stroke().width * 3.0;
                let width = content.chars().count() as f64 * font_size * 0.55;
                Rect::new(origin.x, origin.y - font_size, origin.x + width, origin.y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(SerializableColor::black().to_hex(), "#000000");
        assert_eq!(PALETTE[5].to_hex(), "#3B82F6");
    }

    #[test]
    fn test_color_roundtrip() {
        let color: Color = PALETTE[2].into();
        let back: SerializableColor = color.into();
        assert_eq!(back, PALETTE[2]);
    }

    #[test]
    fn test_circle_bounds() {
        let el = DrawElement::Circle {
            center: Point::new(50.0, 50.0),
            radius: 10.0,
            stroke: Stroke::default(),
        };
        let bounds = el.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_bounds_normalized() {
        let el = DrawElement::Line {
            start: Point::new(100.0, 20.0),
            end: Point::new(10.0, 80.0),
            stroke: Stroke::default(),
        };
        let bounds = el.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_element_serde() {
        let el = DrawElement::Rectangle {
            origin: Point::new(1.0, 2.0),
            width: 30.0,
            height: 40.0,
            stroke: Stroke {
                color: PALETTE[3],
                width: 2.0,
            },
        };
        let json = serde_json::to_string(&el).unwrap();
        let back: DrawElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stroke().color, PALETTE[3]);
    }
}
