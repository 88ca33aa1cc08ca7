//! SVG export of a finished doodle.
//!
//! Writes the committed elements, in sequence order, as standalone SVG
//! markup mirroring what the editor surface shows, then packs it into a
//! `data:image/svg+xml;base64,...` locator.

use crate::renderer::{DoodleRenderer, RenderError, RenderResult};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use letterink_core::{DoodleSheet, DrawElement, SerializableColor};
use peniko::Color;
use std::fmt::Write as _;

/// Font size multiplier for text labels (font size = 3x stroke width).
const TEXT_FONT_SCALE: f64 = 3.0;

/// SVG doodle renderer.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    /// Background fill. `None` keeps the export transparent, the way the
    /// editor surface is exported.
    background: Option<SerializableColor>,
}

impl SvgRenderer {
    /// Create a renderer with a transparent background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an opaque background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Produce the raw SVG markup for a sheet.
    pub fn markup(&self, sheet: &DoodleSheet) -> RenderResult<String> {
        let (width, height) = (sheet.size.width, sheet.size.height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::DegenerateSurface { width, height });
        }

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" height="100%">"#,
        );
        if let Some(background) = self.background {
            let _ = write!(
                svg,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
                background.to_hex()
            );
        }
        for element in &sheet.elements {
            self.write_element(&mut svg, element);
        }
        svg.push_str("</svg>");
        Ok(svg)
    }

    fn write_element(&self, svg: &mut String, element: &DrawElement) {
        let stroke = element.stroke();
        let color = stroke.color.to_hex();
        let width = stroke.width;
        let _ = match element {
            DrawElement::Path { path, .. } => write!(
                svg,
                r#"<path d="{}" stroke="{color}" stroke-width="{width}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
                path.to_svg()
            ),
            DrawElement::Circle { center, radius, .. } => write!(
                svg,
                r#"<circle cx="{}" cy="{}" r="{radius}" stroke="{color}" stroke-width="{width}" fill="none"/>"#,
                center.x, center.y
            ),
            DrawElement::Rectangle {
                origin,
                width: w,
                height: h,
                ..
            } => write!(
                svg,
                r#"<rect x="{}" y="{}" width="{w}" height="{h}" stroke="{color}" stroke-width="{width}" fill="none"/>"#,
                origin.x, origin.y
            ),
            DrawElement::Line { start, end, .. } => write!(
                svg,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{width}" stroke-linecap="round"/>"#,
                start.x, start.y, end.x, end.y
            ),
            DrawElement::Text {
                origin, content, ..
            } => write!(
                svg,
                r#"<text x="{}" y="{}" fill="{color}" font-size="{}" font-family="Arial, sans-serif">{}</text>"#,
                origin.x,
                origin.y,
                width * TEXT_FONT_SCALE,
                escape_xml(content)
            ),
        };
    }
}

impl DoodleRenderer for SvgRenderer {
    fn render(&self, sheet: &DoodleSheet) -> RenderResult<String> {
        let markup = self.markup(sheet)?;
        log::debug!("rendered doodle svg, {} bytes", markup.len());
        Ok(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(markup)
        ))
    }
}

/// Escape text content for inclusion in XML markup.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
