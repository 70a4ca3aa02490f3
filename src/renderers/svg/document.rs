//! SVG document generation
//!
//! Wraps a surface's groups in an `<svg>` root element.

use super::SvgSurface;

/// Root element settings
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    pub width: f32,
    pub height: f32,
}

impl SvgDocument {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn render(&self, surface: &SvgSurface) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">{}</svg>"#,
            self.width,
            self.height,
            surface.to_markup()
        )
    }
}
