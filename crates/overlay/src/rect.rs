//! Pixel-space geometry

use serde::{Deserialize, Serialize};

/// Position of a surface element within the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel-space rectangle on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle so a stroke of `border_width` sits centered on
    /// the cell boundary it outlines.
    pub fn border_inset(self, border_width: f64) -> Self {
        Self {
            x: self.x - border_width / 2.0,
            y: self.y - border_width / 2.0,
            width: self.width - border_width,
            height: self.height - border_width,
        }
    }

    /// The rectangle shifted by an element offset.
    pub fn translate(self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_inset() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0).border_inset(2.0);
        assert_eq!(r, Rect::new(9.0, 19.0, 98.0, 48.0));
    }

    #[test]
    fn test_translate() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translate(Offset::new(10.0, 20.0));
        assert_eq!(r, Rect::new(11.0, 22.0, 3.0, 4.0));
    }
}
