use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in top-left-origin pixel space.
///
/// Planner pages are rendered at 1 px = 1 pt, so the only conversion needed
/// when writing a PDF `/Rect` is flipping the y axis against the page height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `[llx, lly, urx, ury]` in PDF user space for a page of the given height.
    pub fn to_pdf_rect(&self, page_height: f32) -> [f32; 4] {
        [
            self.x,
            page_height - self.bottom(),
            self.right(),
            page_height - self.y,
        ]
    }

    /// Builds a top-left-origin rectangle from a PDF `/Rect` array.
    /// The corners may be given in any order.
    pub fn from_pdf_rect(rect: [f32; 4], page_height: f32) -> Self {
        let (x0, x1) = (rect[0].min(rect[2]), rect[0].max(rect[2]));
        let (y0, y1) = (rect[1].min(rect[3]), rect[1].max(rect[3]));
        Self {
            x: x0,
            y: page_height - y1,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}
