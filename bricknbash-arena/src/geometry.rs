//! Axis-aligned rectangles with top-left origin, y growing downward.
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// True if the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersects_raw(other.x, other.y, other.width, other.height)
    }

    /// [`Rect::intersects`] against a rectangle given by its fields.
    pub fn intersects_raw(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        if self.width <= 0 || self.height <= 0 || w <= 0 || h <= 0 {
            return false;
        }
        self.x < x + w && x < self.right() && self.y < y + h && y < self.bottom()
    }

    /// True if the rectangle lies fully inside `[0, width) x [0, height)`.
    pub fn is_inside(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }
}

/// True if `a` and `b` intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// True if `a` intersects the rectangle `(x, y, w, h)`.
pub fn intersects_raw(a: &Rect, x: i32, y: i32, w: i32, h: i32) -> bool {
    a.intersects_raw(x, y, w, h)
}

/// Euclidean distance between the centers of `a` and `b`.
pub fn center_distance(a: &Rect, b: &Rect) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    (bx - ax).hypot(by - ay)
}

/// True if `rect` intersects any of `others`.
pub fn intersects_any(rect: &Rect, others: &[Rect]) -> bool {
    others.iter().any(|o| o.intersects(rect))
}
