//! Rect - Rectangle regions
//!
//! A `Rect` describes an axis-aligned region in the coordinate space of a
//! [`PixelBuffer`](crate::PixelBuffer). Coordinates are signed so that a
//! host can hand over raw drag geometry and let [`Rect::fits_within`]
//! reject it, rather than wrapping around on conversion.

/// A rectangle region
///
/// This is a simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle.
    ///
    /// No validation happens here; a rectangle is only checked against a
    /// buffer when it is used.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle covering an entire `width` x `height` buffer.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// The corners may be given in any order, so a drag that runs up or to
    /// the left still yields a non-negative width and height.
    ///
    /// A span wider than `i32::MAX` saturates.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let span = |a: i32, b: i32| i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX);
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            w: span(x1, x2),
            h: span(y1, y2),
        }
    }

    /// Return the rectangle shifted by `(dx, dy)`.
    ///
    /// Hosts use this to move a selection from screen space into buffer
    /// space by subtracting the canvas offset.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero or negative extent)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check whether this rectangle is non-empty and lies entirely inside a
    /// `width` x `height` buffer.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        !self.is_empty()
            && self.x >= 0
            && self.y >= 0
            && self.right() <= width as i64
            && self.bottom() <= height as i64
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }
}
