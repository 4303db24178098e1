//! Rectangles and the clip filter
//!
//! All coordinates are unsigned logical pixels. A coordinate that underflowed
//! in the caller (e.g. `-1` cast to `u16`) simply lands far outside any clip
//! rectangle and gets discarded.

/// Drawing request: origin plus extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// Left edge
    pub x: u16,
    /// Top edge
    pub y: u16,
    /// Width in pixels
    pub cx: u16,
    /// Height in pixels
    pub cy: u16,
}

impl Rect {
    /// Create a rectangle from origin and extent
    pub const fn new(x: u16, y: u16, cx: u16, cy: u16) -> Self {
        Self { x, y, cx, cy }
    }

    /// Single pixel at (x, y)
    pub const fn pixel(x: u16, y: u16) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Number of pixels covered
    ///
    /// Counted in `u32`: a full 240x320 frame already exceeds `u16`.
    pub const fn pixel_count(&self) -> u32 {
        self.cx as u32 * self.cy as u32
    }

    /// Check for zero width or height
    pub const fn is_empty(&self) -> bool {
        self.cx == 0 || self.cy == 0
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x as u32 + self.cx as u32
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.cy as u32
    }
}

/// Active clip rectangle, half-open: `[x0, x1) x [y0, y1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClipRect {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl ClipRect {
    /// Clip covering the whole screen
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width,
            y1: height,
        }
    }

    /// Clip for `rect` restricted to a `width` x `height` screen
    ///
    /// A rectangle entirely off-screen yields an empty clip.
    pub fn bounded(rect: Rect, width: u16, height: u16) -> Self {
        let x0 = rect.x.min(width);
        let y0 = rect.y.min(height);
        Self {
            x0,
            y0,
            x1: rect.right().min(width as u32) as u16,
            y1: rect.bottom().min(height as u32) as u16,
        }
    }

    /// True when nothing can be drawn
    pub const fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Clip width in pixels
    pub const fn width(&self) -> u16 {
        self.x1.saturating_sub(self.x0)
    }

    /// Clip height in pixels
    pub const fn height(&self) -> u16 {
        self.y1.saturating_sub(self.y0)
    }

    /// Check whether a non-empty `rect` lies entirely inside the clip
    pub fn contains(&self, rect: &Rect) -> bool {
        !rect.is_empty()
            && rect.x >= self.x0
            && rect.y >= self.y0
            && rect.right() <= self.x1 as u32
            && rect.bottom() <= self.y1 as u32
    }

    /// Intersect a drawing request with the clip
    ///
    /// Returns `None` when nothing of the request is visible. The single-pixel
    /// path goes through here too, as a 1x1 request.
    pub fn filter(&self, rect: Rect) -> Option<Rect> {
        let (mut x, mut y) = (rect.x as u32, rect.y as u32);
        let (mut cx, mut cy) = (rect.cx as u32, rect.cy as u32);
        let (x0, y0) = (self.x0 as u32, self.y0 as u32);
        let (x1, y1) = (self.x1 as u32, self.y1 as u32);

        // Advance the origin to the clip edge, eating into the extent
        if x < x0 {
            cx = cx.saturating_sub(x0 - x);
            x = x0;
        }
        if y < y0 {
            cy = cy.saturating_sub(y0 - y);
            y = y0;
        }

        if cx == 0 || cy == 0 || x >= x1 || y >= y1 {
            return None;
        }

        // Trim the far edges
        if x + cx > x1 {
            cx = x1 - x;
        }
        if y + cy > y1 {
            cy = y1 - y;
        }

        Some(Rect::new(x as u16, y as u16, cx as u16, cy as u16))
    }
}
