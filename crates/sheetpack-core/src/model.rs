use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Returns true if `self` and `r` overlap with nonzero area.
    pub fn intersects(&self, r: &Rect) -> bool {
        self.x < r.right() && r.x < self.right() && self.y < r.bottom() && r.y < self.bottom()
    }

    /// Returns true if `r` is fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// A sprite to be placed: a rectangle carrying an orientation flag.
///
/// An unplaced sprite's `(x, y)` is meaningless until a layout commits a
/// placement for it. `w,h` always reflect the current orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprite {
    pub rect: Rect,
    /// True if the sprite is 90° rotated relative to its source orientation.
    pub rotated: bool,
}

impl Sprite {
    /// An unrotated sprite of the given size, positioned at the origin.
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            rect: Rect::new(0, 0, w, h),
            rotated: false,
        }
    }

    /// Rotate 90°: swap width and height, toggle the orientation flag.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.rect.w, &mut self.rect.h);
        self.rotated = !self.rotated;
    }
}

/// A candidate placement chosen by [`Layout::get_best`](crate::layout::Layout::get_best).
///
/// `index` points into the sprite slice that was queried. `rotated` is the
/// absolute orientation the placement requires; orientation is applied only
/// when the placement is committed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub rotated: bool,
}

/// Outcome of a driver run: sprites that were placed and sprites that did
/// not fit. Both sequences preserve the input's relative order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOutput {
    pub placed: Vec<Sprite>,
    pub remaining: Vec<Sprite>,
}
