use super::Layout;
use crate::config::Sheet;
use crate::model::{Placement, Rect, Sprite};

/// One horizontal strip. Placed rects share the baseline `start` and fill
/// left to right; `max` tracks the tallest rect on the strip.
#[derive(Debug, Clone)]
struct Shelf {
    start: u32,
    size: u32,
    max: u32,
    rects: Vec<Rect>,
}

impl Shelf {
    fn new(start: u32) -> Self {
        Self {
            start,
            size: 0,
            max: 0,
            rects: Vec::new(),
        }
    }

    fn push(&mut self, rect: Rect) {
        self.size += rect.w;
        if self.max < rect.h {
            self.max = rect.h;
        }
        self.rects.push(rect);
    }
}

/// Arranges sprites on progressively higher rows or "shelves". A sprite that
/// fits no existing shelf opens a new one on top of the tallest so far.
pub struct ShelfLayout {
    sheet: Sheet,
    size: u32,
    shelves: Vec<Shelf>,
}

impl ShelfLayout {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            size: 0,
            shelves: Vec::new(),
        }
    }

    /// Number of shelves opened so far.
    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    /// Baseline and contents (left to right) of shelf `i`, bottom to top.
    pub fn shelf(&self, i: usize) -> Option<(u32, &[Rect])> {
        self.shelves.get(i).map(|s| (s.start, s.rects.as_slice()))
    }

    /// Orientation a sprite takes on `shelf`: lay the long edge vertically
    /// when rotation is allowed and the shelf is tall enough for it.
    fn orient_on(&self, shelf: &Shelf, w: u32, h: u32) -> (u32, u32, bool) {
        if self.sheet.allow_rotation() && w > h && w <= shelf.max {
            (h, w, true)
        } else {
            (w, h, false)
        }
    }
}

impl Layout for ShelfLayout {
    fn clear(&mut self) {
        self.size = 0;
        self.shelves.clear();
    }

    fn get_best(&self, sprites: &[Sprite]) -> Option<Placement> {
        let (max_w, max_h) = (self.sheet.width(), self.sheet.height());
        let mut best: Option<(u32, Placement)> = None;

        for (i, spr) in sprites.iter().enumerate() {
            let (w, h) = (spr.rect.w, spr.rect.h);
            let fits_sheet = (w <= max_w && h <= max_h)
                || (self.sheet.allow_rotation() && h <= max_w && w <= max_h);
            if !fits_sheet {
                continue;
            }

            let mut fit: Option<(u32, Placement)> = None;
            for shelf in &self.shelves {
                let (cw, ch, flip) = self.orient_on(shelf, w, h);
                if shelf.size + cw <= max_w && ch <= shelf.max {
                    let score = (max_w - shelf.size - cw) * shelf.max + cw * (shelf.max - ch);
                    if fit.map_or(true, |(s, _)| score < s) {
                        fit = Some((
                            score,
                            Placement {
                                index: i,
                                x: shelf.size,
                                y: shelf.start,
                                rotated: spr.rotated ^ flip,
                            },
                        ));
                    }
                }
            }

            if fit.is_none() {
                // Hypothetical shelf on top of the ones created so far;
                // prefer the shorter edge as its height.
                let mut orients = [(w, h, false), (h, w, true)];
                if self.sheet.allow_rotation() && h > w {
                    orients.swap(0, 1);
                }
                for (cw, ch, flip) in orients {
                    if flip && !self.sheet.allow_rotation() {
                        continue;
                    }
                    if cw <= max_w && self.size + ch <= max_h {
                        let score = (max_w - cw) * ch;
                        fit = Some((
                            score,
                            Placement {
                                index: i,
                                x: 0,
                                y: self.size,
                                rotated: spr.rotated ^ flip,
                            },
                        ));
                        break;
                    }
                }
            }

            if let Some((score, placement)) = fit {
                if best.map_or(true, |(s, _)| score < s) {
                    best = Some((score, placement));
                }
            }
        }

        best.map(|(_, p)| p)
    }

    fn place(&mut self, sprite: &mut Sprite, placement: &Placement) -> bool {
        let (w, h) = if placement.rotated != sprite.rotated {
            (sprite.rect.h, sprite.rect.w)
        } else {
            (sprite.rect.w, sprite.rect.h)
        };

        // The placement's `y` identifies the shelf; starts are unique.
        let idx = self.shelves.iter().position(|s| s.start == placement.y);
        let x = idx.map_or(0, |i| self.shelves[i].size);
        let target = Rect::new(x, placement.y, w, h);
        if !self.sheet.check(&target) {
            return false;
        }

        if placement.rotated != sprite.rotated {
            sprite.rotate();
        }
        sprite.rect.x = target.x;
        sprite.rect.y = target.y;

        let idx = idx.unwrap_or_else(|| {
            self.shelves.push(Shelf::new(placement.y));
            self.shelves.len() - 1
        });
        let shelf = &mut self.shelves[idx];
        shelf.push(target);
        self.size = self.size.max(shelf.start + shelf.max);
        true
    }
}
