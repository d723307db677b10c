use super::Layout;
use crate::config::Sheet;
use crate::model::{Placement, Rect, Sprite};

/// MAXRECTS with Best Short Side Fit scoring, after Jylänki's "A Thousand
/// Ways to Pack the Bin". Free space is kept as a list of maximal,
/// possibly-overlapping rectangles; placing a sprite splits every free rect
/// it intersects and dominated leftovers are pruned.
pub struct MaxRectsLayout {
    sheet: Sheet,
    free: Vec<Rect>,
    used: Vec<Rect>,
}

impl MaxRectsLayout {
    pub fn new(sheet: Sheet) -> Self {
        let free = vec![Rect::new(0, 0, sheet.width(), sheet.height())];
        Self {
            sheet,
            free,
            used: Vec::new(),
        }
    }

    /// Current free-space rectangles (maximal, may overlap each other).
    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// Rects committed so far.
    pub fn used_rects(&self) -> &[Rect] {
        &self.used
    }

    /// Best position for a `w` x `h` sprite over the free list, scored by
    /// (short side fit, long side fit), lexicographically smaller is better.
    /// The returned rect carries the post-rotation dimensions.
    fn search(&self, w: u32, h: u32) -> Option<(Rect, u32, u32, bool)> {
        let mut best: Option<(Rect, u32, u32, bool)> = None;

        for free in &self.free {
            if free.w >= w && free.h >= h {
                let (dx, dy) = (free.w - w, free.h - h);
                let (ssf, lsf) = (dx.min(dy), dx.max(dy));
                if best.map_or(true, |(_, bs, bl, _)| (ssf, lsf) < (bs, bl)) {
                    best = Some((Rect::new(free.x, free.y, w, h), ssf, lsf, false));
                }
            }
            if self.sheet.allow_rotation() && free.w >= h && free.h >= w {
                let (dx, dy) = (free.w - h, free.h - w);
                let (ssf, lsf) = (dx.min(dy), dx.max(dy));
                if best.map_or(true, |(_, bs, bl, _)| (ssf, lsf) < (bs, bl)) {
                    best = Some((Rect::new(free.x, free.y, h, w), ssf, lsf, true));
                }
            }
        }

        best
    }

    /// Emit the maximal leftovers of `free` around `used` (up to four
    /// slivers: above, below, left, right).
    fn split(free: &Rect, used: &Rect, out: &mut Vec<Rect>) {
        if used.x < free.right() && used.right() > free.x {
            if used.y > free.y && used.y < free.bottom() {
                out.push(Rect::new(free.x, free.y, free.w, used.y - free.y));
            }
            if used.bottom() < free.bottom() {
                out.push(Rect::new(
                    free.x,
                    used.bottom(),
                    free.w,
                    free.bottom() - used.bottom(),
                ));
            }
        }
        if used.y < free.bottom() && used.bottom() > free.y {
            if used.x > free.x && used.x < free.right() {
                out.push(Rect::new(free.x, free.y, used.x - free.x, free.h));
            }
            if used.right() < free.right() {
                out.push(Rect::new(
                    used.right(),
                    free.y,
                    free.right() - used.right(),
                    free.h,
                ));
            }
        }
    }

    /// Dominance pruning: drop every free rect contained in another. Keeps
    /// exactly one copy of value-identical pairs.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free.len() {
            let a = self.free[i];
            let mut remove_i = false;
            let mut j = i + 1;
            while j < self.free.len() {
                let b = self.free[j];
                if b.contains(&a) {
                    remove_i = true;
                    break;
                }
                if a.contains(&b) {
                    self.free.remove(j);
                    continue;
                }
                j += 1;
            }
            if remove_i {
                self.free.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

impl Layout for MaxRectsLayout {
    fn clear(&mut self) {
        self.free.clear();
        self.free
            .push(Rect::new(0, 0, self.sheet.width(), self.sheet.height()));
        self.used.clear();
    }

    fn get_best(&self, sprites: &[Sprite]) -> Option<Placement> {
        let mut best: Option<((u32, u32), Placement)> = None;

        for (i, spr) in sprites.iter().enumerate() {
            let Some((pos, ssf, lsf, flip)) = self.search(spr.rect.w, spr.rect.h) else {
                continue;
            };
            if !self.sheet.check(&pos) {
                continue;
            }
            if best.map_or(true, |(bs, _)| (ssf, lsf) < bs) {
                best = Some((
                    (ssf, lsf),
                    Placement {
                        index: i,
                        x: pos.x,
                        y: pos.y,
                        rotated: spr.rotated ^ flip,
                    },
                ));
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
        let target = Rect::new(placement.x, placement.y, w, h);
        if !self.sheet.check(&target) {
            return false;
        }

        if placement.rotated != sprite.rotated {
            sprite.rotate();
        }
        sprite.rect.x = target.x;
        sprite.rect.y = target.y;

        let mut slivers: Vec<Rect> = Vec::new();
        let mut i = 0;
        while i < self.free.len() {
            let free = self.free[i];
            if free.intersects(&target) {
                self.free.swap_remove(i);
                Self::split(&free, &target, &mut slivers);
            } else {
                i += 1;
            }
        }
        self.free.extend(slivers);
        self.prune();

        self.used.push(target);
        true
    }
}
