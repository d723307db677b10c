use super::Layout;
use crate::config::Sheet;
use crate::model::{Placement, Rect, Sprite};

/// One vertical strip. Placed rects share the left edge `start` and fill
/// top to bottom; `max` tracks the widest rect in the column.
#[derive(Debug, Clone)]
struct Stack {
    start: u32,
    size: u32,
    max: u32,
    rects: Vec<Rect>,
}

impl Stack {
    fn new(start: u32) -> Self {
        Self {
            start,
            size: 0,
            max: 0,
            rects: Vec::new(),
        }
    }

    fn push(&mut self, rect: Rect) {
        self.size += rect.h;
        if self.max < rect.w {
            self.max = rect.w;
        }
        self.rects.push(rect);
    }
}

/// Like [`ShelfLayout`](super::ShelfLayout), but arranges sprites in columns
/// growing from `x = 0` rightward.
pub struct StackLayout {
    sheet: Sheet,
    size: u32,
    stacks: Vec<Stack>,
}

impl StackLayout {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            size: 0,
            stacks: Vec::new(),
        }
    }

    /// Number of columns opened so far.
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Left edge and contents (top to bottom) of column `i`, left to right.
    pub fn stack(&self, i: usize) -> Option<(u32, &[Rect])> {
        self.stacks.get(i).map(|s| (s.start, s.rects.as_slice()))
    }

    /// Orientation a sprite takes in `stack`: lay the long edge horizontally
    /// when rotation is allowed and the column is wide enough for it.
    fn orient_in(&self, stack: &Stack, w: u32, h: u32) -> (u32, u32, bool) {
        if self.sheet.allow_rotation() && h > w && h <= stack.max {
            (h, w, true)
        } else {
            (w, h, false)
        }
    }
}

impl Layout for StackLayout {
    fn clear(&mut self) {
        self.size = 0;
        self.stacks.clear();
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
            for stack in &self.stacks {
                let (cw, ch, flip) = self.orient_in(stack, w, h);
                if stack.size + ch <= max_h && cw <= stack.max {
                    let score = (max_h - stack.size - ch) * stack.max + ch * (stack.max - cw);
                    if fit.map_or(true, |(s, _)| score < s) {
                        fit = Some((
                            score,
                            Placement {
                                index: i,
                                x: stack.start,
                                y: stack.size,
                                rotated: spr.rotated ^ flip,
                            },
                        ));
                    }
                }
            }

            if fit.is_none() {
                // Hypothetical column to the right of the ones created so
                // far; prefer the shorter edge as its width.
                let mut orients = [(w, h, false), (h, w, true)];
                if self.sheet.allow_rotation() && w > h {
                    orients.swap(0, 1);
                }
                for (cw, ch, flip) in orients {
                    if flip && !self.sheet.allow_rotation() {
                        continue;
                    }
                    if ch <= max_h && self.size + cw <= max_w {
                        let score = (max_h - ch) * cw;
                        fit = Some((
                            score,
                            Placement {
                                index: i,
                                x: self.size,
                                y: 0,
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

        // The placement's `x` identifies the column; starts are unique.
        let idx = self.stacks.iter().position(|s| s.start == placement.x);
        let y = idx.map_or(0, |i| self.stacks[i].size);
        let target = Rect::new(placement.x, y, w, h);
        if !self.sheet.check(&target) {
            return false;
        }

        if placement.rotated != sprite.rotated {
            sprite.rotate();
        }
        sprite.rect.x = target.x;
        sprite.rect.y = target.y;

        let idx = idx.unwrap_or_else(|| {
            self.stacks.push(Stack::new(placement.x));
            self.stacks.len() - 1
        });
        let stack = &mut self.stacks[idx];
        stack.push(target);
        self.size = self.size.max(stack.start + stack.max);
        true
    }
}
