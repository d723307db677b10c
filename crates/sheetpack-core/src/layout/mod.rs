use crate::config::{LayoutKind, Sheet};
use crate::error::{LayoutError, Result};
use crate::model::{PackOutput, Placement, Sprite};
use tracing::{debug, trace};

pub mod maxrects;
pub mod shelf;
pub mod skyline;
pub mod stack;

pub use maxrects::MaxRectsLayout;
pub use shelf::ShelfLayout;
pub use skyline::SkylineLayout;
pub use stack::StackLayout;

/// A layout places sprites into a fixed-size sheet.
///
/// Implementations own their free-space bookkeeping and must keep placements
/// disjoint and inside the sheet. `get_best` is a pure query; `place` commits
/// a candidate; `add` drives the two in a loop until nothing else fits.
pub trait Layout {
    /// Reset all bookkeeping to the empty sheet.
    fn clear(&mut self);

    /// Pick the best next placement among `sprites`, or `None` when no
    /// remaining sprite can be placed.
    ///
    /// Must not mutate the layout or the sprites. The returned `rotated`
    /// flag is the absolute orientation the placement requires; ties in
    /// scoring resolve to the earliest sprite.
    fn get_best(&self, sprites: &[Sprite]) -> Option<Placement>;

    /// Commit a placement, assigning the sprite's position and orientation.
    ///
    /// Returns false when the sheet rejects the target rect; the sprite is
    /// left untouched in that case.
    fn place(&mut self, sprite: &mut Sprite, placement: &Placement) -> bool;

    /// Place as many sprites as possible, best candidate first.
    ///
    /// Ends when no remaining sprite fits or a chosen placement fails
    /// validation. Both returned sequences preserve the input order.
    fn add(&mut self, sprites: Vec<Sprite>) -> Result<PackOutput> {
        let mut remaining = sprites;
        let mut order: Vec<usize> = (0..remaining.len()).collect();
        let mut placed: Vec<(usize, Sprite)> = Vec::new();

        while !remaining.is_empty() {
            let Some(best) = self.get_best(&remaining) else {
                break;
            };
            if !self.place(&mut remaining[best.index], &best) {
                break;
            }
            trace!(
                x = best.x,
                y = best.y,
                rotated = best.rotated,
                "placed sprite"
            );
            placed.push((order.remove(best.index), remaining.remove(best.index)));
        }

        debug!(
            placed = placed.len(),
            remaining = remaining.len(),
            "layout run complete"
        );

        placed.sort_by_key(|&(i, _)| i);
        Ok(PackOutput {
            placed: placed.into_iter().map(|(_, s)| s).collect(),
            remaining,
        })
    }
}

/// Construct the layout for `kind` over `sheet`.
pub fn layout(kind: LayoutKind, sheet: Sheet) -> Box<dyn Layout> {
    match kind {
        LayoutKind::Shelf => Box::new(ShelfLayout::new(sheet)),
        LayoutKind::Stack => Box::new(StackLayout::new(sheet)),
        LayoutKind::MaxRects => Box::new(MaxRectsLayout::new(sheet)),
        LayoutKind::Skyline => Box::new(SkylineLayout::new(sheet)),
    }
}

/// Resolve a layout by name: `shelf`, `stack`, `max-rects` or `skyline`.
pub fn get_layout(name: &str, sheet: Sheet) -> Result<Box<dyn Layout>> {
    let kind = name
        .parse::<LayoutKind>()
        .map_err(|_| LayoutError::UnknownLayout(name.to_string()))?;
    Ok(layout(kind, sheet))
}
