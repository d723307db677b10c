use super::Layout;
use crate::config::Sheet;
use crate::error::{LayoutError, Result};
use crate::model::{PackOutput, Placement, Sprite};

/// Reserved skyline strategy. The interface is in place so a future
/// implementation is drop-in; until then `add` reports `Unimplemented` and
/// the queries are inert.
pub struct SkylineLayout {
    _sheet: Sheet,
}

impl SkylineLayout {
    pub fn new(sheet: Sheet) -> Self {
        Self { _sheet: sheet }
    }
}

impl Layout for SkylineLayout {
    fn clear(&mut self) {}

    fn get_best(&self, _sprites: &[Sprite]) -> Option<Placement> {
        None
    }

    fn place(&mut self, _sprite: &mut Sprite, _placement: &Placement) -> bool {
        false
    }

    fn add(&mut self, _sprites: Vec<Sprite>) -> Result<PackOutput> {
        Err(LayoutError::Unimplemented("skyline"))
    }
}
