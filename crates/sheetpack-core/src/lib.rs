//! Core layout engine for sprite sheet packing.
//!
//! Implements selected versions of the Shelf and MaxRects algorithms from
//! Jylänki's "A Thousand Ways to Pack the Bin", plus a transposed Shelf
//! variant called Stack. A Skyline slot is reserved for a future strategy.
//!
//! The engine decides which sprites fit a fixed-size sheet, assigns each a
//! position, optionally rotating it 90°, and reports which inputs were
//! placed and which remain. Image work, trimming and metadata export belong
//! to the caller.
//!
//! Quick example:
//! ```
//! use sheetpack_core::prelude::*;
//!
//! let cfg = SheetConfig::builder()
//!     .with_max_dimensions(256, 256)
//!     .allow_rotation(true)
//!     .build();
//! let mut layout = get_layout("max-rects", Sheet::new(cfg)).unwrap();
//! let out = layout
//!     .add(vec![Sprite::new(64, 32), Sprite::new(48, 48)])
//!     .unwrap();
//! assert_eq!(out.placed.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod model;

pub use config::*;
pub use error::*;
pub use layout::*;
pub use model::*;

/// Convenience prelude for common types and functions.
/// Importing `sheetpack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{LayoutKind, Sheet, SheetConfig, SheetConfigBuilder};
    pub use crate::error::{LayoutError, Result};
    pub use crate::layout::{
        get_layout, layout, Layout, MaxRectsLayout, ShelfLayout, SkylineLayout, StackLayout,
    };
    pub use crate::model::{PackOutput, Placement, Rect, Sprite};
}
