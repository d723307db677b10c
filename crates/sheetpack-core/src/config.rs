use crate::error::{LayoutError, Result};
use crate::model::Rect;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Layout strategy families.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Horizontal strips filled left to right.
    Shelf,
    /// Vertical strips filled top to bottom (transposed Shelf).
    Stack,
    /// MAXRECTS free-list with Best Short Side Fit scoring.
    MaxRects,
    /// Reserved; not implemented yet.
    Skyline,
}

impl FromStr for LayoutKind {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shelf" => Ok(Self::Shelf),
            "stack" => Ok(Self::Stack),
            "max-rects" | "maxrects" | "max_rects" => Ok(Self::MaxRects),
            "skyline" => Ok(Self::Skyline),
            _ => Err(()),
        }
    }
}

/// Sheet dimensions and rotation policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Maximum sheet width in pixels.
    pub max_width: u32,
    /// Maximum sheet height in pixels.
    pub max_height: u32,
    /// Allow 90° rotations for placements where beneficial.
    pub allow_rotation: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            max_width: 1024,
            max_height: 1024,
            allow_rotation: true,
        }
    }
}

impl SheetConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(LayoutError::InvalidDimensions {
                width: self.max_width,
                height: self.max_height,
            });
        }
        Ok(())
    }

    /// Create a fluent builder for `SheetConfig`.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::new()
    }
}

/// Builder for `SheetConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct SheetConfigBuilder {
    cfg: SheetConfig,
}

impl SheetConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: SheetConfig::default(),
        }
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.max_width = w;
        self.cfg.max_height = h;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn build(self) -> SheetConfig {
        self.cfg
    }
}

type Mask = Box<dyn Fn(&Rect) -> bool + Send + Sync>;

/// Immutable packing context consumed by layouts: the sheet configuration
/// plus an optional caller-supplied exclusion mask.
pub struct Sheet {
    config: SheetConfig,
    mask: Option<Mask>,
}

impl Sheet {
    pub fn new(config: SheetConfig) -> Self {
        Self { config, mask: None }
    }

    /// A sheet whose `check` additionally consults `mask`; placements the
    /// mask rejects are refused at commit time.
    pub fn with_mask<F>(config: SheetConfig, mask: F) -> Self
    where
        F: Fn(&Rect) -> bool + Send + Sync + 'static,
    {
        Self {
            config,
            mask: Some(Box::new(mask)),
        }
    }

    pub fn width(&self) -> u32 {
        self.config.max_width
    }

    pub fn height(&self) -> u32 {
        self.config.max_height
    }

    pub fn allow_rotation(&self) -> bool {
        self.config.allow_rotation
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Validates a placement: inside the sheet and accepted by the mask.
    pub fn check(&self, r: &Rect) -> bool {
        r.right() <= self.config.max_width
            && r.bottom() <= self.config.max_height
            && self.mask.as_ref().map_or(true, |m| m(r))
    }
}

impl From<SheetConfig> for Sheet {
    fn from(config: SheetConfig) -> Self {
        Self::new(config)
    }
}
