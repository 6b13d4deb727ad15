//! Visual filter parameters for image layers.
//!
//! Image layers carry five independent adjustments, each driven by its own
//! slider in the editor:
//!
//! | Filter     | Unit     | Default bounds | Neutral |
//! |------------|----------|----------------|---------|
//! | brightness | percent  | 0 to 200       | 100     |
//! | contrast   | percent  | 0 to 200       | 100     |
//! | saturation | percent  | 0 to 200       | 100     |
//! | hue        | degrees  | 0 to 360       | 0       |
//! | sepia      | percent  | 0 to 100       | 0       |
//!
//! Bounds are configuration supplied by the UI (see [`crate::config`]) and are
//! enforced here before any value reaches the layer model.

use serde::{Deserialize, Serialize};

/// One of the five filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Brightness,
    Contrast,
    Saturation,
    Hue,
    Sepia,
}

impl FilterKind {
    /// All filter dimensions in application order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Saturation,
        FilterKind::Hue,
        FilterKind::Sepia,
    ];

    /// Attribute name as it appears on a serialized layer.
    pub fn attribute(self) -> &'static str {
        match self {
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Saturation => "saturation",
            FilterKind::Hue => "hue",
            FilterKind::Sepia => "sepia",
        }
    }

    /// Value at which the filter leaves the image unchanged.
    pub fn neutral(self) -> f64 {
        match self {
            FilterKind::Brightness | FilterKind::Contrast | FilterKind::Saturation => 100.0,
            FilterKind::Hue | FilterKind::Sepia => 0.0,
        }
    }
}

/// Inclusive numeric range of a slider control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub min: f64,
    pub max: f64,
}

impl FilterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether the range is well-formed (finite and `min <= max`).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Clamp `value` into the range. NaN yields `fallback`.
    #[inline]
    pub fn clamp(&self, value: f64, fallback: f64) -> f64 {
        if value.is_nan() {
            return fallback.clamp(self.min, self.max);
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Bounds for every filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterBounds {
    pub brightness: FilterRange,
    pub contrast: FilterRange,
    pub saturation: FilterRange,
    pub hue: FilterRange,
    pub sepia: FilterRange,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            brightness: FilterRange::new(0.0, 200.0),
            contrast: FilterRange::new(0.0, 200.0),
            saturation: FilterRange::new(0.0, 200.0),
            hue: FilterRange::new(0.0, 360.0),
            sepia: FilterRange::new(0.0, 100.0),
        }
    }
}

impl FilterBounds {
    pub fn range(&self, kind: FilterKind) -> FilterRange {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturation => self.saturation,
            FilterKind::Hue => self.hue,
            FilterKind::Sepia => self.sepia,
        }
    }

    /// Clamp a raw slider value for the given dimension.
    pub fn clamp(&self, kind: FilterKind, value: f64) -> f64 {
        self.range(kind).clamp(value, kind.neutral())
    }
}

/// The five filter parameter values of an image layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterValues {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub hue: f64,
    pub sepia: f64,
}

impl Default for FilterValues {
    fn default() -> Self {
        Self {
            brightness: FilterKind::Brightness.neutral(),
            contrast: FilterKind::Contrast.neutral(),
            saturation: FilterKind::Saturation.neutral(),
            hue: FilterKind::Hue.neutral(),
            sepia: FilterKind::Sepia.neutral(),
        }
    }
}

impl FilterValues {
    pub fn get(&self, kind: FilterKind) -> f64 {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturation => self.saturation,
            FilterKind::Hue => self.hue,
            FilterKind::Sepia => self.sepia,
        }
    }

    pub fn set(&mut self, kind: FilterKind, value: f64) {
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Contrast => self.contrast = value,
            FilterKind::Saturation => self.saturation = value,
            FilterKind::Hue => self.hue = value,
            FilterKind::Sepia => self.sepia = value,
        }
    }

    /// Check if all values are neutral
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Render the values as a CSS `filter` declaration for the live preview.
    ///
    /// ```text
    /// brightness(150%) contrast(100%) saturate(100%) hue-rotate(0deg) sepia(0%)
    /// ```
    pub fn css_filter(&self) -> String {
        format!(
            "brightness({}%) contrast({}%) saturate({}%) hue-rotate({}deg) sepia({}%)",
            self.brightness, self.contrast, self.saturation, self.hue, self.sepia
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
