use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use serde::{Deserialize, Serialize};

/// Fixed description of a track gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailwayProfile {
    /// Gauge in millimetres.
    pub width: i32,
    pub standard: &'static str,
    pub description: &'static str,
}

impl RailwayProfile {
    pub const EUROPEAN: Self = Self {
        width: 1435,
        standard: "UIC (Union Internationale des Chemins de fer)",
        description: "standard-gauge European railway.",
    };

    pub const WIDE: Self = Self {
        width: 1676,
        standard: "Russian Standard",
        description: "wide-gauge railway for heavy freight.",
    };
}

/// One row of a [`RailwayComparison`], read through either capability set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayInfo {
    pub width: i32,
    pub standard: String,
    pub description: String,
}

impl RailwayInfo {
    pub fn from_european<R: EuropeanRailway + ?Sized>(railway: &R) -> Self {
        Self {
            width: railway.european_gauge_width(),
            standard: railway.european_standard().into_owned(),
            description: railway.european_description().into_owned(),
        }
    }

    pub fn from_wide_gauge<R: WideGaugeRailway + ?Sized>(railway: &R) -> Self {
        Self {
            width: railway.wide_gauge_width(),
            standard: railway.wide_gauge_standard().into_owned(),
            description: railway.wide_gauge_description().into_owned(),
        }
    }
}

/// Side-by-side view of both originals and both adapted forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayComparison {
    pub european_railway: RailwayInfo,
    pub wide_gauge_railway: RailwayInfo,
    pub adapted_european_as_wide: RailwayInfo,
    pub adapted_wide_as_european: RailwayInfo,
}

impl RailwayComparison {
    /// Widths in report order: European, wide, European-as-wide, wide-as-European.
    pub fn widths(&self) -> [i32; 4] {
        [
            self.european_railway.width,
            self.wide_gauge_railway.width,
            self.adapted_european_as_wide.width,
            self.adapted_wide_as_european.width,
        ]
    }
}
