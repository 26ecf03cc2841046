//! Concrete railways backed by the compiled-in gauge profiles.

use crate::domain::model::RailwayProfile;
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuropeanTrack {
    profile: RailwayProfile,
}

impl EuropeanTrack {
    pub const fn new() -> Self {
        Self {
            profile: RailwayProfile::EUROPEAN,
        }
    }

    pub fn profile(&self) -> RailwayProfile {
        self.profile
    }
}

impl Default for EuropeanTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl EuropeanRailway for EuropeanTrack {
    fn european_gauge_width(&self) -> i32 {
        self.profile.width
    }

    fn european_standard(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.profile.standard)
    }

    fn european_description(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.profile.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideGaugeTrack {
    profile: RailwayProfile,
}

impl WideGaugeTrack {
    pub const fn new() -> Self {
        Self {
            profile: RailwayProfile::WIDE,
        }
    }

    pub fn profile(&self) -> RailwayProfile {
        self.profile
    }
}

impl Default for WideGaugeTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl WideGaugeRailway for WideGaugeTrack {
    fn wide_gauge_width(&self) -> i32 {
        self.profile.width
    }

    fn wide_gauge_standard(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.profile.standard)
    }

    fn wide_gauge_description(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.profile.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_european_track_values() {
        let track = EuropeanTrack::new();
        assert_eq!(track.european_gauge_width(), 1435);
        assert_eq!(
            track.european_standard(),
            "UIC (Union Internationale des Chemins de fer)"
        );
        assert_eq!(
            track.european_description(),
            "standard-gauge European railway."
        );
    }

    #[test]
    fn test_wide_gauge_track_values() {
        let track = WideGaugeTrack::default();
        assert_eq!(track.wide_gauge_width(), 1676);
        assert_eq!(track.wide_gauge_standard(), "Russian Standard");
        assert_eq!(
            track.wide_gauge_description(),
            "wide-gauge railway for heavy freight."
        );
        assert_eq!(track.profile(), RailwayProfile::WIDE);
    }
}
