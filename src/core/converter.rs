use crate::domain::model::RailwayProfile;

/// Offset between wide and European gauge, in millimetres (1676 - 1435).
pub const GAUGE_CONVERSION_DIFFERENCE: i32 =
    RailwayProfile::WIDE.width - RailwayProfile::EUROPEAN.width;

/// Width conversion shared by both adapters.
///
/// Forward conversion is plain addition of [`GAUGE_CONVERSION_DIFFERENCE`].
/// Reverse conversion never yields a negative width: every input at or
/// below the offset converts to `0`. Both directions saturate at the `i32`
/// bounds instead of overflowing.
pub struct GaugeConverter;

impl GaugeConverter {
    pub const fn to_wide(european_width: i32) -> i32 {
        european_width.saturating_add(GAUGE_CONVERSION_DIFFERENCE)
    }

    pub const fn to_european(wide_width: i32) -> i32 {
        let result = wide_width.saturating_sub(GAUGE_CONVERSION_DIFFERENCE);
        if result > 0 {
            result
        } else {
            0
        }
    }
}
