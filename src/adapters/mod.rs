// Adapters layer: each adapter wraps one railway and exposes it through the other capability set.

pub mod european_to_wide;
pub mod wide_to_european;

pub use european_to_wide::EuropeanToWideGaugeAdapter;
pub use wide_to_european::WideToEuropeanGaugeAdapter;

/// Marker carried by every adapted standard and description.
pub const ADAPTED_MARKER: &str = "adapted";

/// Case-insensitive check for [`ADAPTED_MARKER`].
pub fn is_adapted(text: &str) -> bool {
    text.to_lowercase().contains(ADAPTED_MARKER)
}
