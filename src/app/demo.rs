use crate::core::facade::RailwayAdapterFacade;
use crate::domain::model::{RailwayComparison, RailwayInfo};
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use crate::utils::error::Result;
use crate::{EuropeanToWideGaugeAdapter, WideToEuropeanGaugeAdapter};
use std::fmt;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Text rendering of a [`RailwayComparison`].
pub struct ComparisonView<'a>(pub &'a RailwayComparison);

impl fmt::Display for ComparisonView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        writeln!(f, "=== Railway gauge comparison ===")?;
        writeln!(f)?;
        write_section(f, "European gauge:", &comparison.european_railway)?;
        writeln!(f)?;
        write_section(f, "Wide gauge:", &comparison.wide_gauge_railway)?;
        writeln!(f)?;
        write_section(
            f,
            "Adapted European gauge (as wide gauge):",
            &comparison.adapted_european_as_wide,
        )?;
        writeln!(f)?;
        write_section(
            f,
            "Adapted wide gauge (as European gauge):",
            &comparison.adapted_wide_as_european,
        )
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, info: &RailwayInfo) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "  Width: {} mm", info.width)?;
    writeln!(f, "  Standard: {}", info.standard)?;
    writeln!(f, "  Description: {}", info.description)
}

pub fn render_european_to_wide<E: EuropeanRailway>(european: E) -> String {
    let original_width = european.european_gauge_width();
    let adapter = EuropeanToWideGaugeAdapter::new(european);

    format!(
        "1. Adapter: European -> Wide gauge\n{RULE}\n\
         Original European width: {} mm\n\
         Adapted width: {} mm\n\
         Standard: {}\n",
        original_width,
        adapter.wide_gauge_width(),
        adapter.wide_gauge_standard(),
    )
}

pub fn render_wide_to_european<W: WideGaugeRailway>(wide_gauge: W) -> String {
    let original_width = wide_gauge.wide_gauge_width();
    let adapter = WideToEuropeanGaugeAdapter::new(wide_gauge);

    format!(
        "2. Adapter: Wide gauge -> European\n{RULE}\n\
         Original wide-gauge width: {} mm\n\
         Adapted width: {} mm\n\
         Standard: {}\n",
        original_width,
        adapter.european_gauge_width(),
        adapter.european_standard(),
    )
}

/// Full demonstration output for `facade` in the requested format.
pub fn render(facade: &RailwayAdapterFacade, format: OutputFormat) -> Result<String> {
    let comparison = facade.comparison();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Text => Ok(format!(
            "{}\n=== Adapter demonstration ===\n\n{}\n{}",
            ComparisonView(&comparison),
            render_european_to_wide(facade.european_railway()),
            render_wide_to_european(facade.wide_gauge_railway()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::railways::{EuropeanTrack, WideGaugeTrack};

    #[test]
    fn test_comparison_view_lists_all_sections() {
        let comparison = RailwayAdapterFacade::with_default_tracks().comparison();
        let text = ComparisonView(&comparison).to_string();

        assert!(text.contains("European gauge:"));
        assert!(text.contains("Wide gauge:"));
        assert!(text.contains("Adapted European gauge (as wide gauge):"));
        assert!(text.contains("Adapted wide gauge (as European gauge):"));
        assert_eq!(text.matches("  Width: 1435 mm").count(), 2);
        assert_eq!(text.matches("  Width: 1676 mm").count(), 2);
    }

    #[test]
    fn test_adapter_demonstrations() {
        let text = render_european_to_wide(EuropeanTrack::new());
        assert!(text.contains("Original European width: 1435 mm"));
        assert!(text.contains("Adapted width: 1676 mm"));

        let text = render_wide_to_european(WideGaugeTrack::new());
        assert!(text.contains("Original wide-gauge width: 1676 mm"));
        assert!(text.contains("Adapted width: 1435 mm"));
        assert!(text.contains("Standard: Adapted Russian Standard to the European system"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let facade = RailwayAdapterFacade::with_default_tracks();
        let json = render(&facade, OutputFormat::Json).unwrap();
        let parsed: RailwayComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, facade.comparison());
    }

    #[test]
    fn test_render_text_contains_demo() {
        let facade = RailwayAdapterFacade::with_default_tracks();
        let text = render(&facade, OutputFormat::Text).unwrap();
        assert!(text.starts_with("=== Railway gauge comparison ==="));
        assert!(text.contains("=== Adapter demonstration ==="));
        assert!(text.contains("1. Adapter: European -> Wide gauge"));
        assert!(text.contains("2. Adapter: Wide gauge -> European"));
    }
}
