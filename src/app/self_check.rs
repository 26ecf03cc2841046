//! Self-check suite behind `gauge-adapter --test`.
//!
//! Each check is evaluated against the compiled-in tracks and reported as
//! `✓ PASSED` or `✗ FAILED`. A failed check never aborts the run.

use crate::adapters::{is_adapted, EuropeanToWideGaugeAdapter, WideToEuropeanGaugeAdapter};
use crate::core::converter::{GaugeConverter, GAUGE_CONVERSION_DIFFERENCE};
use crate::core::facade::RailwayAdapterFacade;
use crate::core::railways::{EuropeanTrack, WideGaugeTrack};
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use crate::utils::error::GaugeError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub group: &'static str,
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct SelfCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SelfCheckReport {
    fn record(&mut self, group: &'static str, name: &'static str, passed: bool, detail: String) {
        if passed {
            tracing::debug!("check passed: {} / {}", group, name);
        } else {
            tracing::warn!("check failed: {} / {} ({})", group, name, detail);
        }
        self.outcomes.push(CheckOutcome {
            group,
            name,
            passed,
            detail,
        });
    }

    fn expect_width(&mut self, group: &'static str, name: &'static str, expected: i32, actual: i32) {
        self.record(
            group,
            name,
            expected == actual,
            format!("expected {} mm, got {} mm", expected, actual),
        );
    }

    fn expect_invalid_argument<T>(
        &mut self,
        group: &'static str,
        name: &'static str,
        result: crate::Result<T>,
    ) {
        let (passed, detail) = match result {
            Err(GaugeError::InvalidArgument { parameter }) => {
                (true, format!("InvalidArgument raised for `{}`", parameter))
            }
            Err(other) => (false, format!("unexpected error: {}", other)),
            Ok(_) => (false, "expected InvalidArgument, construction succeeded".to_string()),
        };
        self.record(group, name, passed, detail);
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for SelfCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Railway adapter self-check ===")?;

        let mut current_group = None;
        for outcome in &self.outcomes {
            if current_group != Some(outcome.group) {
                writeln!(f)?;
                writeln!(f, "--- {} ---", outcome.group)?;
                current_group = Some(outcome.group);
            }
            let mark = if outcome.passed {
                "✓ PASSED"
            } else {
                "✗ FAILED"
            };
            writeln!(f, "  {}: {} ({})", outcome.name, mark, outcome.detail)?;
        }

        writeln!(f)?;
        write!(
            f,
            "=== {} passed, {} failed ===",
            self.passed(),
            self.failed()
        )
    }
}

pub fn run_all() -> SelfCheckReport {
    let mut report = SelfCheckReport::default();
    check_european_to_wide(&mut report);
    check_wide_to_european(&mut report);
    check_converter(&mut report);
    check_facade(&mut report);
    check_validation(&mut report);
    tracing::info!(
        "Self-check finished: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    report
}

fn check_european_to_wide(report: &mut SelfCheckReport) {
    const GROUP: &str = "EuropeanToWideGaugeAdapter";
    let adapter = EuropeanToWideGaugeAdapter::new(EuropeanTrack::new());

    report.expect_width(GROUP, "width conversion", 1676, adapter.wide_gauge_width());

    let standard = adapter.wide_gauge_standard();
    report.record(GROUP, "adapted standard", is_adapted(&standard), standard.into_owned());

    let description = adapter.wide_gauge_description();
    report.record(
        GROUP,
        "adapted description",
        is_adapted(&description),
        description.into_owned(),
    );
}

fn check_wide_to_european(report: &mut SelfCheckReport) {
    const GROUP: &str = "WideToEuropeanGaugeAdapter";
    let adapter = WideToEuropeanGaugeAdapter::new(WideGaugeTrack::new());

    report.expect_width(GROUP, "width conversion", 1435, adapter.european_gauge_width());

    let standard = adapter.european_standard();
    report.record(GROUP, "adapted standard", is_adapted(&standard), standard.into_owned());

    let description = adapter.european_description();
    report.record(
        GROUP,
        "adapted description",
        is_adapted(&description),
        description.into_owned(),
    );
}

fn check_converter(report: &mut SelfCheckReport) {
    const GROUP: &str = "GaugeConverter";

    report.expect_width(GROUP, "to_wide(1435)", 1676, GaugeConverter::to_wide(1435));
    report.expect_width(GROUP, "to_european(1676)", 1435, GaugeConverter::to_european(1676));
    report.expect_width(GROUP, "to_european(100) clamps", 0, GaugeConverter::to_european(100));
    report.expect_width(GROUP, "conversion difference", 241, GAUGE_CONVERSION_DIFFERENCE);
}

fn check_facade(report: &mut SelfCheckReport) {
    const GROUP: &str = "RailwayAdapterFacade";
    let facade = RailwayAdapterFacade::with_default_tracks();

    report.expect_width(
        GROUP,
        "original European railway",
        1435,
        facade.european_railway().european_gauge_width(),
    );
    report.expect_width(
        GROUP,
        "original wide-gauge railway",
        1676,
        facade.wide_gauge_railway().wide_gauge_width(),
    );
    report.expect_width(
        GROUP,
        "European as wide gauge",
        1676,
        facade.european_as_wide_gauge().wide_gauge_width(),
    );
    report.expect_width(
        GROUP,
        "wide gauge as European",
        1435,
        facade.wide_gauge_as_european().european_gauge_width(),
    );

    let widths = facade.comparison().widths();
    report.record(
        GROUP,
        "comparison",
        widths == [1435, 1676, 1676, 1435],
        format!("widths {:?}", widths),
    );
}

fn check_validation(report: &mut SelfCheckReport) {
    const GROUP: &str = "Validation";

    report.expect_invalid_argument(
        GROUP,
        "EuropeanToWideGaugeAdapter without railway",
        EuropeanToWideGaugeAdapter::<EuropeanTrack>::try_new(None),
    );
    report.expect_invalid_argument(
        GROUP,
        "WideToEuropeanGaugeAdapter without railway",
        WideToEuropeanGaugeAdapter::<WideGaugeTrack>::try_new(None),
    );
    report.expect_invalid_argument(
        GROUP,
        "RailwayAdapterFacade without railways",
        RailwayAdapterFacade::try_new(None, None),
    );
}
