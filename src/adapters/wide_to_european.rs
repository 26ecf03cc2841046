use crate::core::converter::GaugeConverter;
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use crate::utils::error::Result;
use crate::utils::validation::require;
use std::borrow::Cow;

/// Presents a wide-gauge railway as a European one.
#[derive(Debug, Clone)]
pub struct WideToEuropeanGaugeAdapter<W> {
    wide_gauge: W,
}

impl<W: WideGaugeRailway> WideToEuropeanGaugeAdapter<W> {
    pub fn new(wide_gauge: W) -> Self {
        tracing::debug!("Adapting wide-gauge railway to the European system");
        Self { wide_gauge }
    }

    pub fn try_new(wide_gauge: Option<W>) -> Result<Self> {
        let wide_gauge = require("wide_gauge_railway", wide_gauge)?;
        Ok(Self::new(wide_gauge))
    }

    pub fn inner(&self) -> &W {
        &self.wide_gauge
    }
}

impl<W: WideGaugeRailway> EuropeanRailway for WideToEuropeanGaugeAdapter<W> {
    // Clamped at zero for narrow inputs.
    fn european_gauge_width(&self) -> i32 {
        GaugeConverter::to_european(self.wide_gauge.wide_gauge_width())
    }

    fn european_standard(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "Adapted {} to the European system",
            self.wide_gauge.wide_gauge_standard()
        ))
    }

    fn european_description(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} (adapted for the European system)",
            self.wide_gauge.wide_gauge_description()
        ))
    }
}
