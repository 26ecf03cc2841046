use crate::core::converter::GaugeConverter;
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use crate::utils::error::Result;
use crate::utils::validation::require;
use std::borrow::Cow;

/// Presents a European railway as a wide-gauge one.
///
/// Nothing is cached: every accessor reads the wrapped railway again.
#[derive(Debug, Clone)]
pub struct EuropeanToWideGaugeAdapter<E> {
    european: E,
}

impl<E: EuropeanRailway> EuropeanToWideGaugeAdapter<E> {
    pub fn new(european: E) -> Self {
        tracing::debug!("Adapting European railway to the wide-gauge system");
        Self { european }
    }

    /// Fails with `InvalidArgument` when no railway is supplied.
    pub fn try_new(european: Option<E>) -> Result<Self> {
        let european = require("european_railway", european)?;
        Ok(Self::new(european))
    }

    pub fn inner(&self) -> &E {
        &self.european
    }
}

impl<E: EuropeanRailway> WideGaugeRailway for EuropeanToWideGaugeAdapter<E> {
    fn wide_gauge_width(&self) -> i32 {
        GaugeConverter::to_wide(self.european.european_gauge_width())
    }

    fn wide_gauge_standard(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "Adapted {} to the wide-gauge system",
            self.european.european_standard()
        ))
    }

    fn wide_gauge_description(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} (adapted for the wide-gauge system)",
            self.european.european_description()
        ))
    }
}
