use crate::adapters::{EuropeanToWideGaugeAdapter, WideToEuropeanGaugeAdapter};
use crate::core::railways::{EuropeanTrack, WideGaugeTrack};
use crate::domain::model::{RailwayComparison, RailwayInfo};
use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
use crate::utils::error::Result;
use crate::utils::validation::require;
use std::sync::Arc;

/// Single entry point over one European and one wide-gauge railway.
///
/// The facade only returns data; rendering a [`RailwayComparison`] is left
/// to the caller. Adapters are built fresh on every request.
#[derive(Clone)]
pub struct RailwayAdapterFacade {
    european: Arc<dyn EuropeanRailway>,
    wide_gauge: Arc<dyn WideGaugeRailway>,
}

impl RailwayAdapterFacade {
    pub fn new(european: Arc<dyn EuropeanRailway>, wide_gauge: Arc<dyn WideGaugeRailway>) -> Self {
        Self {
            european,
            wide_gauge,
        }
    }

    /// Fails with `InvalidArgument` naming the first missing railway.
    pub fn try_new(
        european: Option<Arc<dyn EuropeanRailway>>,
        wide_gauge: Option<Arc<dyn WideGaugeRailway>>,
    ) -> Result<Self> {
        let european = require("european_railway", european)?;
        let wide_gauge = require("wide_gauge_railway", wide_gauge)?;
        Ok(Self::new(european, wide_gauge))
    }

    /// Facade over the two compiled-in tracks.
    pub fn with_default_tracks() -> Self {
        Self::new(
            Arc::new(EuropeanTrack::new()),
            Arc::new(WideGaugeTrack::new()),
        )
    }

    pub fn european_railway(&self) -> &Arc<dyn EuropeanRailway> {
        &self.european
    }

    pub fn wide_gauge_railway(&self) -> &Arc<dyn WideGaugeRailway> {
        &self.wide_gauge
    }

    pub fn european_as_wide_gauge(&self) -> EuropeanToWideGaugeAdapter<Arc<dyn EuropeanRailway>> {
        EuropeanToWideGaugeAdapter::new(Arc::clone(&self.european))
    }

    pub fn wide_gauge_as_european(&self) -> WideToEuropeanGaugeAdapter<Arc<dyn WideGaugeRailway>> {
        WideToEuropeanGaugeAdapter::new(Arc::clone(&self.wide_gauge))
    }

    pub fn comparison(&self) -> RailwayComparison {
        tracing::debug!("Assembling railway comparison");

        let comparison = RailwayComparison {
            european_railway: RailwayInfo::from_european(self.european.as_ref()),
            wide_gauge_railway: RailwayInfo::from_wide_gauge(self.wide_gauge.as_ref()),
            adapted_european_as_wide: RailwayInfo::from_wide_gauge(&self.european_as_wide_gauge()),
            adapted_wide_as_european: RailwayInfo::from_european(&self.wide_gauge_as_european()),
        };

        tracing::debug!("Comparison widths: {:?}", comparison.widths());
        comparison
    }
}

impl std::fmt::Debug for RailwayAdapterFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RailwayAdapterFacade")
            .field("european_width", &self.european.european_gauge_width())
            .field("wide_gauge_width", &self.wide_gauge.wide_gauge_width())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::is_adapted;
    use crate::utils::error::GaugeError;

    #[test]
    fn test_originals_are_returned_unchanged() {
        let european: Arc<dyn EuropeanRailway> = Arc::new(EuropeanTrack::new());
        let wide_gauge: Arc<dyn WideGaugeRailway> = Arc::new(WideGaugeTrack::new());
        let facade = RailwayAdapterFacade::new(Arc::clone(&european), Arc::clone(&wide_gauge));

        assert!(Arc::ptr_eq(facade.european_railway(), &european));
        assert!(Arc::ptr_eq(facade.wide_gauge_railway(), &wide_gauge));
        assert_eq!(facade.european_railway().european_gauge_width(), 1435);
        assert_eq!(facade.wide_gauge_railway().wide_gauge_width(), 1676);
    }

    #[test]
    fn test_adapters_from_facade() {
        let facade = RailwayAdapterFacade::with_default_tracks();
        assert_eq!(facade.european_as_wide_gauge().wide_gauge_width(), 1676);
        assert_eq!(facade.wide_gauge_as_european().european_gauge_width(), 1435);
    }

    #[test]
    fn test_comparison_widths() {
        let comparison = RailwayAdapterFacade::with_default_tracks().comparison();
        assert_eq!(comparison.widths(), [1435, 1676, 1676, 1435]);
        assert!(is_adapted(&comparison.adapted_european_as_wide.standard));
        assert!(is_adapted(&comparison.adapted_wide_as_european.description));
        assert!(!is_adapted(&comparison.european_railway.standard));
    }

    #[test]
    fn test_try_new_reports_first_missing_railway() {
        let err = RailwayAdapterFacade::try_new(None, None).unwrap_err();
        assert!(matches!(
            err,
            GaugeError::InvalidArgument { ref parameter } if parameter == "european_railway"
        ));

        let european: Arc<dyn EuropeanRailway> = Arc::new(EuropeanTrack::new());
        let err = RailwayAdapterFacade::try_new(Some(european), None).unwrap_err();
        assert!(matches!(
            err,
            GaugeError::InvalidArgument { ref parameter } if parameter == "wide_gauge_railway"
        ));
    }
}
