pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, RunMode};

pub use crate::adapters::{EuropeanToWideGaugeAdapter, WideToEuropeanGaugeAdapter};
pub use crate::core::{
    converter::{GaugeConverter, GAUGE_CONVERSION_DIFFERENCE},
    facade::RailwayAdapterFacade,
    railways::{EuropeanTrack, WideGaugeTrack},
};
pub use domain::model::{RailwayComparison, RailwayInfo, RailwayProfile};
pub use domain::ports::{EuropeanRailway, WideGaugeRailway};
pub use utils::error::{GaugeError, Result};
