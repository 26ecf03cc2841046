pub mod converter;
pub mod facade;
pub mod railways;

pub use crate::domain::model::{RailwayComparison, RailwayInfo, RailwayProfile};
pub use crate::domain::ports::{EuropeanRailway, WideGaugeRailway};
pub use crate::utils::error::Result;
