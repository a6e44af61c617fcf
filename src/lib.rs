//! Sunset quality forecasts from cloud cover and air quality time series.
//!
//! The scoring engine (`time_alignment`, `cloud_geometry`, `clarity`, `blending`
//! and `forecast`) is a set of pure functions over borrowed, already decoded
//! series. It keeps no state between calls and can score any number of
//! locations concurrently.

pub mod models;
pub mod time_alignment;
pub mod cloud_geometry;
pub mod clarity;
pub mod blending;
pub mod conditions;
pub mod forecast;
pub mod errors;
pub mod config;
pub mod initialization;
pub mod input;

pub use forecast::{Forecast, ForecastBuilder};
pub use models::daily_score::{DailyScore, SunsetMoments};
