use serde::{Deserialize, Serialize};
use crate::models::weather_forecast::value_at;

/// Air quality document as delivered by Open-Meteo's air-quality endpoint,
/// requested with `hourly=aerosol_optical_depth,dust,pm2_5`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AirQuality {
    pub hourly: HourlyAirQuality,
}

/// Hourly air quality samples, sharing index-to-timestamp mapping with `time`.
/// Dust and PM2.5 may be missing from the document altogether.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HourlyAirQuality {
    /// Timestamps formatted as `YYYY-MM-DDTHH:MM`, ascending
    pub time: Vec<String>,
    /// Aerosol optical depth at 550 nm of the entire atmosphere (dimensionless)
    #[serde(default)]
    pub aerosol_optical_depth: Vec<Option<f64>>,
    /// Dust particles close to surface (μg/m³)
    #[serde(default)]
    pub dust: Option<Vec<Option<f64>>>,
    /// PM2.5 particulate matter (μg/m³)
    #[serde(default)]
    pub pm2_5: Option<Vec<Option<f64>>>,
}

/// Air quality readings at one aligned hour
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AirSample {
    pub aod: Option<f64>,
    pub dust: Option<f64>,
    pub pm25: Option<f64>,
}

impl AirQuality {
    /// True if the document carries no hourly samples at all, which upstream
    /// uses to signal that no data is available for the point
    pub fn is_empty(&self) -> bool {
        self.hourly.time.is_empty()
    }
}

impl HourlyAirQuality {
    /// Returns all readings at the given hour index, absent where the arrays have no value
    ///
    /// # Arguments
    ///
    /// * 'index' - the hour index into the hourly arrays
    pub fn sample_at(&self, index: usize) -> AirSample {
        AirSample {
            aod: value_at(&self.aerosol_optical_depth, index),
            dust: self.dust.as_deref().and_then(|d| value_at(d, index)),
            pm25: self.pm2_5.as_deref().and_then(|p| value_at(p, index)),
        }
    }
}
