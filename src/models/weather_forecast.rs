use serde::{Deserialize, Serialize};

/// Weather forecast document as delivered by Open-Meteo's forecast endpoint,
/// requested with `daily=sunset,cloudcover_mean` and
/// `hourly=cloudcover_high,cloudcover_mid,cloudcover_low,cloudcover,relativehumidity_2m`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WeatherForecast {
    pub daily: DailyWeather,
    pub hourly: HourlyWeather,
}

/// One entry per forecast day, all arrays share the same index-to-date mapping
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DailyWeather {
    /// Dates formatted as `YYYY-MM-DD`
    pub time: Vec<String>,
    /// Sunset instants formatted as `YYYY-MM-DDTHH:MM` (local time)
    pub sunset: Vec<String>,
    /// Mean total cloud cover over the day (0-100%)
    #[serde(rename = "cloudcover_mean")]
    pub cloud_cover_mean: Vec<Option<f64>>,
}

/// One entry per hour, all arrays share the same index-to-timestamp mapping
/// as the `time` array. Missing samples are `None` (`null` in the document).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HourlyWeather {
    /// Timestamps formatted as `YYYY-MM-DDTHH:MM`, ascending
    pub time: Vec<String>,
    /// High-level cloud cover (0-100%)
    #[serde(rename = "cloudcover_high")]
    pub cloud_cover_high: Vec<Option<f64>>,
    /// Mid-level cloud cover (0-100%)
    #[serde(rename = "cloudcover_mid")]
    pub cloud_cover_mid: Vec<Option<f64>>,
    /// Low-level cloud cover (0-100%)
    #[serde(rename = "cloudcover_low")]
    pub cloud_cover_low: Vec<Option<f64>>,
    /// Total cloud cover (0-100%)
    #[serde(rename = "cloudcover")]
    pub cloud_cover: Vec<Option<f64>>,
    /// Relative humidity at 2 meters (0-100%)
    #[serde(rename = "relativehumidity_2m")]
    pub relative_humidity_2m: Vec<Option<f64>>,
}

impl DailyWeather {
    /// Returns the mean cloud cover for the given day index, if the day exists and has a value
    ///
    /// # Arguments
    ///
    /// * 'index' - the day index into the daily arrays
    pub fn cloud_mean_at(&self, index: usize) -> Option<f64> {
        value_at(&self.cloud_cover_mean, index)
    }
}

impl HourlyWeather {
    /// Cloud cover per altitude band at the given index as (high, mid, low)
    ///
    /// # Arguments
    ///
    /// * 'index' - the hour index into the hourly arrays
    pub fn cloud_bands_at(&self, index: usize) -> (Option<f64>, Option<f64>, Option<f64>) {
        (
            value_at(&self.cloud_cover_high, index),
            value_at(&self.cloud_cover_mid, index),
            value_at(&self.cloud_cover_low, index),
        )
    }

    pub fn total_cloud_at(&self, index: usize) -> Option<f64> {
        value_at(&self.cloud_cover, index)
    }

    pub fn humidity_at(&self, index: usize) -> Option<f64> {
        value_at(&self.relative_humidity_2m, index)
    }
}

/// Reads a sample from a parallel array where an index beyond the array bounds,
/// an explicit gap or a non-finite number all read as absent.
///
/// # Arguments
///
/// * 'values' - the parallel array to read from
/// * 'index' - index into the array
pub fn value_at(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten().filter(|v| v.is_finite())
}
