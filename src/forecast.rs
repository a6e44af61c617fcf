use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use crate::blending::blend_measured;
use crate::clarity::{clarity_score, ClarityInput};
use crate::cloud_geometry::{cloud_score, CloudInput};
use crate::conditions::TodayConditions;
use crate::models::air_quality::{AirQuality, AirSample};
use crate::models::daily_score::{DailyScore, SunsetMoments};
use crate::models::weather_forecast::WeatherForecast;
use crate::time_alignment::{index_for_instant, Alignment};

/// Nominal number of days in a forecast
pub const DEFAULT_HORIZON_DAYS: usize = 10;

/// Scored forecast for one location
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Forecast {
    /// Chronological day scores, days with malformed data are left out
    pub days: Vec<DailyScore>,
    /// Sunset and golden moment of the first day, if its sunset could be parsed
    pub moments: Option<SunsetMoments>,
    /// Readings behind the first day's score
    pub conditions: Option<TodayConditions>,
}

impl Forecast {
    /// Score of the first day, if it could be scored
    pub fn today(&self) -> Option<&DailyScore> {
        self.days.first()
    }
}

/// Builds sunset forecasts over a horizon of days.
///
/// The builder holds no state between calls, the same builder can be shared
/// between threads scoring different locations.
#[derive(Clone, Copy, Debug)]
pub struct ForecastBuilder {
    horizon_days: usize,
}

impl Default for ForecastBuilder {
    fn default() -> Self {
        ForecastBuilder { horizon_days: DEFAULT_HORIZON_DAYS }
    }
}

impl ForecastBuilder {
    /// Returns a builder scoring at most the given number of days
    ///
    /// # Arguments
    ///
    /// * 'horizon_days' - max number of days to score
    pub fn new(horizon_days: usize) -> ForecastBuilder {
        ForecastBuilder { horizon_days }
    }

    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Scores each day in the weather forecast.
    ///
    /// The first day is scored from the hourly cloud bands at sunset and blended with
    /// air quality at the same hour. If the sunset can't be aligned with the hourly data,
    /// the first day falls back to the daily mean cloud cover like all following days.
    /// Following days are never blended with air quality.
    ///
    /// # Arguments
    ///
    /// * 'weather' - daily and hourly weather forecast
    /// * 'air_quality' - hourly air quality forecast, None if it couldn't be fetched
    pub fn build(&self, weather: &WeatherForecast, air_quality: Option<&AirQuality>) -> Forecast {
        let daily = &weather.daily;
        let first_sunset = daily.sunset.first().map(String::as_str);

        let weather_alignment = first_sunset
            .map_or(Alignment::NotFound, |s| index_for_instant(s, &weather.hourly.time));

        let air_sample = match (first_sunset, air_quality.filter(|aq| !aq.is_empty())) {
            (Some(sunset), Some(aq)) => index_for_instant(sunset, &aq.hourly.time)
                .index()
                .map(|i| aq.hourly.sample_at(i))
                .unwrap_or_default(),
            _ => AirSample::default(),
        };

        let clarity = match ClarityInput::from_sample(&air_sample) {
            ClarityInput::Unavailable => None,
            input => Some(clarity_score(input)),
        };

        let mut days: Vec<DailyScore> = Vec::with_capacity(self.horizon_days.min(daily.time.len()));
        for (i, raw_date) in daily.time.iter().enumerate().take(self.horizon_days) {
            let Ok(date) = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") else {
                debug!("skipping day {} with malformed date '{}'", i, raw_date);
                continue;
            };

            let input = if i == 0 {
                hourly_input(weather, weather_alignment)
                    .or_else(|| daily.cloud_mean_at(i).map(CloudInput::DailyMean))
            } else {
                daily.cloud_mean_at(i).map(CloudInput::DailyMean)
            };

            let Some(input) = input else {
                debug!("skipping {} without cloud data", date);
                continue;
            };

            let score = if i == 0 {
                let cloud = cloud_score(input);
                let blended = blend_measured(cloud, clarity);
                debug!("{}: cloud {:?} -> {}, clarity {:?}, final {}", date, input, cloud, clarity, blended);
                blended
            } else {
                cloud_score(input)
            };

            days.push(DailyScore::new(date, score));
        }

        let conditions = (!daily.time.is_empty()).then(|| {
            let index = weather_alignment.index();
            TodayConditions {
                cloud_mean: daily.cloud_mean_at(0),
                cloud_at_sunset: index.and_then(|i| weather.hourly.total_cloud_at(i)),
                humidity_at_sunset: index.and_then(|i| weather.hourly.humidity_at(i)),
                aod_at_sunset: air_sample.aod,
                clarity,
            }
        });

        Forecast {
            days,
            moments: first_sunset.and_then(SunsetMoments::parse),
            conditions,
        }
    }
}

/// Cloud bands at the aligned sunset hour, None if not aligned or if high or low cover is missing
///
/// # Arguments
///
/// * 'weather' - the weather forecast
/// * 'alignment' - sunset alignment against the hourly timestamps
fn hourly_input(weather: &WeatherForecast, alignment: Alignment) -> Option<CloudInput> {
    let index = alignment.index()?;
    match weather.hourly.cloud_bands_at(index) {
        (Some(high), mid, Some(low)) => Some(CloudInput::Hourly { high, mid: mid.unwrap_or(0.0), low }),
        _ => {
            debug!("hourly cloud bands incomplete at index {}", index);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::air_quality::HourlyAirQuality;
    use crate::models::weather_forecast::{DailyWeather, HourlyWeather};

    fn weather(dates: &[&str], means: &[Option<f64>], high: f64, low: f64) -> WeatherForecast {
        WeatherForecast {
            daily: DailyWeather {
                time: dates.iter().map(|d| d.to_string()).collect(),
                sunset: dates.iter().map(|d| format!("{}T19:42", d)).collect(),
                cloud_cover_mean: means.to_vec(),
            },
            hourly: HourlyWeather {
                time: vec!["2025-04-26T18:00".into(), "2025-04-26T19:00".into(), "2025-04-26T20:00".into()],
                cloud_cover_high: vec![Some(0.0), Some(high), Some(0.0)],
                cloud_cover_mid: vec![Some(0.0), Some(40.0), Some(0.0)],
                cloud_cover_low: vec![Some(0.0), Some(low), Some(0.0)],
                cloud_cover: vec![Some(10.0), Some(55.0), Some(10.0)],
                relative_humidity_2m: vec![Some(50.0), Some(65.0), Some(50.0)],
            },
        }
    }

    fn air(aod: Option<f64>) -> AirQuality {
        AirQuality {
            hourly: HourlyAirQuality {
                time: vec!["2025-04-26T19:00".into()],
                aerosol_optical_depth: vec![aod],
                dust: None,
                pm2_5: None,
            },
        }
    }

    #[test]
    fn first_day_hourly_and_blended_later_days_daily() {
        let w = weather(&["2025-04-26", "2025-04-27"], &[Some(90.0), Some(25.0)], 100.0, 0.0);
        let forecast = ForecastBuilder::default().build(&w, Some(&air(Some(0.30))));

        // cloud 90, clarity 70 -> 63 + 21
        assert_eq!(forecast.days[0].score(), 84);
        assert_eq!(forecast.days[1].score(), 75);
        assert_eq!(forecast.conditions.unwrap().clarity, Some(70));
        assert_eq!(forecast.conditions.unwrap().cloud_at_sunset, Some(55.0));
    }

    #[test]
    fn missing_air_quality_keeps_cloud_score() {
        let w = weather(&["2025-04-26"], &[Some(90.0)], 0.0, 100.0);
        assert_eq!(ForecastBuilder::default().build(&w, None).days[0].score(), 20);
        assert_eq!(ForecastBuilder::default().build(&w, Some(&air(None))).days[0].score(), 20);
    }

    #[test]
    fn alignment_miss_falls_back_to_daily_mean() {
        let mut w = weather(&["2025-04-26"], &[Some(30.0)], 100.0, 0.0);
        w.hourly.time = vec!["2025-04-27T18:00".into(), "2025-04-27T19:00".into(), "2025-04-27T20:00".into()];

        let forecast = ForecastBuilder::default().build(&w, None);
        assert_eq!(forecast.days[0].score(), 70);
        assert_eq!(forecast.conditions.unwrap().cloud_at_sunset, None);
    }

    #[test]
    fn missing_hourly_band_falls_back_to_daily_mean() {
        let mut w = weather(&["2025-04-26"], &[Some(30.0)], 100.0, 0.0);
        w.hourly.cloud_cover_low[1] = None;

        assert_eq!(ForecastBuilder::default().build(&w, None).days[0].score(), 70);
    }

    #[test]
    fn daily_fallback_for_today_is_still_blended() {
        let mut w = weather(&["2025-04-26"], &[Some(0.0)], 100.0, 0.0);
        w.hourly.time = vec!["2025-04-27T18:00".into(), "2025-04-27T19:00".into(), "2025-04-27T20:00".into()];

        // daily mean 0 -> cloud 100, clarity 70 -> 70 + 21
        let forecast = ForecastBuilder::default().build(&w, Some(&air(Some(0.30))));
        assert_eq!(forecast.days[0].score(), 91);
        assert_eq!(forecast.conditions.unwrap().clarity, Some(70));
    }

    #[test]
    fn malformed_first_date_does_not_blend_next_day() {
        let mut w = weather(&["2025-13-40", "2025-04-27"], &[Some(0.0), Some(0.0)], 100.0, 0.0);
        w.daily.sunset[0] = "2025-04-26T19:42".into();
        let forecast = ForecastBuilder::default().build(&w, Some(&air(Some(0.30))));

        assert_eq!(forecast.days.len(), 1);
        assert_eq!(forecast.days[0].date().to_string(), "2025-04-27");
        // clarity was measured for the first sunset but belongs to the skipped day
        assert_eq!(forecast.conditions.unwrap().clarity, Some(70));
        assert_eq!(forecast.days[0].score(), 100);
    }

    #[test]
    fn horizon_limits_number_of_days() {
        let w = weather(&["2025-04-26", "2025-04-27", "2025-04-28"], &[Some(0.0), Some(0.0), Some(0.0)], 0.0, 0.0);
        let forecast = ForecastBuilder::new(2).build(&w, None);
        assert_eq!(forecast.days.len(), 2);
    }

    #[test]
    fn day_without_mean_is_skipped() {
        let w = weather(&["2025-04-26", "2025-04-27", "2025-04-28"], &[Some(0.0), None, Some(50.0)], 0.0, 0.0);
        let forecast = ForecastBuilder::default().build(&w, None);

        let dates: Vec<String> = forecast.days.iter().map(|d| d.date().to_string()).collect();
        assert_eq!(dates, vec!["2025-04-26", "2025-04-28"]);
    }

    #[test]
    fn empty_forecast_has_nothing() {
        let forecast = ForecastBuilder::default().build(&WeatherForecast::default(), None);
        assert!(forecast.days.is_empty());
        assert!(forecast.moments.is_none());
        assert!(forecast.conditions.is_none());
        assert!(forecast.today().is_none());
    }
}
