pub mod weather_forecast;
pub mod air_quality;
pub mod daily_score;
