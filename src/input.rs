use std::fs;
use std::path::{Path, PathBuf};
use glob::glob;
use log::{debug, warn};
use crate::errors::InputError;
use crate::forecast::Forecast;
use crate::models::air_quality::AirQuality;
use crate::models::weather_forecast::WeatherForecast;

const WEATHER_SUFFIX: &str = "_weather.json";
const AIR_QUALITY_SUFFIX: &str = "_air_quality.json";
const FORECAST_SUFFIX: &str = "_forecast.json";

/// Decoded input documents for one location
#[derive(Debug)]
pub struct LocationInput {
    pub name: String,
    pub weather: WeatherForecast,
    pub air_quality: Option<AirQuality>,
}

/// Loads all locations found in the input directory.
///
/// A location is given by a `{name}_weather.json` document and an optional
/// `{name}_air_quality.json` document. Locations whose weather document can't be read
/// are logged and left out, an unreadable air quality document only drops the air quality.
///
/// # Arguments
///
/// * 'input_dir' - directory holding the input documents, including trailing separator
pub fn load_locations(input_dir: &str) -> Result<Vec<LocationInput>, InputError> {
    let pattern = format!("{}*{}", input_dir, WEATHER_SUFFIX);
    let mut locations: Vec<LocationInput> = Vec::new();

    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("unreadable input entry: {}", e);
                continue;
            }
        };

        let Some(name) = location_name(&path) else { continue };
        match load_location(&path, &name) {
            Ok(location) => locations.push(location),
            Err(e) => warn!("skipping location {}: {}", name, e),
        }
    }

    locations.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(locations)
}

/// Saves a forecast as pretty json to `{output_dir}{name}_forecast.json`
///
/// # Arguments
///
/// * 'output_dir' - the directory to save the file to, including trailing separator
/// * 'name' - location name
/// * 'forecast' - the forecast to save
pub fn save_forecast(output_dir: &str, name: &str, forecast: &Forecast) -> Result<PathBuf, InputError> {
    let file_path = PathBuf::from(format!("{}{}{}", output_dir, name, FORECAST_SUFFIX));

    let json = serde_json::to_string_pretty(forecast)?;
    fs::write(&file_path, json)?;

    Ok(file_path)
}

/// Reads the weather document and any sibling air quality document for a location
///
/// # Arguments
///
/// * 'weather_path' - path to the weather document
/// * 'name' - location name
fn load_location(weather_path: &Path, name: &str) -> Result<LocationInput, InputError> {
    let json = fs::read_to_string(weather_path)?;
    let weather: WeatherForecast = serde_json::from_str(&json)?;

    let air_quality_path = weather_path.with_file_name(format!("{}{}", name, AIR_QUALITY_SUFFIX));
    let air_quality = if air_quality_path.exists() {
        match load_air_quality(&air_quality_path) {
            Ok(air_quality) => Some(air_quality).filter(|aq| !aq.is_empty()),
            Err(e) => {
                warn!("continuing without air quality for {}: {}", name, e);
                None
            }
        }
    } else {
        debug!("no air quality document for {}", name);
        None
    };

    Ok(LocationInput { name: name.to_string(), weather, air_quality })
}

/// Reads and decodes an air quality document
///
/// # Arguments
///
/// * 'path' - path to the air quality document
fn load_air_quality(path: &Path) -> Result<AirQuality, InputError> {
    let json = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&json)?)
}

/// Extracts the location name from a weather document path
///
/// # Arguments
///
/// * 'path' - path to a weather document
fn location_name(path: &Path) -> Option<String> {
    path.file_name()?
        .to_str()?
        .strip_suffix(WEATHER_SUFFIX)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_file_stem_before_suffix() {
        assert_eq!(location_name(Path::new("/in/lund_weather.json")), Some("lund".to_string()));
        assert_eq!(location_name(Path::new("/in/_weather.json")), None);
        assert_eq!(location_name(Path::new("/in/lund_air_quality.json")), None);
    }

    #[test]
    fn loads_location_pair_from_directory() {
        let dir = std::env::temp_dir().join(format!("sunset_input_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let weather = r#"{"daily": {"time": [], "sunset": [], "cloudcover_mean": []},
            "hourly": {"time": [], "cloudcover_high": [], "cloudcover_mid": [], "cloudcover_low": [],
                       "cloudcover": [], "relativehumidity_2m": []}}"#;
        fs::write(dir.join("lund_weather.json"), weather).unwrap();
        fs::write(dir.join("lund_air_quality.json"), r#"{"hourly": {"time": ["2025-04-26T19:00"]}}"#).unwrap();
        fs::write(dir.join("broken_weather.json"), "{").unwrap();

        let input_dir = format!("{}/", dir.display());
        let locations = load_locations(&input_dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "lund");
        assert!(locations[0].air_quality.is_some());
    }

    #[test]
    fn corrupt_air_quality_keeps_weather() {
        let dir = std::env::temp_dir().join(format!("sunset_corrupt_aq_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let weather = r#"{"daily": {"time": ["2025-04-26"], "sunset": ["2025-04-26T19:42"], "cloudcover_mean": [20.0]},
            "hourly": {"time": [], "cloudcover_high": [], "cloudcover_mid": [], "cloudcover_low": [],
                       "cloudcover": [], "relativehumidity_2m": []}}"#;
        fs::write(dir.join("lund_weather.json"), weather).unwrap();
        fs::write(dir.join("lund_air_quality.json"), "{ truncated").unwrap();

        let input_dir = format!("{}/", dir.display());
        let locations = load_locations(&input_dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "lund");
        assert_eq!(locations[0].weather.daily.time, vec!["2025-04-26"]);
        assert!(locations[0].air_quality.is_none());
    }
}
