use std::{env, thread};
use anyhow::{Context, Result};
use log::{error, info};
use sunset_forecast::conditions::ScoreTier;
use sunset_forecast::forecast::{Forecast, ForecastBuilder};
use sunset_forecast::initialization::init;
use sunset_forecast::input::{load_locations, save_forecast, LocationInput};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args().nth(1)
        .or_else(|| env::var("CONFIG_PATH").ok())
        .context("no configuration path given as argument or in CONFIG_PATH")?;

    let config = init(&config_path)
        .with_context(|| format!("failed to initialize from {}", config_path))?;

    let locations = load_locations(&config.files.input_dir)
        .with_context(|| format!("failed to read locations from {}", config.files.input_dir))?;
    info!("scoring {} location(s)", locations.len());

    let builder = ForecastBuilder::new(config.forecast.horizon_days);
    let forecasts: Vec<(&LocationInput, Forecast)> = thread::scope(|s| {
        let handles = locations.iter()
            .map(|l| s.spawn(move || (l, builder.build(&l.weather, l.air_quality.as_ref()))))
            .collect::<Vec<_>>();

        handles.into_iter()
            .zip(locations.iter())
            .filter_map(|(h, l)| match h.join() {
                Ok(result) => Some(result),
                Err(_) => {
                    error!("scoring of {} panicked, location left out", l.name);
                    None
                }
            })
            .collect()
    });

    for (location, forecast) in &forecasts {
        print_forecast(&location.name, forecast);
        let path = save_forecast(&config.files.output_dir, &location.name, forecast)
            .with_context(|| format!("failed to save forecast for {}", location.name))?;
        info!("saved forecast for {} to {}", location.name, path.display());
    }

    Ok(())
}

/// Logs a forecast with a caption
///
/// # Arguments
///
/// * 'name' - location name used as caption
/// * 'forecast' - the forecast to log
fn print_forecast(name: &str, forecast: &Forecast) {
    let mut msg = format!("{:=<60}\n", format!("{} ", name));
    if let Some(moments) = forecast.moments {
        msg += &format!("Sunset {}, golden {}\n",
                        moments.sunset().format("%H:%M"), moments.golden().format("%H:%M"));
    }
    for day in &forecast.days {
        msg += &format!("{} {}\n", day, ScoreTier::from_score(day.score()));
    }
    info!("{}", msg);
}
