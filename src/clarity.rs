use crate::cloud_geometry::to_score;
use crate::models::air_quality::AirSample;

/// Max penalty in score points from haze, whichever input is used
pub const MAX_PENALTY: f64 = 60.0;

/// AOD where the sigmoid penalty reaches half of MAX_PENALTY
const AOD_MIDPOINT: f64 = 0.30;

/// Steepness of the AOD sigmoid
const AOD_STEEPNESS: f64 = 6.0;

/// Weight of PM2.5 in the particulate proxy
const PM25_WEIGHT: f64 = 0.6;

/// Weight of dust in the particulate proxy
const DUST_WEIGHT: f64 = 0.4;

/// Proxy concentration (μg/m³) per penalty point
const PROXY_PER_POINT: f64 = 5.0;

/// Clarity when no air quality data is available at all, i.e. fully clear
pub const DEFAULT_CLARITY: u8 = 100;

/// Haze input selected for scoring clarity
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClarityInput {
    /// Aerosol optical depth (dimensionless)
    Aod(f64),
    /// Particulate concentrations (μg/m³), absent values count as zero
    Particulates { pm25: f64, dust: f64 },
    /// Nothing to go on
    Unavailable,
}

impl ClarityInput {
    /// Selects which input to score from an air quality sample. AOD is preferred, the
    /// particulate proxy is used only when AOD is missing and at least one of PM2.5 or
    /// dust is present.
    ///
    /// # Arguments
    ///
    /// * 'sample' - air quality readings at the hour of interest
    pub fn from_sample(sample: &AirSample) -> ClarityInput {
        match (sample.aod, sample.pm25, sample.dust) {
            (Some(aod), _, _) => ClarityInput::Aod(aod),
            (None, None, None) => ClarityInput::Unavailable,
            (None, pm25, dust) => ClarityInput::Particulates {
                pm25: pm25.unwrap_or(0.0),
                dust: dust.unwrap_or(0.0),
            },
        }
    }
}

/// Scores atmospheric clarity, 0 (hazy) to 100 (clear). Non-finite readings count as
/// no reading at all.
///
/// # Arguments
///
/// * 'input' - the selected haze input
pub fn clarity_score(input: ClarityInput) -> u8 {
    let penalty = match input {
        ClarityInput::Aod(aod) if aod.is_finite() => aod_penalty(aod),
        ClarityInput::Particulates { pm25, dust } if pm25.is_finite() && dust.is_finite() =>
            proxy_penalty(PM25_WEIGHT * pm25 + DUST_WEIGHT * dust),
        _ => return DEFAULT_CLARITY,
    };

    to_score(100.0 - penalty.round())
}

/// Sigmoid penalty centered at AOD_MIDPOINT and capped at MAX_PENALTY
///
/// # Arguments
///
/// * 'aod' - aerosol optical depth
fn aod_penalty(aod: f64) -> f64 {
    let sigmoid = 1.0 / (1.0 + (-(aod - AOD_MIDPOINT) * AOD_STEEPNESS).exp());
    MAX_PENALTY * sigmoid
}

/// Linear penalty capped at MAX_PENALTY, negative readings give no penalty
///
/// # Arguments
///
/// * 'proxy' - weighted particulate concentration in μg/m³
fn proxy_penalty(proxy: f64) -> f64 {
    (proxy / PROXY_PER_POINT).clamp(0.0, MAX_PENALTY)
}
