/// Reward for high, thin ice-crystal clouds that catch and color the setting light
pub const HIGH_CLOUD_WEIGHT: f64 = 0.4;

/// Mid-level clouds are scored neutral. Kept as an explicit input for future tuning.
pub const MID_CLOUD_WEIGHT: f64 = 0.0;

/// Penalty for low stratus that occludes the sun near the horizon
pub const LOW_CLOUD_WEIGHT: f64 = 0.3;

/// Neutral score around which the weighted cloud contribution is added
const BASE_SCORE: f64 = 50.0;

/// Max absolute contribution from the weighted cloud layers
const MAX_CONTRIBUTION: f64 = 50.0;

/// Cloud data available for scoring a day
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudInput {
    /// Cloud cover per altitude band (0-100%) at the hour of sunset
    Hourly { high: f64, mid: f64, low: f64 },
    /// Mean total cloud cover (0-100%) over the day
    DailyMean(f64),
}

/// Scores the sky geometry for a sunset, 0 (worst) to 100 (best)
///
/// # Arguments
///
/// * 'input' - hourly cloud bands or daily mean, whichever is available
pub fn cloud_score(input: CloudInput) -> u8 {
    match input {
        CloudInput::Hourly { high, mid, low } => hourly_score(high, mid, low),
        CloudInput::DailyMean(mean) => daily_score(mean),
    }
}

/// Hourly mode, rewards high clouds and penalizes low clouds around a neutral 50
///
/// # Arguments
///
/// * 'high' - high-level cloud cover (0-100%)
/// * 'mid' - mid-level cloud cover (0-100%)
/// * 'low' - low-level cloud cover (0-100%)
pub fn hourly_score(high: f64, mid: f64, low: f64) -> u8 {
    let weighted = HIGH_CLOUD_WEIGHT * high + MID_CLOUD_WEIGHT * mid - LOW_CLOUD_WEIGHT * low;
    let contribution = if weighted.is_nan() {
        0.0
    } else {
        weighted.clamp(-MAX_CONTRIBUTION, MAX_CONTRIBUTION)
    };

    to_score(BASE_SCORE + contribution)
}

/// Daily mode, overall cloudiness used as an inverse proxy for seeing the sun set
///
/// # Arguments
///
/// * 'mean' - mean total cloud cover over the day (0-100%)
pub fn daily_score(mean: f64) -> u8 {
    to_score(100.0 - mean.round())
}

/// Rounds to the nearest integer and clamps to 0-100, NaN maps to 0
///
/// # Arguments
///
/// * 'value' - raw score value
pub fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 100.0) as u8
    }
}
