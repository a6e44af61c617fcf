use crate::cloud_geometry::to_score;

/// Share of the final score given by cloud geometry
pub const CLOUD_WEIGHT: f64 = 0.7;

/// Share of the final score given by atmospheric clarity
pub const CLARITY_WEIGHT: f64 = 0.3;

/// Blends cloud geometry and clarity into the final score for a day (0-100).
///
/// Only the first day of a forecast is blended, air quality forecasts beyond
/// roughly 24 hours are not reliable enough to be fetched for later days.
///
/// # Arguments
///
/// * 'cloud_score' - score from cloud geometry
/// * 'clarity_score' - score from atmospheric clarity
pub fn blend(cloud_score: u8, clarity_score: u8) -> u8 {
    to_score(CLOUD_WEIGHT * cloud_score as f64 + CLARITY_WEIGHT * clarity_score as f64)
}

/// Blends when clarity was measured, otherwise the cloud score stands on its own
///
/// # Arguments
///
/// * 'cloud_score' - score from cloud geometry
/// * 'clarity_score' - score from atmospheric clarity, None if no haze input was available
pub fn blend_measured(cloud_score: u8, clarity_score: Option<u8>) -> u8 {
    match clarity_score {
        Some(clarity) => blend(cloud_score, clarity),
        None => cloud_score.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_arithmetic() {
        assert_eq!(blend(80, 50), 71);
        assert_eq!(blend(0, 0), 0);
        assert_eq!(blend(100, 100), 100);
        assert_eq!(blend(50, 100), 65);
    }

    #[test]
    fn out_of_range_inputs_stay_bounded() {
        assert_eq!(blend(u8::MAX, u8::MAX), 100);
        assert_eq!(blend_measured(u8::MAX, None), 100);
    }

    #[test]
    fn unmeasured_clarity_leaves_cloud_score_unchanged() {
        for cloud in 0..=100u8 {
            assert_eq!(blend_measured(cloud, None), cloud);
        }
        assert_eq!(blend_measured(80, Some(50)), 71);
    }
}
