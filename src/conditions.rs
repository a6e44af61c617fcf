use std::fmt;
use serde::Serialize;

/// Readings behind today's score, all taken at the hour of sunset except the daily mean
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TodayConditions {
    /// Mean total cloud cover over the day (0-100%)
    pub cloud_mean: Option<f64>,
    /// Total cloud cover at sunset (0-100%)
    pub cloud_at_sunset: Option<f64>,
    /// Relative humidity at sunset (0-100%)
    pub humidity_at_sunset: Option<f64>,
    /// Aerosol optical depth at sunset
    pub aod_at_sunset: Option<f64>,
    /// Clarity score used for blending, None if no haze data was available
    pub clarity: Option<u8>,
}

impl TodayConditions {
    pub fn cloud_label(&self) -> Option<CloudLabel> {
        self.cloud_mean.map(CloudLabel::from_cover)
    }

    pub fn humidity_label(&self) -> Option<HumidityLabel> {
        self.humidity_at_sunset.map(HumidityLabel::from_humidity)
    }

    pub fn haze_label(&self) -> Option<HazeLabel> {
        self.aod_at_sunset.map(HazeLabel::from_aod)
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudLabel {
    Clear,
    Partly,
    Overcast,
}

impl CloudLabel {
    /// Classifies mean cloud cover
    ///
    /// # Arguments
    ///
    /// * 'cover' - cloud cover in percent
    pub fn from_cover(cover: f64) -> CloudLabel {
        if cover < 20.0 {
            CloudLabel::Clear
        } else if cover < 60.0 {
            CloudLabel::Partly
        } else {
            CloudLabel::Overcast
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumidityLabel {
    Dry,
    Ok,
    Humid,
}

impl HumidityLabel {
    /// Classifies relative humidity
    ///
    /// # Arguments
    ///
    /// * 'humidity' - relative humidity in percent
    pub fn from_humidity(humidity: f64) -> HumidityLabel {
        if humidity < 40.0 {
            HumidityLabel::Dry
        } else if humidity < 70.0 {
            HumidityLabel::Ok
        } else {
            HumidityLabel::Humid
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazeLabel {
    Low,
    Moderate,
    High,
}

impl HazeLabel {
    /// Classifies aerosol optical depth
    ///
    /// # Arguments
    ///
    /// * 'aod' - aerosol optical depth
    pub fn from_aod(aod: f64) -> HazeLabel {
        if aod < 0.1 {
            HazeLabel::Low
        } else if aod < 0.3 {
            HazeLabel::Moderate
        } else {
            HazeLabel::High
        }
    }
}

/// Coarse quality bands of a sunset score, presentation layers pick colors from these
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> ScoreTier {
        match score {
            80.. => ScoreTier::Excellent,
            60..=79 => ScoreTier::Good,
            40..=59 => ScoreTier::Fair,
            _ => ScoreTier::Poor,
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreTier::Poor      => write!(f, "Poor"),
            ScoreTier::Fair      => write!(f, "Fair"),
            ScoreTier::Good      => write!(f, "Good"),
            ScoreTier::Excellent => write!(f, "Excellent"),
        }
    }
}
