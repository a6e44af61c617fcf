use std::fmt;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Minutes before sunset where the golden moment starts
pub const GOLDEN_OFFSET_MINUTES: i64 = 30;

/// Sunset quality score for one calendar day.
///
/// Fields are private since a day's score is never altered once computed.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyScore {
    date: NaiveDate,
    weekday: String,
    score: u8,
}

impl DailyScore {
    /// Creates a new score for the given date, the weekday label is derived from the date
    ///
    /// # Arguments
    ///
    /// * 'date' - the calendar day the score is for
    /// * 'score' - score between 0 and 100, larger values are capped to 100
    pub fn new(date: NaiveDate, score: u8) -> DailyScore {
        DailyScore {
            date,
            weekday: date.format("%a").to_string(),
            score: score.min(100),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Abbreviated weekday, e.g. `Sat`
    pub fn weekday(&self) -> &str {
        &self.weekday
    }

    pub fn score(&self) -> u8 {
        self.score
    }
}

impl fmt::Display for DailyScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {:>3}%", self.weekday, self.date.format("%Y-%m-%d"), self.score)
    }
}

/// Sunset instant with its derived golden moment
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SunsetMoments {
    sunset: NaiveDateTime,
    golden: NaiveDateTime,
}

impl SunsetMoments {
    /// Creates sunset moments where the golden moment is always
    /// GOLDEN_OFFSET_MINUTES before the given sunset
    ///
    /// # Arguments
    ///
    /// * 'sunset' - the local sunset instant
    pub fn new(sunset: NaiveDateTime) -> SunsetMoments {
        SunsetMoments {
            sunset,
            golden: sunset - TimeDelta::minutes(GOLDEN_OFFSET_MINUTES),
        }
    }

    /// Parses a sunset timestamp formatted as `YYYY-MM-DDTHH:MM`, returns None if malformed
    ///
    /// # Arguments
    ///
    /// * 'timestamp' - the timestamp to parse
    pub fn parse(timestamp: &str) -> Option<SunsetMoments> {
        NaiveDateTime::parse_from_str(timestamp.trim(), "%Y-%m-%dT%H:%M")
            .ok()
            .map(SunsetMoments::new)
    }

    pub fn sunset(&self) -> NaiveDateTime {
        self.sunset
    }

    pub fn golden(&self) -> NaiveDateTime {
        self.golden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_label_follows_date() {
        let day = DailyScore::new(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap(), 71);
        assert_eq!(day.weekday(), "Sat");
        assert_eq!(day.score(), 71);
        assert_eq!(day.to_string(), "Sat 2025-04-26  71%");
    }

    #[test]
    fn golden_moment_is_thirty_minutes_before_sunset() {
        let moments = SunsetMoments::parse("2025-04-26T19:42").unwrap();
        assert_eq!(moments.golden().format("%H:%M").to_string(), "19:12");
        assert_eq!(moments.sunset() - moments.golden(), TimeDelta::minutes(30));
    }

    #[test]
    fn golden_moment_crosses_midnight_backwards() {
        let moments = SunsetMoments::parse("2025-06-21T00:10").unwrap();
        assert_eq!(moments.golden().format("%Y-%m-%d %H:%M").to_string(), "2025-06-20 23:40");
    }

    #[test]
    fn malformed_sunset_is_unavailable() {
        assert!(SunsetMoments::parse("2025-04-26 19:42").is_none());
        assert!(SunsetMoments::parse("").is_none());
        assert!(SunsetMoments::parse("2025-04-26T25:00").is_none());
    }
}
