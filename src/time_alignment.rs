use log::debug;

/// Outcome of aligning an instant against hourly timestamps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Found(usize),
    NotFound,
}

impl Alignment {
    /// Returns the aligned index, if any
    pub fn index(self) -> Option<usize> {
        match self {
            Alignment::Found(i) => Some(i),
            Alignment::NotFound => None,
        }
    }
}

/// Finds the index of the hourly sample that best represents the given instant.
///
/// The minutes of the target are truncated, so the first candidate within the same
/// hour is preferred. If no candidate exists for that hour, the first candidate on the
/// same date is used instead. Nothing on the same date, or a target without the `T`
/// separator, gives Alignment::NotFound.
///
/// # Arguments
///
/// * 'target' - instant formatted as `YYYY-MM-DDTHH:MM`
/// * 'candidates' - ascending hourly timestamps formatted as `YYYY-MM-DDTHH:MM`
pub fn index_for_instant(target: &str, candidates: &[String]) -> Alignment {
    if candidates.is_empty() {
        return Alignment::NotFound;
    }

    let Some((date_part, time_part)) = target.trim().split_once('T') else {
        return Alignment::NotFound;
    };
    let hour_part = time_part.split(':').next().unwrap_or_default();
    if date_part.is_empty() || hour_part.is_empty() || time_part.contains('T') {
        return Alignment::NotFound;
    }

    let exact_lookup = format!("{}T{}:", date_part, hour_part);
    if let Some(i) = candidates.iter().position(|c| c.starts_with(&exact_lookup)) {
        return Alignment::Found(i);
    }

    let same_day = candidates.iter()
        .position(|c| c.split_once('T').is_some_and(|(d, _)| d == date_part));
    match same_day {
        Some(i) => {
            debug!("no hourly sample for {}, using first sample of {} at index {}", target, date_part, i);
            Alignment::Found(i)
        },
        None => Alignment::NotFound,
    }
}
