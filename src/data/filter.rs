use chrono::{NaiveDate, Timelike};

use super::model::{Reading, SensorDataset};
use super::time::time_to_seconds;

// ---------------------------------------------------------------------------
// Extreme-value thresholds
// ---------------------------------------------------------------------------

/// Comfort range for temperature in °C; outside it a reading is extreme.
pub const TEMP_RANGE: (f64, f64) = (0.0, 35.0);
/// Comfort range for relative humidity in %.
pub const HUMID_RANGE: (f64, f64) = (20.0, 80.0);

/// Whether a reading falls outside the fixed comfort thresholds.
pub fn is_extreme(r: &Reading) -> bool {
    r.temp < TEMP_RANGE.0
        || r.temp > TEMP_RANGE.1
        || r.humid < HUMID_RANGE.0
        || r.humid > HUMID_RANGE.1
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// Parsed predicate set. Every `None` bound passes everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humid_min: Option<f64>,
    pub humid_max: Option<f64>,
    /// Inclusive bounds as seconds from midnight.
    pub time_min: Option<u32>,
    pub time_max: Option<u32>,
    pub date: Option<NaiveDate>,
    /// `None` is the "all locations" selection.
    pub location: Option<String>,
    pub exclude_extreme: bool,
}

impl FilterCriteria {
    /// Check if any predicate is active.
    pub fn has_active_filters(&self) -> bool {
        self.temp_min.is_some()
            || self.temp_max.is_some()
            || self.humid_min.is_some()
            || self.humid_max.is_some()
            || self.time_min.is_some()
            || self.time_max.is_some()
            || self.date.is_some()
            || self.location.is_some()
            || self.exclude_extreme
    }

    /// Whether one reading passes every active predicate.
    pub fn matches(&self, r: &Reading) -> bool {
        if self.exclude_extreme && is_extreme(r) {
            return false;
        }
        if !within(r.temp, self.temp_min, self.temp_max) {
            return false;
        }
        if !within(r.humid, self.humid_min, self.humid_max) {
            return false;
        }
        let secs = r.time.num_seconds_from_midnight();
        if !within(secs, self.time_min, self.time_max) {
            return false;
        }
        if self.date.is_some_and(|d| d != r.date) {
            return false;
        }
        if self.location.as_deref().is_some_and(|l| l != r.location) {
            return false;
        }
        true
    }
}

fn within<T: PartialOrd + Copy>(v: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m)
}

/// Return indices of readings that pass all active filters, in feed order.
pub fn filtered_indices(dataset: &SensorDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .readings
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Filter inputs: raw control values
// ---------------------------------------------------------------------------

/// The filter controls' current values, as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterInputs {
    pub temp_min: String,
    pub temp_max: String,
    pub humid_min: String,
    pub humid_max: String,
    pub time_min: String,
    pub time_max: String,
    pub date_enabled: bool,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub exclude_extreme: bool,
}

impl FilterInputs {
    /// Derive the predicate set from the current control values.
    ///
    /// Empty or non-numeric number fields impose no bound. A non-empty time
    /// field is converted with [`time_to_seconds`], so a malformed entry acts
    /// as midnight.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            temp_min: parse_bound(&self.temp_min),
            temp_max: parse_bound(&self.temp_max),
            humid_min: parse_bound(&self.humid_min),
            humid_max: parse_bound(&self.humid_max),
            time_min: parse_time_bound(&self.time_min),
            time_max: parse_time_bound(&self.time_max),
            date: self.date.filter(|_| self.date_enabled),
            location: self.location.clone(),
            exclude_extreme: self.exclude_extreme,
        }
    }

    /// Clear every control.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn parse_time_bound(s: &str) -> Option<u32> {
    let s = s.trim();
    (!s.is_empty()).then(|| time_to_seconds(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(time: &str, temp: f64, humid: f64, location: &str) -> Reading {
        Reading {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: time.parse().unwrap(),
            temp,
            humid,
            location: location.to_string(),
        }
    }

    fn sample() -> SensorDataset {
        SensorDataset::from_readings(vec![
            reading("08:00:00", 9.9, 50.0, "A"),
            reading("09:00:00", 10.0, 50.0, "B"),
            reading("10:00:00", 15.0, 19.0, "A"),
            reading("11:00:00", 20.0, 81.0, "B"),
            reading("12:00:00", 20.1, 50.0, "A"),
            reading("13:00:00", 36.0, 50.0, "A"),
        ])
    }

    #[test]
    fn no_bounds_keeps_everything_in_order() {
        let ds = sample();
        let criteria = FilterInputs::default().criteria();
        assert!(!criteria.has_active_filters());
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn temperature_range_is_inclusive() {
        let ds = sample();
        let inputs = FilterInputs {
            temp_min: "10".into(),
            temp_max: "20".into(),
            ..Default::default()
        };
        let idx = filtered_indices(&ds, &inputs.criteria());
        assert_eq!(idx, vec![1, 2, 3]);
        assert!(idx.iter().all(|&i| (10.0..=20.0).contains(&ds.readings[i].temp)));
    }

    #[test]
    fn extreme_toggle_uses_fixed_thresholds() {
        let ds = sample();
        let criteria = FilterCriteria {
            exclude_extreme: true,
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 1, 4]);
    }

    #[test]
    fn time_bounds_compare_in_seconds() {
        let ds = sample();
        let inputs = FilterInputs {
            time_min: "9:00".into(),
            time_max: "11:00:00".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &inputs.criteria()), vec![1, 2, 3]);
    }

    #[test]
    fn location_and_date_equality() {
        let ds = sample();
        let mut inputs = FilterInputs {
            location: Some("B".into()),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &inputs.criteria()), vec![1, 3]);

        inputs.location = None;
        inputs.date = NaiveDate::from_ymd_opt(2024, 1, 2);
        // Picker value is ignored until the date filter is switched on.
        assert_eq!(filtered_indices(&ds, &inputs.criteria()).len(), 6);
        inputs.date_enabled = true;
        assert!(filtered_indices(&ds, &inputs.criteria()).is_empty());
    }

    #[test]
    fn unparsable_numbers_impose_no_bound() {
        let inputs = FilterInputs {
            temp_min: "abc".into(),
            humid_max: "  ".into(),
            time_min: "bogus".into(),
            ..Default::default()
        };
        let c = inputs.criteria();
        assert_eq!(c.temp_min, None);
        assert_eq!(c.humid_max, None);
        assert_eq!(c.time_min, Some(0));
    }

    #[test]
    fn numeric_prefix_is_not_a_bound() {
        let inputs = FilterInputs {
            temp_min: "10abc".into(),
            humid_min: " 40 ".into(),
            ..Default::default()
        };
        let c = inputs.criteria();
        assert_eq!(c.temp_min, None);
        assert_eq!(c.humid_min, Some(40.0));
    }

    #[test]
    fn thresholds_themselves_are_not_extreme() {
        for (temp, humid) in [(0.0, 50.0), (35.0, 50.0), (20.0, 20.0), (20.0, 80.0), (0.0, 80.0)] {
            assert!(!is_extreme(&reading("10:00:00", temp, humid, "A")), "{temp} / {humid}");
        }
        for (temp, humid) in [(-0.1, 50.0), (35.1, 50.0), (20.0, 19.9), (20.0, 80.1)] {
            assert!(is_extreme(&reading("10:00:00", temp, humid, "A")), "{temp} / {humid}");
        }
    }

    #[test]
    fn humidity_range_is_inclusive() {
        let ds = SensorDataset::from_readings(vec![
            reading("08:00:00", 20.0, 29.9, "A"),
            reading("09:00:00", 20.0, 30.0, "A"),
            reading("10:00:00", 20.0, 45.0, "A"),
            reading("11:00:00", 20.0, 60.0, "A"),
            reading("12:00:00", 20.0, 60.1, "A"),
        ]);
        let inputs = FilterInputs {
            humid_min: "30".into(),
            humid_max: "60".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &inputs.criteria()), vec![1, 2, 3]);
    }
}
