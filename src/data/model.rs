use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// ---------------------------------------------------------------------------
// Column – one field of a reading, in table order
// ---------------------------------------------------------------------------

/// The fixed column set shown in the table and usable as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Time,
    Temp,
    Humid,
    Location,
}

impl Column {
    /// Table order.
    pub const ALL: [Column; 5] = [
        Column::Date,
        Column::Time,
        Column::Temp,
        Column::Humid,
        Column::Location,
    ];
}

// ---------------------------------------------------------------------------
// Reading – one sensor observation
// ---------------------------------------------------------------------------

/// A single sensor observation (one row of `data.json`).
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Temperature in °C.
    pub temp: f64,
    /// Relative humidity in %.
    pub humid: f64,
    pub location: String,
}

impl Reading {
    /// Combined date + time, the canonical ordering key for time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Text for one table cell.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Date => self.date.format("%Y-%m-%d").to_string(),
            Column::Time => self.time.format("%H:%M:%S").to_string(),
            Column::Temp => format!("{}", self.temp),
            Column::Humid => format!("{}", self.humid),
            Column::Location => self.location.clone(),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}°C {}% @{}",
            self.date, self.time, self.temp, self.humid, self.location
        )
    }
}

// ---------------------------------------------------------------------------
// SensorDataset – the complete loaded set
// ---------------------------------------------------------------------------

/// All readings of a session plus the value sets the filter controls offer.
#[derive(Debug, Clone, Default)]
pub struct SensorDataset {
    /// Readings in feed order.
    pub readings: Vec<Reading>,
    /// Distinct locations, sorted.
    pub locations: BTreeSet<String>,
    /// Distinct dates, sorted.
    pub dates: BTreeSet<NaiveDate>,
    /// Source rows rejected during ingestion.
    pub skipped: usize,
}

impl SensorDataset {
    /// Build the value indices from the loaded readings.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let locations = readings.iter().map(|r| r.location.clone()).collect();
        let dates = readings.iter().map(|r| r.date).collect();
        SensorDataset {
            readings,
            locations,
            dates,
            skipped: 0,
        }
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
