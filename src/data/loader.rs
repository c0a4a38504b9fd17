use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Reading, SensorDataset};
use super::time::{parse_clock, time_str_to_date};
use crate::error::RecordError;

/// Location recorded for rows that do not name one.
pub const UNKNOWN_LOCATION: &str = "unknown";

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the session's readings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `http(s)://host/data.json`, fetched with one GET.
    Url(String),
    /// Local `.json` or `.csv` file.
    File(PathBuf),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the full reading set from a source.
pub fn load_source(source: &DataSource) -> Result<SensorDataset> {
    match source {
        DataSource::Url(url) => fetch_url(url),
        DataSource::File(path) => load_file(path),
    }
}

/// GET `url` and parse the body as a JSON reading array.
///
/// No retry and no timeout: a failure is returned to the caller as-is.
pub fn fetch_url(url: &str) -> Result<SensorDataset> {
    let body = ureq::get(url)
        .call()
        .with_context(|| format!("GET {url}"))?
        .into_string()
        .with_context(|| format!("reading response body from {url}"))?;
    parse_json(&body)
}

/// Load a reading set from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "date": "...", "time": "...", "temp": .., "humid": .., "location": "..." }, ...]`
/// * `.csv`  – headerless rows `date,time,temp,humid,location`
pub fn load_file(path: &Path) -> Result<SensorDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Numbers arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(f64),
    Text(String),
}

/// One row as it appears on the wire. Accepts the capitalised keys the
/// sensor clients send as well as the lowercase keys of `data.json`.
#[derive(Debug, Deserialize)]
struct RawReading {
    #[serde(default, alias = "Date")]
    date: Option<String>,
    #[serde(default, alias = "Time")]
    time: Option<String>,
    #[serde(default, alias = "Temperature")]
    temp: Option<Scalar>,
    #[serde(default, alias = "Humidity")]
    humid: Option<Scalar>,
    #[serde(default, alias = "Location")]
    location: Option<String>,
}

/// Parse a top-level JSON array of readings.
///
/// A malformed array element is skipped (and counted); a document that is
/// not an array is an error.
pub fn parse_json(text: &str) -> Result<SensorDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let records = match root {
        JsonValue::Array(records) => records,
        _ => bail!("Expected top-level JSON array"),
    };

    let rows = records.into_iter().enumerate().map(|(i, rec)| {
        let raw = serde_json::from_value::<RawReading>(rec);
        (i, raw.map_err(RecordError::from).and_then(RawReading::into_reading))
    });
    Ok(collect_rows(rows))
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Parse headerless `date,time,temp,humid[,location]` rows, the layout the
/// collection server appends to `data.csv`. A leading `date,...` header row
/// is tolerated.
pub fn parse_csv<R: Read>(input: R) -> Result<SensorDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            // the stream itself failed; nothing after this row is readable
            Err(e) if e.is_io_error() => {
                return Err(e).with_context(|| format!("reading CSV row {row_no}"));
            }
            Err(e) => {
                rows.push((row_no, Err(RecordError::from(e))));
                continue;
            }
        };
        if row_no == 0 && record.get(0).is_some_and(|f| f.eq_ignore_ascii_case("date")) {
            continue;
        }
        let field = |i: usize| record.get(i).map(str::to_string);
        let raw = RawReading {
            date: field(0),
            time: field(1),
            temp: field(2).map(Scalar::Text),
            humid: field(3).map(Scalar::Text),
            location: field(4),
        };
        rows.push((row_no, raw.into_reading()));
    }
    Ok(collect_rows(rows))
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

impl RawReading {
    fn into_reading(self) -> Result<Reading, RecordError> {
        let time_text = self.time.ok_or(RecordError::MissingField("time"))?;
        let time = parse_clock(&time_text).ok_or_else(|| RecordError::InvalidField {
            field: "time",
            value: time_text.clone(),
        })?;

        let date = match self.date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => parse_date(d).ok_or_else(|| RecordError::InvalidField {
                field: "date",
                value: d.to_string(),
            })?,
            // Clients that only report a clock time are placed on today.
            _ => time_str_to_date(&time_text)
                .map(|ts| ts.date())
                .ok_or(RecordError::MissingField("date"))?,
        };

        let temp = scalar_to_f64(self.temp, "temp")?;
        let humid = scalar_to_f64(self.humid, "humid")?;

        let location = match self.location {
            Some(l) if !l.trim().is_empty() => l.trim().to_string(),
            _ => UNKNOWN_LOCATION.to_string(),
        };

        Ok(Reading {
            date,
            time,
            temp,
            humid,
            location,
        })
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
}

fn scalar_to_f64(val: Option<Scalar>, field: &'static str) -> Result<f64, RecordError> {
    let v = match val.ok_or(RecordError::MissingField(field))? {
        Scalar::Number(n) => n,
        Scalar::Text(s) => s.trim().parse::<f64>().map_err(|_| RecordError::InvalidField {
            field,
            value: s.clone(),
        })?,
    };
    if !v.is_finite() {
        return Err(RecordError::InvalidField {
            field,
            value: v.to_string(),
        });
    }
    Ok(v)
}

fn collect_rows<I>(rows: I) -> SensorDataset
where
    I: IntoIterator<Item = (usize, Result<Reading, RecordError>)>,
{
    let mut readings = Vec::new();
    let mut skipped = 0;
    for (row_no, row) in rows {
        match row {
            Ok(r) => {
                log::trace!("Row {row_no}: {r}");
                readings.push(r);
            }
            Err(e) => {
                log::warn!("Skipping row {row_no}: {e}");
                skipped += 1;
            }
        }
    }
    let mut dataset = SensorDataset::from_readings(readings);
    dataset.skipped = skipped;
    dataset
}
