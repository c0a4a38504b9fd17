//! Write a synthetic `data.json` and `data.csv` of sensor readings.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Daily temperature swing: coolest before dawn, warmest mid-afternoon.
fn diurnal(t: NaiveDateTime, base: f64, amplitude: f64) -> f64 {
    let hour = t.hour() as f64 + t.minute() as f64 / 60.0;
    base + amplitude * ((hour - 9.0) / 24.0 * 2.0 * std::f64::consts::PI).sin()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One row in the `data.json` layout.
#[derive(Serialize)]
struct Row {
    date: String,
    time: String,
    temp: f64,
    humid: f64,
    location: String,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (location, base temp °C, daily swing, base humidity %)
    let sites = [
        ("lab", 22.0, 3.0, 45.0),
        ("greenhouse", 27.0, 9.0, 70.0),
        ("garage", 8.0, 7.0, 55.0),
    ];

    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("start date")?;
    let step = Duration::minutes(20);
    let samples_per_site = 3 * 24 * 3; // three days

    let mut rows = Vec::new();
    for i in 0..samples_per_site {
        let t = start + step * i;
        for &(location, base, swing, humid_base) in &sites {
            let temp = diurnal(t, base, swing) + rng.gauss(0.0, 0.6);
            let humid = (humid_base - (temp - base) * 1.5 + rng.gauss(0.0, 3.0)).clamp(5.0, 99.0);
            rows.push(Row {
                date: t.format("%Y-%m-%d").to_string(),
                time: t.format("%H:%M:%S").to_string(),
                temp: round1(temp),
                humid: round1(humid),
                location: location.to_string(),
            });
        }
    }

    let json_path = "data.json";
    let file = std::fs::File::create(json_path).context("creating data.json")?;
    serde_json::to_writer_pretty(file, &rows).context("writing data.json")?;

    // Headerless, the layout the collection server appends to.
    let csv_path = "data.csv";
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(csv_path)
        .context("creating data.csv")?;
    for row in &rows {
        writer.serialize(row).context("writing data.csv")?;
    }
    writer.flush()?;

    println!(
        "Wrote {} readings from {} locations to {json_path} and {csv_path}",
        rows.len(),
        sites.len()
    );
    Ok(())
}
