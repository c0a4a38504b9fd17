use std::collections::HashMap;

/// Display value for a statistic over no data.
pub const NO_DATA: &str = "-";

/// Most frequent value of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mode {
    /// First-encountered value among those with the highest count.
    pub value: f64,
    /// Other values share the same count.
    pub tied: bool,
}

/// Descriptive statistics of one numeric column. `None` means no data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub max: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub mode: Option<Mode>,
}

/// Reduce a column to max, median, mean and mode.
///
/// The median is the element at index `n / 2` of the ascending copy; for an
/// even count that is the upper of the two middle values, not their average.
pub fn summarize(values: &[f64]) -> Summary {
    if values.is_empty() {
        return Summary::default();
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = sorted[sorted.len() / 2];

    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Summary {
        max: Some(max),
        median: Some(median),
        mean: Some(mean),
        mode: mode(values),
    }
}

fn mode(values: &[f64]) -> Option<Mode> {
    // (value, count) in first-seen order
    let mut counts: Vec<(f64, usize)> = Vec::new();
    let mut slot: HashMap<u64, usize> = HashMap::new();
    for &v in values {
        // fold -0.0 into 0.0 so both count as one value
        let key = (if v == 0.0 { 0.0f64 } else { v }).to_bits();
        let i = *slot.entry(key).or_insert_with(|| {
            counts.push((v, 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }

    let best = counts.iter().map(|&(_, n)| n).max()?;
    let mut leaders = counts.iter().filter(|&&(_, n)| n == best);
    let (value, _) = *leaders.next()?;
    Some(Mode {
        value,
        tied: leaders.next().is_some(),
    })
}

impl Summary {
    pub fn max_text(&self) -> String {
        one_decimal(self.max)
    }

    pub fn median_text(&self) -> String {
        one_decimal(self.median)
    }

    pub fn mean_text(&self) -> String {
        one_decimal(self.mean)
    }

    /// Mode as shown in the panel; a tie appends `others_marker`.
    pub fn mode_text(&self, others_marker: &str) -> String {
        match self.mode {
            None => NO_DATA.to_string(),
            Some(Mode { value, tied: false }) => format!("{value}"),
            Some(Mode { value, tied: true }) => format!("{value} {others_marker}"),
        }
    }
}

fn one_decimal(v: Option<f64>) -> String {
    v.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.1}"))
}
