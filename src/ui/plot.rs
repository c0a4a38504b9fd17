use std::ops::RangeInclusive;

use chrono::DateTime;
use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::color::{HUMID_LINE, TEMP_LINE};
use crate::data::model::{Column, Reading};
use crate::data::time::format_clock;
use crate::i18n::Label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series preparation
// ---------------------------------------------------------------------------

/// Points of the two chart lines, x in seconds since the epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub temp: Vec<[f64; 2]>,
    pub humid: Vec<[f64; 2]>,
    /// Whether the readings cover more than one date.
    pub spans_days: bool,
}

/// Order readings by combined date + time and split them into the
/// temperature and humidity lines. Table order has no effect.
pub fn chart_series<'a>(readings: impl IntoIterator<Item = &'a Reading>) -> ChartSeries {
    let mut rows: Vec<&Reading> = readings.into_iter().collect();
    rows.sort_by_key(|r| r.timestamp());

    let spans_days = match (rows.first(), rows.last()) {
        (Some(a), Some(b)) => a.date != b.date,
        _ => false,
    };

    let (temp, humid) = rows
        .iter()
        .map(|r| {
            let x = r.timestamp().and_utc().timestamp() as f64;
            ([x, r.temp], [x, r.humid])
        })
        .unzip();

    ChartSeries {
        temp,
        humid,
        spans_days,
    }
}

fn axis_label(x: f64, with_date: bool) -> String {
    let secs = x.round() as i64;
    if with_date {
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return dt.format("%m-%d %H:%M").to_string();
        }
    }
    format_clock(secs)
}

// ---------------------------------------------------------------------------
// Time-series plot
// ---------------------------------------------------------------------------

/// Render the temperature / humidity chart over the visible readings.
///
/// Lines are rebuilt from the visible set on every frame.
pub fn time_series_plot(ui: &mut Ui, state: &AppState) {
    let lang = state.language;
    let series = chart_series(state.visible_readings());
    let with_date = series.spans_days;

    Plot::new("sensor_plot")
        .legend(Legend::default())
        .x_axis_label(lang.text(Label::ChartTime))
        .y_axis_label(lang.text(Label::ChartValue))
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_label(mark.value, with_date)
        })
        .label_formatter(move |name, value| {
            let x = axis_label(value.x, with_date);
            if name.is_empty() {
                x
            } else {
                format!("{name}\n{x}\n{:.1}", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let temp = Line::new(PlotPoints::from(series.temp))
                .name(lang.column(Column::Temp))
                .color(TEMP_LINE)
                .width(1.5);
            let humid = Line::new(PlotPoints::from(series.humid))
                .name(lang.column(Column::Humid))
                .color(HUMID_LINE)
                .width(1.5);
            plot_ui.line(temp);
            plot_ui.line(humid);
        });
}
