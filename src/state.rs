use chrono::NaiveDate;

use crate::color::ColorMap;
use crate::data::filter::{FilterInputs, filtered_indices};
use crate::data::loader::{DataSource, load_source};
use crate::data::model::{Column, Reading, SensorDataset};
use crate::data::sort::{SortState, sort_indices};
use crate::data::stats::{Summary, summarize};
use crate::i18n::{Label, Language};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Message shown in the top bar; rendered in the current language.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Load succeeded but some source rows were rejected.
    RowsSkipped(usize),
    /// Load failed; the view is empty.
    LoadFailed(String),
}

impl Status {
    pub fn text(&self, lang: Language) -> String {
        match self {
            Status::RowsSkipped(n) => format!("{n} {}", lang.text(Label::RowsSkipped)),
            Status::LoadFailed(e) => format!("{}: {e}", lang.text(Label::LoadError)),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where readings are loaded from.
    pub source: DataSource,

    /// Loaded reading set (None until a load succeeds).
    pub dataset: Option<SensorDataset>,

    /// Current values of the filter controls.
    pub inputs: FilterInputs,

    /// Table ordering.
    pub sort: SortState,

    /// Indices of readings passing the current filters, in table order.
    pub visible_indices: Vec<usize>,

    /// Per-location colours.
    pub color_map: ColorMap,

    pub language: Language,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl AppState {
    pub fn new(source: DataSource, language: Language) -> Self {
        Self {
            source,
            dataset: None,
            inputs: FilterInputs::default(),
            sort: SortState::default(),
            visible_indices: Vec::new(),
            color_map: ColorMap::default(),
            language,
            status: None,
        }
    }

    /// Load (or reload) readings from the current source.
    ///
    /// On failure the error is logged and shown; the view is left empty.
    pub fn load(&mut self) {
        match load_source(&self.source) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} readings ({} skipped) from {}",
                    dataset.len(),
                    dataset.skipped,
                    self.source
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", self.source);
                self.dataset = None;
                self.visible_indices.clear();
                self.status = Some(Status::LoadFailed(format!("{e:#}")));
            }
        }
    }

    /// Switch to a new source and load it.
    pub fn open(&mut self, source: DataSource) {
        self.source = source;
        self.load();
    }

    /// Ingest a newly loaded dataset and show it with the current controls.
    pub fn set_dataset(&mut self, dataset: SensorDataset) {
        self.color_map = ColorMap::new(&dataset.locations);
        // a location that no longer exists would hide everything
        if let Some(loc) = &self.inputs.location {
            if !dataset.locations.contains(loc) {
                self.inputs.location = None;
            }
        }
        self.status = (dataset.skipped > 0).then_some(Status::RowsSkipped(dataset.skipped));
        self.dataset = Some(dataset);
        self.refresh();
    }

    /// Recompute the visible rows: filter the full set, then re-apply the
    /// current sort without toggling it.
    pub fn refresh(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let criteria = self.inputs.criteria();
        let mut indices = filtered_indices(ds, &criteria);
        sort_indices(ds, &mut indices, &self.sort);
        log::debug!("{} of {} readings visible", indices.len(), ds.len());
        self.visible_indices = indices;
    }

    /// Column header activation. The visible rows are rebuilt from the
    /// full set so ties fall back to feed order, not the previous sort.
    pub fn sort_by(&mut self, column: Column) {
        self.sort.activate(column);
        log::debug!(
            "Sort by {column:?} ({})",
            if self.sort.ascending { "asc" } else { "desc" }
        );
        self.refresh();
    }

    /// Clear every filter control and the table ordering.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.sort = SortState::default();
        self.refresh();
    }

    /// Turn the date filter on or off. Enabling it without a chosen date
    /// picks the first date in the data.
    pub fn set_date_filter(&mut self, enabled: bool) {
        self.inputs.date_enabled = enabled;
        if enabled && self.inputs.date.is_none() {
            self.inputs.date = Some(self.default_date());
        }
        self.refresh();
    }

    fn default_date(&self) -> NaiveDate {
        self.dataset
            .as_ref()
            .and_then(|ds| ds.dates.first().copied())
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Readings in table order.
    pub fn visible_readings(&self) -> impl Iterator<Item = &Reading> + '_ {
        let readings = self
            .dataset
            .as_ref()
            .map(|ds| ds.readings.as_slice())
            .unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &readings[i])
    }

    /// Temperature and humidity statistics over the visible rows.
    pub fn summaries(&self) -> (Summary, Summary) {
        let (temps, humids): (Vec<f64>, Vec<f64>) =
            self.visible_readings().map(|r| (r.temp, r.humid)).unzip();
        (summarize(&temps), summarize(&humids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_json;

    fn two_rows() -> AppState {
        let ds = parse_json(
            r#"[
                {"date":"2024-01-01","time":"10:00:00","temp":25,"humid":50,"location":"A"},
                {"date":"2024-01-01","time":"09:00:00","temp":-5,"humid":90,"location":"B"}
            ]"#,
        )
        .unwrap();
        let mut state = AppState::new(DataSource::parse("data.json"), Language::English);
        state.set_dataset(ds);
        state
    }

    fn locations(state: &AppState) -> Vec<String> {
        state.visible_readings().map(|r| r.location.clone()).collect()
    }

    #[test]
    fn exclude_extreme_drops_out_of_range_row() {
        let mut state = two_rows();
        state.inputs.exclude_extreme = true;
        state.refresh();
        assert_eq!(locations(&state), ["A"]);
    }

    #[test]
    fn time_sort_puts_earlier_reading_first() {
        let mut state = two_rows();
        state.sort_by(Column::Time);
        assert_eq!(locations(&state), ["B", "A"]);
        state.sort_by(Column::Time);
        assert_eq!(locations(&state), ["A", "B"]);
    }

    #[test]
    fn filter_change_keeps_sort_order() {
        let mut state = two_rows();
        state.sort_by(Column::Temp);
        state.inputs.humid_min = "0".into();
        state.refresh();
        assert_eq!(locations(&state), ["B", "A"]);
        assert!(state.sort.ascending);
    }

    #[test]
    fn reset_restores_feed_order() {
        let mut state = two_rows();
        state.inputs.location = Some("A".into());
        state.sort_by(Column::Temp);
        state.reset();
        assert_eq!(locations(&state), ["A", "B"]);
        assert_eq!(state.sort, SortState::default());
    }

    #[test]
    fn statistics_follow_the_filter() {
        let mut state = two_rows();
        let (temp, _) = state.summaries();
        assert_eq!(temp.mean_text(), "10.0");

        state.inputs.location = Some("Z".into());
        state.refresh();
        let (temp, humid) = state.summaries();
        assert_eq!(temp.max_text(), "-");
        assert_eq!(humid.mode_text("(others)"), "-");
    }

    #[test]
    fn enabling_date_filter_picks_first_date() {
        let mut state = two_rows();
        state.set_date_filter(true);
        assert_eq!(state.inputs.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(state.visible_indices.len(), 2);
    }

    #[test]
    fn header_click_matches_fresh_sort_of_filtered_set() {
        let ds = parse_json(
            r#"[
                {"date":"2024-01-01","time":"10:00:00","temp":20,"humid":50,"location":"B"},
                {"date":"2024-01-01","time":"11:00:00","temp":20,"humid":50,"location":"A"}
            ]"#,
        )
        .unwrap();
        let mut state = AppState::new(DataSource::parse("data.json"), Language::English);
        state.set_dataset(ds);

        state.sort_by(Column::Location);
        assert_eq!(state.visible_indices, vec![1, 0]);
        state.sort_by(Column::Temp);

        let ds = state.dataset.as_ref().unwrap();
        let mut expected = filtered_indices(ds, &state.inputs.criteria());
        sort_indices(ds, &mut expected, &state.sort);
        assert_eq!(state.visible_indices, expected);
        assert_eq!(state.visible_indices, vec![0, 1]);

        // re-rendering with unchanged inputs leaves the table as it is
        state.refresh();
        assert_eq!(state.visible_indices, expected);
    }

    #[test]
    fn skipped_rows_are_reported_in_the_ui_language() {
        let ds = parse_json(
            r#"[
                {"date":"2024-01-01","time":"10:00:00","temp":20,"humid":50},
                {"date":"2024-01-01","time":"bad","temp":20,"humid":50}
            ]"#,
        )
        .unwrap();
        let mut state = AppState::new(DataSource::parse("data.json"), Language::English);
        state.set_dataset(ds);
        let status = state.status.clone().unwrap();
        assert_eq!(status, Status::RowsSkipped(1));
        assert_eq!(status.text(Language::English), "1 malformed rows skipped");
        assert_ne!(status.text(Language::Japanese), status.text(Language::English));
    }

    #[test]
    fn failed_load_leaves_view_empty() {
        let mut state = two_rows();
        state.open(DataSource::parse("/nonexistent/data.json"));
        assert!(state.dataset.is_none());
        assert!(state.visible_indices.is_empty());
        assert!(matches!(state.status, Some(Status::LoadFailed(_))));
    }
}
