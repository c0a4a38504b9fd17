use std::io::Write;

use sensor_view::data::filter::{FilterInputs, filtered_indices};
use sensor_view::data::loader::{DataSource, load_file, load_source};
use sensor_view::data::model::Column;
use sensor_view::data::sort::{SortState, sort_by_column};
use sensor_view::data::stats::summarize;
use sensor_view::i18n::Language;
use sensor_view::state::AppState;

const READINGS_JSON: &str = r#"[
    {"date":"2024-01-01","time":"10:00:00","temp":25,"humid":50,"location":"A"},
    {"date":"2024-01-01","time":"09:00:00","temp":-5,"humid":90,"location":"B"},
    {"date":"2024-01-02","time":"08:15:00","temp":"18.6","humid":"42","location":"A"}
]"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn json_file_loads_through_source() {
    let file = write_temp(".json", READINGS_JSON);
    let ds = load_source(&DataSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.locations.len(), 2);
    assert_eq!(ds.dates.len(), 2);
}

#[test]
fn csv_file_matches_json_file() {
    let csv = write_temp(
        ".csv",
        "2024-01-01,10:00:00,25,50,A\n2024-01-01,09:00:00,-5,90,B\n2024-01-02,08:15:00,18.6,42,A\n",
    );
    let json = write_temp(".json", READINGS_JSON);
    let from_csv = load_file(csv.path()).unwrap();
    let from_json = load_file(json.path()).unwrap();
    assert_eq!(from_csv.readings, from_json.readings);
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".parquet", "");
    assert!(load_file(file.path()).is_err());
}

#[test]
fn filter_sort_summarize_end_to_end() {
    let file = write_temp(".json", READINGS_JSON);
    let ds = load_file(file.path()).unwrap();

    let inputs = FilterInputs {
        exclude_extreme: true,
        ..Default::default()
    };
    let mut idx = filtered_indices(&ds, &inputs.criteria());
    assert_eq!(idx, vec![0, 2]);

    let mut sort = SortState::default();
    sort_by_column(&ds, &mut idx, Column::Time, &mut sort);
    assert_eq!(idx, vec![0, 2]);
    sort_by_column(&ds, &mut idx, Column::Time, &mut sort);
    assert_eq!(idx, vec![2, 0]);

    let temps: Vec<f64> = idx.iter().map(|&i| ds.readings[i].temp).collect();
    let s = summarize(&temps);
    assert_eq!(s.max_text(), "25.0");
    assert_eq!(s.mean_text(), "21.8");
}

#[test]
fn view_controller_two_row_scenario() {
    let file = write_temp(
        ".json",
        r#"[
            {"date":"2024-01-01","time":"10:00:00","temp":25,"humid":50,"location":"A"},
            {"date":"2024-01-01","time":"09:00:00","temp":-5,"humid":90,"location":"B"}
        ]"#,
    );
    let mut state = AppState::new(DataSource::File(file.path().to_path_buf()), Language::Japanese);
    state.load();
    assert_eq!(state.visible_indices, vec![0, 1]);

    state.sort_by(Column::Time);
    let first = state.visible_readings().next().unwrap();
    assert_eq!(first.location, "B");

    state.inputs.exclude_extreme = true;
    state.refresh();
    let rows: Vec<&str> = state.visible_readings().map(|r| r.location.as_str()).collect();
    assert_eq!(rows, ["A"]);
}
