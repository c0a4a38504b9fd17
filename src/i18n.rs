//! UI label lookup.
//!
//! The viewer ships Japanese labels (the language the sensor dashboards were
//! first written in) and English.

use serde::{Deserialize, Serialize};

use crate::data::model::Column;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Japanese,
    English,
}

/// Every translatable string outside the column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Filters,
    TempMin,
    TempMax,
    HumidMin,
    HumidMax,
    TimeMin,
    TimeMax,
    FilterByDate,
    Location,
    AllLocations,
    ExcludeExtreme,
    ResetAll,
    Statistics,
    Max,
    Median,
    Mean,
    Mode,
    Others,
    ChartTime,
    ChartValue,
    File,
    Open,
    Reload,
    NoData,
    ReadingsLoaded,
    ReadingsVisible,
    Filtered,
    RowsSkipped,
    LoadError,
    OpenDialogTitle,
    SupportedFiles,
}

impl Language {
    /// Get the locale code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Get the display name for this language (in its native script)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[Language::Japanese, Language::English]
    }

    /// Parse a language from its locale code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Language::Japanese),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Column header text.
    pub fn column(&self, column: Column) -> &'static str {
        use Column::*;
        match (self, column) {
            (Language::Japanese, Date) => "日付",
            (Language::Japanese, Time) => "時刻",
            (Language::Japanese, Temp) => "温度(℃)",
            (Language::Japanese, Humid) => "湿度(%)",
            (Language::Japanese, Location) => "場所",
            (Language::English, Date) => "Date",
            (Language::English, Time) => "Time",
            (Language::English, Temp) => "Temperature (°C)",
            (Language::English, Humid) => "Humidity (%)",
            (Language::English, Location) => "Location",
        }
    }

    pub fn text(&self, label: Label) -> &'static str {
        match self {
            Language::Japanese => japanese(label),
            Language::English => english(label),
        }
    }
}

fn japanese(label: Label) -> &'static str {
    use Label::*;
    match label {
        Filters => "フィルター",
        TempMin => "温度 下限",
        TempMax => "温度 上限",
        HumidMin => "湿度 下限",
        HumidMax => "湿度 上限",
        TimeMin => "時刻 開始",
        TimeMax => "時刻 終了",
        FilterByDate => "日付で絞り込む",
        Location => "場所",
        AllLocations => "すべて",
        ExcludeExtreme => "異常値を除外",
        ResetAll => "すべてリセット",
        Statistics => "統計",
        Max => "最大",
        Median => "中央値",
        Mean => "平均",
        Mode => "最頻値",
        Others => "ほか",
        ChartTime => "時刻",
        ChartValue => "値",
        File => "ファイル",
        Open => "開く…",
        Reload => "再読み込み",
        NoData => "データがありません",
        ReadingsLoaded => "件を読み込み",
        ReadingsVisible => "件を表示",
        Filtered => "(絞り込み中)",
        RowsSkipped => "件の不正な行をスキップしました",
        LoadError => "読み込みエラー",
        OpenDialogTitle => "センサーデータを開く",
        SupportedFiles => "対応ファイル",
    }
}

fn english(label: Label) -> &'static str {
    use Label::*;
    match label {
        Filters => "Filters",
        TempMin => "Temp min",
        TempMax => "Temp max",
        HumidMin => "Humidity min",
        HumidMax => "Humidity max",
        TimeMin => "Time from",
        TimeMax => "Time to",
        FilterByDate => "Filter by date",
        Location => "Location",
        AllLocations => "all",
        ExcludeExtreme => "Exclude extreme values",
        ResetAll => "Reset all",
        Statistics => "Statistics",
        Max => "Max",
        Median => "Median",
        Mean => "Mean",
        Mode => "Mode",
        Others => "(others)",
        ChartTime => "Time",
        ChartValue => "Value",
        File => "File",
        Open => "Open…",
        Reload => "Reload",
        NoData => "No data loaded.",
        ReadingsLoaded => "readings loaded",
        ReadingsVisible => "visible",
        Filtered => "(filtered)",
        RowsSkipped => "malformed rows skipped",
        LoadError => "Error",
        OpenDialogTitle => "Open sensor readings",
        SupportedFiles => "Supported files",
    }
}
