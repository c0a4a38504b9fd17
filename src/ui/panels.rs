use eframe::egui::{self, Color32, Grid, RichText, ScrollArea, TextEdit, Ui};
use egui_extras::DatePickerButton;

use crate::data::loader::DataSource;
use crate::data::model::Column;
use crate::data::stats::Summary;
use crate::i18n::{Label, Language};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Any edited control triggers a recompute.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let lang = state.language;

    ui.heading(lang.text(Label::Filters));
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label(lang.text(Label::NoData));
        return;
    };
    let locations = dataset.locations.clone();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            Grid::new("range_filters")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    let inputs = &mut state.inputs;
                    let fields = [
                        (Label::TempMin, &mut inputs.temp_min, "0"),
                        (Label::TempMax, &mut inputs.temp_max, "35"),
                        (Label::HumidMin, &mut inputs.humid_min, "20"),
                        (Label::HumidMax, &mut inputs.humid_max, "80"),
                        (Label::TimeMin, &mut inputs.time_min, "HH:MM:SS"),
                        (Label::TimeMax, &mut inputs.time_max, "HH:MM:SS"),
                    ];
                    for (label, value, hint) in fields {
                        changed |= bound_field(ui, lang.text(label), value, hint);
                    }
                });
            ui.separator();

            // ---- Date ----
            let mut date_enabled = state.inputs.date_enabled;
            if ui
                .checkbox(&mut date_enabled, lang.text(Label::FilterByDate))
                .changed()
            {
                state.set_date_filter(date_enabled);
            }
            let date_enabled = state.inputs.date_enabled;
            if let Some(date) = state.inputs.date.as_mut() {
                ui.add_enabled_ui(date_enabled, |ui: &mut Ui| {
                    if ui
                        .add(DatePickerButton::new(date).id_salt("date_filter"))
                        .changed()
                    {
                        changed = true;
                    }
                });
            }
            ui.separator();

            // ---- Location ----
            ui.strong(lang.text(Label::Location));
            let all = lang.text(Label::AllLocations);
            let selected_text = state.inputs.location.clone().unwrap_or_else(|| all.to_string());
            egui::ComboBox::from_id_salt("location_filter")
                .selected_text(selected_text)
                .show_ui(ui, |ui: &mut Ui| {
                    changed |= ui
                        .selectable_value(&mut state.inputs.location, None, all)
                        .changed();
                    for loc in &locations {
                        let text = RichText::new(loc).color(state.color_map.color_for(loc));
                        changed |= ui
                            .selectable_value(&mut state.inputs.location, Some(loc.clone()), text)
                            .changed();
                    }
                });
            ui.separator();

            changed |= ui
                .checkbox(&mut state.inputs.exclude_extreme, lang.text(Label::ExcludeExtreme))
                .changed();

            ui.add_space(8.0);
            if ui.button(lang.text(Label::ResetAll)).clicked() {
                state.reset();
                changed = false;
            }
        });

    if changed {
        state.refresh();
    }
}

fn bound_field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let changed = ui
        .add(TextEdit::singleline(value).hint_text(hint).desired_width(90.0))
        .changed();
    ui.end_row();
    changed
}

// ---------------------------------------------------------------------------
// Bottom panel – statistics
// ---------------------------------------------------------------------------

/// Render max / median / mean / mode for temperature and humidity over the
/// visible rows. Computed afresh every frame.
pub fn stats_panel(ui: &mut Ui, state: &AppState) {
    let lang = state.language;
    let (temp, humid) = state.summaries();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(lang.text(Label::Statistics));
        ui.separator();
        Grid::new("statistics")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui: &mut Ui| {
                ui.label("");
                for label in [Label::Max, Label::Median, Label::Mean, Label::Mode] {
                    ui.strong(lang.text(label));
                }
                ui.end_row();
                stats_row(ui, lang, Column::Temp, &temp);
                stats_row(ui, lang, Column::Humid, &humid);
            });
    });
}

fn stats_row(ui: &mut Ui, lang: Language, column: Column, summary: &Summary) {
    ui.label(lang.column(column));
    ui.monospace(summary.max_text());
    ui.monospace(summary.median_text());
    ui.monospace(summary.mean_text());
    ui.monospace(summary.mode_text(lang.text(Label::Others)));
    ui.end_row();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let lang = state.language;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(lang.text(Label::File), |ui: &mut Ui| {
            if ui.button(lang.text(Label::Open)).clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button(lang.text(Label::Reload)).clicked() {
                state.load();
                ui.close_menu();
            }
        });

        egui::ComboBox::from_id_salt("language")
            .selected_text(lang.display_name())
            .show_ui(ui, |ui: &mut Ui| {
                for &l in Language::all() {
                    ui.selectable_value(&mut state.language, l, l.display_name());
                }
            });

        ui.separator();
        ui.label(state.source.to_string());

        if let Some(ds) = &state.dataset {
            ui.separator();
            ui.label(counts_text(
                lang,
                ds.len(),
                state.visible_indices.len(),
                state.inputs.criteria().has_active_filters(),
            ));
        }

        if let Some(status) = &state.status {
            ui.separator();
            ui.label(RichText::new(status.text(lang)).color(Color32::RED));
        }
    });
}

/// "N readings loaded, M visible" in the UI language.
fn counts_text(lang: Language, loaded: usize, visible: usize, filtered: bool) -> String {
    let mut text = format!(
        "{loaded} {}, {visible} {}",
        lang.text(Label::ReadingsLoaded),
        lang.text(Label::ReadingsVisible)
    );
    if filtered {
        text.push(' ');
        text.push_str(lang.text(Label::Filtered));
    }
    text
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let lang = state.language;
    let file = rfd::FileDialog::new()
        .set_title(lang.text(Label::OpenDialogTitle))
        .add_filter(lang.text(Label::SupportedFiles), &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(DataSource::File(path));
    }
}
