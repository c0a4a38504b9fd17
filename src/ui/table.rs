use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::color::DANGER;
use crate::data::filter::is_extreme;
use crate::data::model::Column;
use crate::i18n::Label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reading table
// ---------------------------------------------------------------------------

/// Render the reading table. Header clicks change the sort; all visible
/// rows are laid out again every frame.
pub fn reading_table(ui: &mut Ui, state: &mut AppState) {
    let lang = state.language;
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(lang.text(Label::NoData));
        });
        return;
    };

    let mut clicked: Option<Column> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(TableColumn::auto().at_least(90.0), Column::ALL.len() - 1)
        .column(TableColumn::remainder())
        .min_scrolled_height(0.0)
        .header(22.0, |mut header| {
            for column in Column::ALL {
                header.col(|ui| {
                    let text = format!("{}{}", lang.column(column), state.sort.arrow_for(column));
                    if ui.button(RichText::new(text).strong()).clicked() {
                        clicked = Some(column);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let reading = &dataset.readings[state.visible_indices[row.index()]];
                let dangerous = is_extreme(reading);
                for column in Column::ALL {
                    row.col(|ui| {
                        let mut text = RichText::new(reading.cell(column));
                        if dangerous {
                            text = text.color(DANGER).strong();
                        } else if column == Column::Location {
                            text = text.color(state.color_map.color_for(&reading.location));
                        }
                        ui.label(text);
                    });
                }
            });
        });

    if let Some(column) = clicked {
        state.sort_by(column);
    }
}
