// src/gui/components/results_table.rs
//
// Draws the TableModel. A message row spans the whole area in place of
// the table; record rows get a clickable link cell.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::app::App,
    table::{MessageKind, TableModel, TableRow},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = app.orchestrator.table();

    if let Some((text, kind)) = table.message() {
        let rt = match kind {
            MessageKind::Error => RichText::new(text).color(egui::Color32::from_rgb(0xDC, 0x61, 0x49)),
            MessageKind::NoResults => RichText::new(text).italics().weak(),
        };
        ui.add_space(8.0);
        ui.vertical_centered(|ui| { ui.label(rt); });
        return;
    }

    if table.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Open a page and press Find links").weak());
        });
        return;
    }

    let rows = &table.body;
    let builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(200.0).at_least(60.0).clip(true))
        .column(Column::initial(200.0).at_least(60.0).clip(true))
        .column(Column::remainder().at_least(120.0).clip(true));

    let body = |body: egui_extras::TableBody<'_>| {
        body.rows(20.0, rows.len(), |mut row| {
            let Some(TableRow::Record { source, target, link }) = rows.get(row.index()) else {
                return;
            };
            row.col(|ui| {
                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                ui.label(source.as_str());
            });
            row.col(|ui| {
                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                ui.label(target.as_str());
            });
            row.col(|ui| {
                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                ui.add(egui::Hyperlink::from_label_and_url(link.as_str(), link).open_in_new_tab(true))
                    .on_hover_text(link.as_str());
            });
        });
    };

    if table.header_visible {
        builder
            .header(22.0, |mut header| {
                for h in TableModel::headers() {
                    header.col(|ui| { ui.strong(*h); });
                }
            })
            .body(body);
    } else {
        builder.body(body);
    }
}
