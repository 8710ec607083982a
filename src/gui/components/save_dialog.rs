// src/gui/components/save_dialog.rs
//
// Save As window for a pending export. Nothing is written until Save.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(download) = app.pending_download.as_ref() else { return };
    let summary = format!("{} ({} line(s), {})", download.filename, download.line_count(), download.mime);

    let mut save = false;
    let mut cancel = false;

    egui::Window::new("Save As")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(summary);
            ui.horizontal(|ui| {
                ui.label("Save to:");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.save_path_text)
                        .desired_width(360.0)
                        .font(egui::TextStyle::Monospace),
                );
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    save = true;
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() { save = true; }
                if ui.button("Cancel").clicked() { cancel = true; }
            });
        });

    if save {
        actions::save(app);
    } else if cancel || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions::cancel_save(app);
    }
}
