// src/gui/components/scan_bar.rs
//
// Page field, the two commands, and the status line.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_text)
                .hint_text("https://… or path/to/page.html")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let blue = egui::Color32::from_rgb(40, 120, 200);
        let run_clicked = ui
            .add(egui::Button::new(egui::RichText::new("Find links").color(egui::Color32::WHITE).strong()).fill(blue))
            .clicked();

        if run_clicked || submitted {
            actions::scan(app);
        }

        if app.orchestrator.table().export_visible && ui.button("Export CSV").clicked() {
            actions::export(app);
        }
    });

    ui.horizontal(|ui| {
        let status = app.status_text();
        ui.label(egui::RichText::new(format!("Status: {status}")).weak());
    });
    ui.add_space(4.0);
}
