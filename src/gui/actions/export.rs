// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Build the CSV and open the Save As dialog for it.
pub fn export(app: &mut App) {
    let download = app.orchestrator.export_csv();

    app.state.gui.save_path_text = app
        .state
        .options
        .export
        .suggested_path()
        .to_string_lossy()
        .into_owned();

    logd!("Export: awaiting save path (suggested {})", app.state.gui.save_path_text);
    app.pending_download = Some(download);
    app.status("Choose where to save the CSV");
}

/// User confirmed the dialog.
pub fn save(app: &mut App) {
    let Some(download) = app.pending_download.take() else {
        logd!("Export: Save clicked, but nothing is pending");
        return;
    };

    let result = file::resolve_save_path(&app.state.gui.save_path_text, &download.filename)
        .and_then(|path| file::write_download(&download, &path));

    match result {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    app.state.options.export.set_out_dir(parent);
                }
            }
            app.status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
            // Keep the dialog up so the path can be fixed.
            app.pending_download = Some(download);
        }
    }
}

pub fn cancel_save(app: &mut App) {
    if app.pending_download.take().is_some() {
        logd!("Export: Save cancelled");
        app.status("Export cancelled");
    }
}
