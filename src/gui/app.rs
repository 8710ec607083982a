// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tokio::runtime::Runtime;

use crate::{
    config::state::AppState,
    file::Download,
    host::TabHost,
    orchestrator::Orchestrator,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    // Scans are awaited on the UI thread, one at a time.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let state = AppState::default();
    let host = TabHost::new(state.options.extract.clone())?;

    eframe::run_native(
        "Translation Links",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, host, rt)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // owns the current results and the table model
    pub orchestrator: Orchestrator<TabHost>,

    // export waiting for the Save As dialog
    pub pending_download: Option<Download>,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    pub(crate) rt: Runtime,
}

impl App {
    pub fn new(state: AppState, host: TabHost, rt: Runtime) -> Self {
        logf!("Init: out_dir={}", state.options.export.out_dir().display());
        Self {
            state,
            orchestrator: Orchestrator::new(host),
            pending_download: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            rt,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut guard) = self.status.lock() {
            *guard = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("scan_bar").show(ctx, |ui| {
            crate::gui::components::scan_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::results_table::draw(ui, self);
        });

        crate::gui::components::save_dialog::draw(ctx, self);
    }
}
