// src/gui/actions/scan.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    host::Tab,
    net::Location,
    orchestrator::ScanState,
};

pub fn scan(app: &mut App) {
    // Results are about to be replaced; an unsaved export of the old ones goes too.
    app.pending_download = None;

    let page_text = app.state.gui.page_text.trim().to_string();
    {
        let host = app.orchestrator.host_mut();
        host.set_options(app.state.options.extract.clone());
        match Location::parse(&page_text) {
            Some(location) => {
                host.navigate(Tab::new(location));
            }
            None => host.deactivate(),
        }
    }

    logf!("Scan: requested page={:?}", page_text);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scan happens ←
    let state = app.rt.block_on(app.orchestrator.run_scan(Some(&mut prog)));

    match state {
        ScanState::Rendered => {
            let n = app.orchestrator.results().len();
            app.status(format!("Ready: {n} link(s)"));
        }
        ScanState::Errored => {
            logd!("Scan: errored, table shows the message");
        }
        ScanState::Idle | ScanState::Scanning => {
            loge!("Scan: ended in unexpected state {:?}", state);
        }
    }
}
