// src/orchestrator.rs
//
// Drives one session: scan the active tab, hold the results, render the
// table, hand out the CSV download.

use crate::config::consts::NO_RESULTS_MESSAGE;
use crate::error::ScanError;
use crate::file::Download;
use crate::host::PageHost;
use crate::progress::{NullProgress, Progress};
use crate::protocol::Request;
use crate::record::TranslationRecord;
use crate::table::{MessageKind, TableModel, TableRow};

/// `Idle → Scanning → {Rendered | Errored}`; a new scan may start from any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Rendered,
    Errored,
}

const SCAN_STAGES: usize = 3;

pub struct Orchestrator<H: PageHost> {
    host: H,
    results: Vec<TranslationRecord>,
    table: TableModel,
    state: ScanState,
}

impl<H: PageHost> Orchestrator<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            results: Vec::new(),
            table: TableModel::default(),
            state: ScanState::Idle,
        }
    }

    #[inline]
    pub fn host(&self) -> &H { &self.host }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    #[inline]
    pub fn results(&self) -> &[TranslationRecord] { &self.results }

    #[inline]
    pub fn table(&self) -> &TableModel { &self.table }

    #[inline]
    pub fn state(&self) -> ScanState { self.state }

    /// Scan the active tab. Failures end up in the table, never in the
    /// return value; the returned state says which way it went.
    pub async fn run_scan(&mut self, progress: Option<&mut dyn Progress>) -> ScanState {
        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };

        self.state = ScanState::Scanning;
        self.results = Vec::new();
        self.render_table(&[]);

        progress.begin(SCAN_STAGES);
        logf!("Scan: Begin");

        match self.exchange(progress).await {
            Ok(records) => {
                logf!("Scan: OK records={}", records.len());
                progress.log(&format!("Found {} link(s)", records.len()));
                self.render_table(&records);
                self.results = records;
                self.state = ScanState::Rendered;
            }
            Err(e) => {
                loge!("Scan: Error kind={} msg={}", e.kind(), e);
                progress.log(&format!("Error: {e}"));
                self.render_error(&e);
                self.state = ScanState::Errored;
            }
        }

        progress.finish();
        self.state
    }

    async fn exchange(&mut self, progress: &mut dyn Progress) -> Result<Vec<TranslationRecord>, ScanError> {
        progress.log("Looking for the active tab");
        let view = self.host.active_view().await?;
        progress.item_done("resolve");

        progress.log("Loading page");
        self.host.inject(view).await?;
        progress.item_done("inject");

        progress.log("Asking page for translation links");
        let response = self
            .host
            .send_message(view, &Request::find_translate_links())
            .await?;
        progress.item_done("exchange");

        response.into_result()
    }

    /// CSV of the current results, ready to be offered for saving.
    /// With no results this is the header line alone.
    pub fn export_csv(&self) -> Download {
        let download = Download::csv(&self.results);
        logf!(
            "Export: {} record(s) → {} ({} bytes)",
            self.results.len(),
            download.filename,
            download.contents.len()
        );
        download
    }

    pub fn render_table(&mut self, records: &[TranslationRecord]) {
        self.table.clear();

        if records.is_empty() {
            self.table.show_message(NO_RESULTS_MESSAGE, MessageKind::NoResults);
            return;
        }

        self.table.header_visible = true;
        self.table.body.extend(records.iter().map(TableRow::from_record));
        self.table.export_visible = true;
    }

    fn render_error(&mut self, err: &ScanError) {
        self.table.show_message(format!("Error: {err}"), MessageKind::Error);
    }
}
