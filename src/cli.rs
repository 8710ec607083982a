// src/cli.rs
//
// Headless front end: one scan of one page, table to stdout, CSV to disk.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use url::Url;

use crate::config::consts::{CSV_FILENAME, LINK_MARKER, SOURCE_LANG, TARGET_LANG};
use crate::config::options::ExtractOptions;
use crate::file;
use crate::host::{Tab, TabHost};
use crate::net::Location;
use crate::orchestrator::{Orchestrator, ScanState};
use crate::progress::Progress;

#[derive(Debug, Parser)]
#[command(author, version, about = "Find translation links on a dictionary page and export them as CSV")]
pub struct Arguments {
    /// Page to scan: http(s) URL or local HTML file
    pub page: String,

    /// Where to save the CSV (a directory gets translation_links.csv inside it)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Resolve relative links against this URL instead of the page's own
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Substring a link's href must contain
    #[arg(long, default_value = LINK_MARKER)]
    pub marker: String,

    /// lang attribute of the source-language span
    #[arg(long, default_value = SOURCE_LANG)]
    pub source_lang: String,

    /// lang attribute of the target-language span
    #[arg(long, default_value = TARGET_LANG)]
    pub target_lang: String,

    /// Print the table only, do not write a CSV file
    #[arg(long)]
    pub no_export: bool,
}

impl Arguments {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.marker.clone(),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            ..ExtractOptions::default()
        }
    }
}

/// Scan stages go to stderr so stdout stays the table.
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, stages: usize) {
        self.total = stages;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, stage: &str) {
        self.done += 1;
        eprintln!("  [{}/{}] {stage} ok", self.done, self.total);
    }
}

pub async fn run(args: Arguments) -> Result<ScanState> {
    let mut host = TabHost::new(args.extract_options()).wrap_err("Cannot build HTTP client")?;

    match Location::parse(&args.page) {
        Some(location) => {
            let mut tab = Tab::new(location);
            tab.base_override = args.base_url.clone();
            host.open(tab);
        }
        None => logd!("CLI: empty page argument, no tab opened"),
    }

    let mut orchestrator = Orchestrator::new(host);
    let mut progress = CliProgress::new();
    let state = orchestrator.run_scan(Some(&mut progress)).await;

    println!("{}", orchestrator.table().to_text());

    if args.no_export {
        return Ok(state);
    }
    if !orchestrator.table().export_visible {
        eprintln!("Nothing to export");
        return Ok(state);
    }

    let download = orchestrator.export_csv();
    let out_text = args
        .out
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let path = file::resolve_save_path(&out_text, CSV_FILENAME)
        .map_err(|e| eyre!("Bad output path {out_text:?}: {e}"))?;
    let written = file::write_download(&download, &path)
        .map_err(|e| eyre!("Cannot write {}: {e}", path.display()))?;

    logf!("CLI: wrote {}", written.display());
    eprintln!("Wrote {}", written.display());
    Ok(state)
}
