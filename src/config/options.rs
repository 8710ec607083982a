// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

/// What the extractor looks for on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Substring an anchor's href must contain to count as a translation link.
    pub marker: String,
    pub source_lang: String,
    pub target_lang: String,
    pub source_class: String,
    pub target_class: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: s!(LINK_MARKER),
            source_lang: s!(SOURCE_LANG),
            target_lang: s!(TARGET_LANG),
            source_class: s!(SOURCE_CLASS),
            target_class: s!(TARGET_CLASS),
        }
    }
}

impl ExtractOptions {
    pub fn anchor_selector(&self) -> String {
        format!("a[href*=\"{}\"]", css_string(&self.marker))
    }

    pub fn source_lang_selector(&self) -> String {
        format!("span[lang=\"{}\"]", css_string(&self.source_lang))
    }

    pub fn target_lang_selector(&self) -> String {
        format!("span[lang=\"{}\"]", css_string(&self.target_lang))
    }

    pub fn source_class_selector(&self) -> String {
        join!(".", &self.source_class)
    }

    pub fn target_class_selector(&self) -> String {
        join!(".", &self.target_class)
    }
}

/// Escape a value for use inside a double-quoted CSS string.
fn css_string(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn set_out_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.out_dir = dir.into();
    }

    /// Where the save dialog starts: `<out_dir>/translation_links.csv`.
    pub fn suggested_path(&self) -> PathBuf {
        self.out_dir.join(CSV_FILENAME)
    }
}
