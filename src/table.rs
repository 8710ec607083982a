// src/table.rs
//! TableModel: what the results area shows.
//!
//! - A header row that can be shown or hidden.
//! - Body rows: either one row per record (source, target, link cell) or a
//!   single message row spanning every column.
//! - Whether the export action is offered.
//!
//! The orchestrator writes it; the GUI draws it and the CLI prints it.

use crate::config::consts::{CSV_HEADERS, TABLE_COLUMNS};
use crate::core::sanitize::normalize_ws;
use crate::record::TranslationRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    NoResults,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableRow {
    Record {
        source: String,
        target: String,
        /// Rendered as clickable text.
        link: String,
    },
    Message {
        text: String,
        colspan: usize,
        kind: MessageKind,
    },
}

impl TableRow {
    pub fn from_record(r: &TranslationRecord) -> Self {
        TableRow::Record {
            source: r.source_text.clone(),
            target: r.target_text.clone(),
            link: r.link_url.clone(),
        }
    }

    pub fn message(text: impl Into<String>, kind: MessageKind) -> Self {
        TableRow::Message { text: text.into(), colspan: TABLE_COLUMNS, kind }
    }

    /// Number of cells the row occupies in the markup sense (a spanning
    /// message counts as one).
    pub fn cell_count(&self) -> usize {
        match self {
            TableRow::Record { .. } => TABLE_COLUMNS,
            TableRow::Message { .. } => 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableModel {
    pub header_visible: bool,
    pub body: Vec<TableRow>,
    pub export_visible: bool,
}

impl TableModel {
    pub fn headers() -> &'static [&'static str] {
        &CSV_HEADERS
    }

    pub fn clear(&mut self) {
        self.body.clear();
    }

    pub fn nrows(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The single message row, if that is what the body holds.
    pub fn message(&self) -> Option<(&str, MessageKind)> {
        match self.body.as_slice() {
            [TableRow::Message { text, kind, .. }] => Some((text.as_str(), *kind)),
            _ => None,
        }
    }

    /// Replace the body with one spanning message row; header and export hidden.
    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.header_visible = false;
        self.body.clear();
        self.body.push(TableRow::message(text, kind));
        self.export_visible = false;
    }

    /// Plain-text rendering: tab-separated cells, header first when visible.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.body.len() + 1);
        if self.header_visible {
            lines.push(Self::headers().join("\t"));
        }
        for row in &self.body {
            match row {
                TableRow::Record { source, target, link } => {
                    lines.push(format!("{}\t{}\t{link}", normalize_ws(source), normalize_ws(target)));
                }
                TableRow::Message { text, .. } => lines.push(text.clone()),
            }
        }
        lines.join("\n")
    }
}
