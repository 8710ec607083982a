// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::{BOM, CSV_HEADERS};
use crate::record::TranslationRecord;

/// Quote a field, doubling any embedded quotes. Nothing else is escaped:
/// commas and newlines are safe inside the quotes.
pub fn escape_field(text: &str) -> String {
    join!("\"", &text.replace('"', "\"\""), "\"")
}

/// Write one quoted row (no line terminator).
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        write!(w, "{}", escape_field(cell))?;
    }
    Ok(())
}

/// Header line plus one line per record, joined by `\n` with no trailing
/// newline. The header is written bare.
pub fn convert_to_csv(records: &[TranslationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for r in records {
        let mut buf: Vec<u8> = Vec::new();
        let _ = write_row(&mut buf, &[r.source_text.as_str(), r.target_text.as_str(), r.link_url.as_str()]);
        match String::from_utf8(buf) {
            Ok(s) => lines.push(s),
            Err(e) => lines.push(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
        }
    }

    lines.join("\n")
}

/// File contents as saved: BOM first so spreadsheet apps pick UTF-8.
pub fn with_bom(csv: &str) -> String {
    let mut out = String::with_capacity(csv.len() + BOM.len_utf8());
    out.push(BOM);
    out.push_str(csv);
    out
}

/// Minimal reader for files this module wrote (quotes + CRLF tolerant).
/// Strips a leading BOM.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}
