// src/record.rs
use serde::{Deserialize, Serialize};

/// One bilingual word pair found on a page.
///
/// On the wire (and in JSON dumps) the fields keep the short names the
/// content side has always used: `spanish`, `english`, `link`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    #[serde(rename = "spanish")]
    pub source_text: String,
    #[serde(rename = "english")]
    pub target_text: String,
    #[serde(rename = "link")]
    pub link_url: String,
}

impl TranslationRecord {
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        link_url: impl Into<String>,
    ) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            link_url: link_url.into(),
        }
    }

    /// A record is only worth emitting if it carries some text.
    pub fn has_text(&self) -> bool {
        !self.source_text.is_empty() || !self.target_text.is_empty()
    }
}
