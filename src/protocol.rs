// src/protocol.rs
//
// Messages crossing between the orchestrator and a content context.
// Both directions travel as JSON text, never as shared Rust values.

use serde::{Deserialize, Serialize};

use crate::config::consts::ACTION_FIND_LINKS;
use crate::error::ScanError;
use crate::record::TranslationRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub action: String,
}

impl Request {
    pub fn find_translate_links() -> Self {
        Self { action: s!(ACTION_FIND_LINKS) }
    }

    pub fn is_find_translate_links(&self) -> bool {
        self.action == ACTION_FIND_LINKS
    }
}

/// Reply to `findTranslateLinks`: a bare array of records, or `{"error": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Records(Vec<TranslationRecord>),
    Error { error: String },
}

impl Response {
    pub fn into_result(self) -> Result<Vec<TranslationRecord>, ScanError> {
        match self {
            Response::Records(records) => Ok(records),
            Response::Error { error } => Err(ScanError::Extraction(error)),
        }
    }
}

pub fn encode<T: Serialize>(msg: &T) -> Result<String, ScanError> {
    serde_json::to_string(msg).map_err(|e| ScanError::Protocol(e.to_string()))
}

pub fn decode_request(text: &str) -> Result<Request, ScanError> {
    serde_json::from_str(text).map_err(|e| ScanError::Protocol(e.to_string()))
}

pub fn decode_response(text: &str) -> Result<Response, ScanError> {
    serde_json::from_str(text).map_err(|e| ScanError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_shape() {
        let text = encode(&Request::find_translate_links()).unwrap();
        assert_eq!(text, r#"{"action":"findTranslateLinks"}"#);
    }

    #[test]
    fn error_reply_becomes_extraction_error() {
        let resp = decode_response(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ScanError::Extraction(s!("boom"))));
    }

    #[test]
    fn record_reply_uses_short_field_names() {
        let resp = decode_response(r#"[{"spanish":"gato","english":"cat","link":"https://x/translate/gato"}]"#)
            .unwrap();
        let records = resp.into_result().unwrap();
        assert_eq!(records[0].source_text, "gato");
        assert_eq!(records[0].target_text, "cat");
    }
}
