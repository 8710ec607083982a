// src/content.rs
//
// The content side of a tab: owns the parsed page on its own thread
// (the DOM is not Send) and answers requests that arrive as JSON text.

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use tokio::sync::oneshot;
use url::Url;

use crate::config::consts::{ERR_NO_RECEIVER, ERR_PORT_CLOSED};
use crate::config::options::ExtractOptions;
use crate::error::ScanError;
use crate::extract::{find_translate_links, Document};
use crate::protocol::{self, Request, Response};

struct Envelope {
    request: String,
    reply: oneshot::Sender<String>,
}

/// Handle to a running content context. Dropping it shuts the context down.
pub struct ContentScript {
    tx: mpsc::Sender<Envelope>,
}

impl ContentScript {
    /// Start a content context over `html`, loaded from `url`.
    pub fn inject(html: String, url: Url, opts: ExtractOptions) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Envelope>();

        thread::Builder::new()
            .name(s!("content"))
            .spawn(move || {
                let doc = Document::parse(&html, url);
                logd!("Content: loaded {}", doc.url());
                for envelope in rx {
                    on_message(&doc, &opts, envelope);
                }
                logd!("Content: unloaded {}", doc.url());
            })?;

        Ok(Self { tx })
    }

    /// Send one request and wait for its single reply.
    pub async fn send_message(&self, request: &Request) -> Result<Response, ScanError> {
        let text = protocol::encode(request)?;
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(Envelope { request: text, reply: reply_tx })
            .map_err(|_| ScanError::Transport(s!(ERR_NO_RECEIVER)))?;

        let reply = reply_rx
            .await
            .map_err(|_| ScanError::Transport(s!(ERR_PORT_CLOSED)))?;

        protocol::decode_response(&reply)
    }
}

/// Requests we do not understand get no reply at all; the sender sees the
/// port close.
fn on_message(doc: &Document, opts: &ExtractOptions, envelope: Envelope) {
    let request = match protocol::decode_request(&envelope.request) {
        Ok(r) => r,
        Err(e) => {
            loge!("Content: unreadable request: {}", e);
            return;
        }
    };
    if !request.is_find_translate_links() {
        logd!("Content: ignoring action {:?}", request.action);
        return;
    }

    let response = match panic::catch_unwind(AssertUnwindSafe(|| find_translate_links(doc, opts))) {
        Ok(Ok(records)) => Response::Records(records),
        Ok(Err(e)) => {
            loge!("Content: find_translate_links failed: {}", e);
            Response::Error { error: e.to_string() }
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            loge!("Content: find_translate_links panicked: {}", msg);
            Response::Error { error: msg }
        }
    };

    match protocol::encode(&response) {
        Ok(text) => {
            // Receiver may have gone away; nothing left to tell it.
            let _ = envelope.reply.send(text);
        }
        Err(e) => loge!("Content: cannot encode response: {}", e),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("extraction panicked")
    }
}
