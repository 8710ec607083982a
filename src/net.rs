// src/net.rs
//
// Loading a page: http(s) through reqwest, anything else from disk.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub type NetResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Where a tab's document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Web(Url),
    File(PathBuf),
}

impl Location {
    /// `http(s)://` and `file://` URLs are taken as such; any other text is a
    /// local path.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match Url::parse(text) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => Some(Location::Web(u)),
            Ok(u) if u.scheme() == "file" => {
                u.to_file_path().ok().map(Location::File)
            }
            _ => Some(Location::File(PathBuf::from(text))),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Web(u) => write!(f, "{u}"),
            Location::File(p) => write!(f, "{}", p.display()),
        }
    }
}

pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// Fetch the document text and the URL it ended up at (after redirects, or
/// the `file://` URL of the canonical path).
pub async fn load(client: &Client, loc: &Location) -> NetResult<(String, Url)> {
    match loc {
        Location::Web(url) => {
            let resp = client.get(url.clone()).send().await?.error_for_status()?;
            let final_url = resp.url().clone();
            let body = resp.text().await?;
            Ok((body, final_url))
        }
        Location::File(path) => {
            let abs = tokio::fs::canonicalize(path).await?;
            let body = tokio::fs::read_to_string(&abs).await?;
            let url = Url::from_file_path(&abs)
                .map_err(|_| format!("Not an absolute path: {}", abs.display()))?;
            Ok((body, url))
        }
    }
}
