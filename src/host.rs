// src/host.rs
//
// The environment a scan runs in: a set of tabs, one of them active,
// each of which can have a content context injected and be messaged.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::consts::ERR_NO_RECEIVER;
use crate::config::options::ExtractOptions;
use crate::content::ContentScript;
use crate::error::ScanError;
use crate::net::{self, Location};
use crate::protocol::{Request, Response};

pub type ViewId = usize;

#[async_trait(?Send)]
pub trait PageHost {
    /// The tab currently in the foreground.
    async fn active_view(&self) -> Result<ViewId, ScanError>;

    /// (Re)load the tab's document and start a content context on it.
    async fn inject(&mut self, view: ViewId) -> Result<(), ScanError>;

    /// One request, exactly one reply (or a transport error).
    async fn send_message(&self, view: ViewId, request: &Request) -> Result<Response, ScanError>;
}

pub struct Tab {
    pub location: Location,
    /// Resolve links against this instead of the document URL.
    pub base_override: Option<Url>,
    content: Option<ContentScript>,
}

impl Tab {
    pub fn new(location: Location) -> Self {
        Self { location, base_override: None, content: None }
    }

    pub fn is_injected(&self) -> bool {
        self.content.is_some()
    }
}

pub struct TabHost {
    tabs: Vec<Tab>,
    active: Option<ViewId>,
    opts: ExtractOptions,
    client: Client,
}

impl TabHost {
    pub fn new(opts: ExtractOptions) -> reqwest::Result<Self> {
        Ok(Self::with_client(opts, net::http_client()?))
    }

    pub fn with_client(opts: ExtractOptions, client: Client) -> Self {
        Self { tabs: Vec::new(), active: None, opts, client }
    }

    /// Open a new tab in the foreground.
    pub fn open(&mut self, tab: Tab) -> ViewId {
        self.tabs.push(tab);
        let id = self.tabs.len() - 1;
        self.active = Some(id);
        logd!("Host: opened tab {} → {}", id, self.tabs[id].location);
        id
    }

    /// Point the active tab somewhere else, or open one if there is none.
    pub fn navigate(&mut self, tab: Tab) -> ViewId {
        match self.active.filter(|id| *id < self.tabs.len()) {
            Some(id) => {
                logd!("Host: tab {} navigates {} → {}", id, self.tabs[id].location, tab.location);
                self.tabs[id] = tab;
                id
            }
            None => self.open(tab),
        }
    }

    /// Nothing in the foreground anymore.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    pub fn tab(&self, view: ViewId) -> Option<&Tab> {
        self.tabs.get(view)
    }

    pub fn set_options(&mut self, opts: ExtractOptions) {
        self.opts = opts;
    }

    fn tab_or_err(&self, view: ViewId) -> Result<&Tab, ScanError> {
        self.tabs
            .get(view)
            .ok_or_else(|| ScanError::Injection(format!("No tab with id: {view}")))
    }
}

#[async_trait(?Send)]
impl PageHost for TabHost {
    async fn active_view(&self) -> Result<ViewId, ScanError> {
        self.active
            .filter(|id| *id < self.tabs.len())
            .ok_or(ScanError::NoActiveView)
    }

    async fn inject(&mut self, view: ViewId) -> Result<(), ScanError> {
        let tab = self.tab_or_err(view)?;
        let location = tab.location.clone();

        let (html, doc_url) = net::load(&self.client, &location)
            .await
            .map_err(|e| ScanError::Injection(format!("Cannot load {location}: {e}")))?;
        let url = tab.base_override.clone().unwrap_or(doc_url);

        let content = ContentScript::inject(html, url, self.opts.clone())
            .map_err(|e| ScanError::Injection(format!("Cannot start content context: {e}")))?;

        // Replaces (and shuts down) any earlier context on this tab.
        if let Some(tab) = self.tabs.get_mut(view) {
            tab.content = Some(content);
        }
        Ok(())
    }

    async fn send_message(&self, view: ViewId, request: &Request) -> Result<Response, ScanError> {
        let tab = self
            .tabs
            .get(view)
            .ok_or_else(|| ScanError::Transport(format!("No tab with id: {view}")))?;
        let content = tab
            .content
            .as_ref()
            .ok_or_else(|| ScanError::Transport(s!(ERR_NO_RECEIVER)))?;
        content.send_message(request).await
    }
}
