// src/extract.rs
//
// Finds translation links in a parsed document and pulls the two
// texts out of each anchor through ordered fallback chains.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::options::ExtractOptions;
use crate::core::dom::{base_url, child_node, query_first, resolve_href, text_content};
use crate::core::sanitize::trim_text;
use crate::error::ExtractError;
use crate::record::TranslationRecord;

/// One way of getting text out of an anchor. `None` means "nothing here".
pub type Strategy = Box<dyn Fn(ElementRef<'_>) -> Option<String>>;

/// Text of the first descendant matching `sel`.
pub fn descendant_text(sel: Selector) -> Strategy {
    Box::new(move |anchor| query_first(anchor, &sel).map(|el| el.text().collect()))
}

/// `textContent` of the anchor's n-th child node. Positional on purpose:
/// a leading whitespace text node counts as child 0.
pub fn child_text(n: usize) -> Strategy {
    Box::new(move |anchor| child_node(anchor, n).map(text_content))
}

/// Strategies tried in order; the first one yielding non-empty trimmed text wins.
#[derive(Default)]
pub struct FallbackChain {
    strategies: Vec<Strategy>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, strategy: Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn resolve(&self, anchor: ElementRef<'_>) -> String {
        self.strategies
            .iter()
            .filter_map(|strategy| strategy(anchor))
            .map(|text| trim_text(&text).to_string())
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

fn compile(selector: String) -> Result<Selector, ExtractError> {
    Selector::parse(&selector).map_err(|e| ExtractError::Selector {
        reason: format!("{e:?}"),
        selector: selector.clone(),
    })
}

/// A loaded page: parsed tree plus the URL it came from.
pub struct Document {
    html: Html,
    url: Url,
}

impl Document {
    pub fn parse(text: &str, url: Url) -> Self {
        Self { html: Html::parse_document(text), url }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

pub struct Extractor {
    anchors: Selector,
    source: FallbackChain,
    target: FallbackChain,
}

impl Extractor {
    /// Source side: lang-tagged span, `.word`, first child node.
    /// Target side: lang-tagged span, `.translation`, second child node.
    pub fn new(opts: &ExtractOptions) -> Result<Self, ExtractError> {
        let anchors = compile(opts.anchor_selector())?;

        let source = FallbackChain::new()
            .then(descendant_text(compile(opts.source_lang_selector())?))
            .then(descendant_text(compile(opts.source_class_selector())?))
            .then(child_text(0));

        let target = FallbackChain::new()
            .then(descendant_text(compile(opts.target_lang_selector())?))
            .then(descendant_text(compile(opts.target_class_selector())?))
            .then(child_text(1));

        Ok(Self { anchors, source, target })
    }

    /// Build from explicit chains, e.g. to exercise one strategy on its own.
    pub fn with_chains(anchors: Selector, source: FallbackChain, target: FallbackChain) -> Self {
        Self { anchors, source, target }
    }

    /// Record for one anchor, or `None` when both sides came up empty.
    pub fn record_for(&self, anchor: ElementRef<'_>, base: &Url) -> Option<TranslationRecord> {
        let record = TranslationRecord {
            source_text: self.source.resolve(anchor),
            target_text: self.target.resolve(anchor),
            link_url: resolve_href(base, anchor.value().attr("href").unwrap_or_default()),
        };
        record.has_text().then_some(record)
    }

    /// All records on the page, in document order.
    pub fn extract(&self, doc: &Document) -> Vec<TranslationRecord> {
        let base = base_url(&doc.html, &doc.url);
        doc.html
            .select(&self.anchors)
            .filter_map(|anchor| self.record_for(anchor, &base))
            .collect()
    }
}

/// One-shot scan of a document with the given options.
pub fn find_translate_links(
    doc: &Document,
    opts: &ExtractOptions,
) -> Result<Vec<TranslationRecord>, ExtractError> {
    let extractor = Extractor::new(opts)?;
    let records = extractor.extract(doc);
    logd!("Extract: {} record(s) on {}", records.len(), doc.url);
    Ok(records)
}
