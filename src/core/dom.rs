// src/core/dom.rs
//
// DOM helpers over `scraper`'s tree that mirror what a browser reports
// for `node.textContent` and `element.querySelector`.

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// `textContent` of an arbitrary node: text nodes and comments give their
/// data, elements the concatenation of all descendant text nodes.
/// Doctypes, the document node and processing instructions give nothing.
pub fn text_content(node: ego_tree::NodeRef<'_, Node>) -> String {
    match node.value() {
        Node::Text(t) => t.text.to_string(),
        Node::Comment(c) => c.comment.to_string(),
        Node::Element(_) => ElementRef::wrap(node)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default(),
        _ => s!(),
    }
}

/// First descendant of `el` matching `sel` (querySelector semantics).
pub fn query_first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// The n-th child node of `el`, whitespace text nodes included.
pub fn child_node(el: ElementRef<'_>, n: usize) -> Option<ego_tree::NodeRef<'_, Node>> {
    el.children().nth(n)
}

/// Effective base URL for resolving hrefs: the first `<base href>` resolved
/// against the document URL, or the document URL itself.
pub fn base_url(doc: &Html, doc_url: &Url) -> Url {
    let Ok(sel) = Selector::parse("base[href]") else { return doc_url.clone() };
    doc.select(&sel)
        .next()
        .and_then(|b| b.value().attr("href"))
        .and_then(|href| doc_url.join(href).ok())
        .unwrap_or_else(|| doc_url.clone())
}

/// `anchor.href`: the attribute resolved against `base`, or the raw value if
/// it does not resolve.
pub fn resolve_href(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(u) => u.to_string(),
        Err(_) => href.to_string(),
    }
}
