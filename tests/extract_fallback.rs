// tests/extract_fallback.rs
//
// Extractor behaviour on small hand-written pages, no threads involved.

use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use url::Url;

use translink::config::options::ExtractOptions;
use translink::extract::{child_text, descendant_text, find_translate_links, Document, Extractor, FallbackChain};
use translink::{ExtractError, TranslationRecord};

const PAGE_URL: &str = "https://www.spanishdict.com/translate/hola";

fn doc(body: &str) -> Document {
    let html = format!("<!doctype html><html><head><title>t</title></head><body>{body}</body></html>");
    Document::parse(&html, Url::parse(PAGE_URL).unwrap())
}

fn scan(body: &str) -> Vec<TranslationRecord> {
    find_translate_links(&doc(body), &ExtractOptions::default()).unwrap()
}

#[test]
fn records_follow_document_order_and_skip_other_links() {
    let records = scan(
        r#"
        <a href="/translate/perro"><span lang="es">perro</span><span lang="en">dog</span></a>
        <a href="/conjugate/ser">ser</a>
        <a href="/translate/gato"><span lang="es">gato</span><span lang="en">cat</span></a>
        <a href="/translate/casa"><span lang="es">casa</span><span lang="en">house</span></a>
        "#,
    );
    let words: Vec<&str> = records.iter().map(|r| r.source_text.as_str()).collect();
    assert_eq!(words, vec!["perro", "gato", "casa"]);
    assert_eq!(records[1].target_text, "cat");
}

#[test]
fn anchors_without_any_text_are_dropped() {
    let records = scan(
        r#"
        <a href="/translate/uno">uno</a>
        <a href="/translate/vacio">   </a>
        <a href="/translate/imagen"><img src="x.png" alt="x"></a>
        <a href="/translate/spans"><span lang="es"> </span><span class="translation"></span></a>
        "#,
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_text, "uno");
    assert_eq!(records[0].target_text, "");
}

#[test]
fn lang_tagged_span_beats_word_class() {
    let records = scan(
        r#"<a href="/translate/perro"><span class="word">PERRO (word)</span><span lang="es">perro</span></a>"#,
    );
    assert_eq!(records[0].source_text, "perro");
}

#[test]
fn class_fallbacks_apply_when_no_lang_span() {
    let records = scan(
        r#"<a href="/translate/mesa"><div class="word"> mesa </div><div class="translation">table</div></a>"#,
    );
    assert_eq!(records[0], TranslationRecord::new("mesa", "table", "https://www.spanishdict.com/translate/mesa"));
}

#[test]
fn empty_tagged_span_falls_through_to_next_strategy() {
    let records = scan(
        r#"<a href="/translate/sol"><span lang="es">  </span><span class="word">sol</span><span lang="en">sun</span></a>"#,
    );
    assert_eq!(records[0].source_text, "sol");
    assert_eq!(records[0].target_text, "sun");
}

#[test]
fn positional_children_count_whitespace_nodes() {
    // childNodes[0] is the newline text node, so the source side is empty and
    // the target side picks up <b>.
    let records = scan("<a href=\"/translate/gato\">\n  <b>gato</b><i>cat</i></a>");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_text, "");
    assert_eq!(records[0].target_text, "gato");
}

#[test]
fn positional_children_read_text_and_comments() {
    let records = scan(r#"<a href="/translate/uno"><!-- uno -->one</a>"#);
    assert_eq!(records[0].source_text, "uno");
    assert_eq!(records[0].target_text, "one");
}

#[test]
fn nested_markup_inside_tagged_span_is_flattened() {
    let records = scan(r#"<a href="/translate/el-perro"><span lang="es">el <b>perro</b></span></a>"#);
    assert_eq!(records[0].source_text, "el perro");
}

#[test]
fn links_resolve_against_page_or_base_element() {
    let records = scan(r#"<a href="/translate/perro">perro</a><a href="https://other.example/translate/x">x</a>"#);
    assert_eq!(records[0].link_url, "https://www.spanishdict.com/translate/perro");
    assert_eq!(records[1].link_url, "https://other.example/translate/x");

    let html = r#"<html><head><base href="https://mirror.example/es/"></head>
        <body><a href="./translate/perro">perro</a></body></html>"#;
    let d = Document::parse(html, Url::parse(PAGE_URL).unwrap());
    let records = find_translate_links(&d, &ExtractOptions::default()).unwrap();
    assert_eq!(records[0].link_url, "https://mirror.example/es/translate/perro");
}

#[test]
fn custom_marker_and_languages() {
    let opts = ExtractOptions {
        marker: "/traduire/".into(),
        source_lang: "fr".into(),
        ..ExtractOptions::default()
    };
    let d = doc(r#"<a href="/traduire/chien"><span lang="fr">chien</span><span lang="en">dog</span></a>
                  <a href="/translate/perro">perro</a>"#);
    let records = find_translate_links(&d, &opts).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_text, "chien");
}

#[test]
fn invalid_selector_is_one_error_not_partial_results() {
    let opts = ExtractOptions { source_class: String::new(), ..ExtractOptions::default() };
    let err = find_translate_links(&doc(r#"<a href="/translate/a">a</a>"#), &opts).unwrap_err();
    let ExtractError::Selector { selector, .. } = err;
    assert_eq!(selector, ".");
}

#[test]
fn strategies_work_on_their_own() {
    let html = Html::parse_fragment(r#"<a href="/translate/x"><span class="word">palabra</span>texto</a>"#);
    let a = html.select(&Selector::parse("a").unwrap()).next().unwrap();

    let by_class = FallbackChain::new().then(descendant_text(Selector::parse(".word").unwrap()));
    assert_eq!(by_class.resolve(a), "palabra");

    let second_child = FallbackChain::new().then(child_text(1));
    assert_eq!(second_child.resolve(a), "texto");

    let missing = FallbackChain::new().then(child_text(5));
    assert_eq!(missing.resolve(a), "");
    assert!(FallbackChain::new().is_empty());
}

#[test]
fn extractor_can_be_built_from_custom_chains() {
    let extractor = Extractor::with_chains(
        Selector::parse("a[href*='/translate/']").unwrap(),
        FallbackChain::new().then(child_text(0)),
        FallbackChain::new(),
    );
    let records = extractor.extract(&doc(r#"<a href="/translate/luz">luz<span lang="en">light</span></a>"#));
    assert_eq!(records[0].source_text, "luz");
    assert_eq!(records[0].target_text, "");
}
