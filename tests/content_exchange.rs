// tests/content_exchange.rs
//
// Real host, real content thread, pages read from disk.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use url::Url;

use translink::config::options::ExtractOptions;
use translink::content::ContentScript;
use translink::host::{PageHost, Tab, TabHost};
use translink::net::Location;
use translink::protocol::{Request, Response};
use translink::table::MessageKind;
use translink::{Orchestrator, ScanError, ScanState};

const PAGE: &str = r#"<!doctype html>
<html><body>
  <ul>
    <li><a href="/translate/perro"><span lang="es">perro</span> <span lang="en">dog</span></a></li>
    <li><a href="/translate/gato"><span class="word">gato</span><span class="translation">cat</span></a></li>
    <li><a href="/translate/nada"></a></li>
    <li><a href="/about">about</a></li>
  </ul>
</body></html>"#;

fn write_page(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

fn host_for(path: &Path, base: Option<&str>) -> TabHost {
    let mut host = TabHost::new(ExtractOptions::default()).unwrap();
    let mut tab = Tab::new(Location::File(path.to_path_buf()));
    tab.base_override = base.map(|b| Url::parse(b).unwrap());
    host.open(tab);
    host
}

#[tokio::test]
async fn scan_of_local_page_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path(), "perro.html", PAGE);

    let mut orch = Orchestrator::new(host_for(&page, Some("https://www.spanishdict.com/translate/perro")));
    assert_eq!(orch.run_scan(None).await, ScanState::Rendered);

    let links: Vec<&str> = orch.results().iter().map(|r| r.link_url.as_str()).collect();
    assert_eq!(
        links,
        vec![
            "https://www.spanishdict.com/translate/perro",
            "https://www.spanishdict.com/translate/gato",
        ]
    );
    assert_eq!(orch.results()[1].target_text, "cat");
    assert!(orch.table().export_visible);
    assert!(orch.host().tab(0).unwrap().is_injected());
}

#[tokio::test]
async fn file_pages_resolve_links_as_file_urls_without_override() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path(), "p.html", PAGE);

    let mut orch = Orchestrator::new(host_for(&page, None));
    orch.run_scan(None).await;
    assert!(orch.results()[0].link_url.starts_with("file:///"));
    assert!(orch.results()[0].link_url.ends_with("/translate/perro"));
}

#[tokio::test]
async fn missing_file_is_an_injection_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut orch = Orchestrator::new(host_for(&dir.path().join("nope.html"), None));

    assert_eq!(orch.run_scan(None).await, ScanState::Errored);
    let (text, kind) = orch.table().message().unwrap();
    assert_eq!(kind, MessageKind::Error);
    assert!(text.starts_with("Error: Cannot load "), "{text}");
}

#[tokio::test]
async fn no_tab_open_means_no_active_view() {
    let mut orch = Orchestrator::new(TabHost::new(ExtractOptions::default()).unwrap());
    assert_eq!(orch.run_scan(None).await, ScanState::Errored);
    assert_eq!(orch.table().message().unwrap().0, "Error: No active tab found");
}

#[tokio::test]
async fn bad_options_come_back_as_error_value() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path(), "p.html", PAGE);

    let mut host = host_for(&page, None);
    host.set_options(ExtractOptions { target_class: String::new(), ..ExtractOptions::default() });
    let mut orch = Orchestrator::new(host);

    assert_eq!(orch.run_scan(None).await, ScanState::Errored);
    let (text, _) = orch.table().message().unwrap();
    assert!(text.starts_with("Error: invalid selector `.`"), "{text}");
}

#[tokio::test]
async fn message_before_injection_has_no_receiver() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path(), "p.html", PAGE);
    let host = host_for(&page, None);

    let view = host.active_view().await.unwrap();
    let err = host.send_message(view, &Request::find_translate_links()).await.unwrap_err();
    assert!(matches!(err, ScanError::Transport(_)));
}

#[tokio::test]
async fn unknown_action_closes_the_port() {
    let content = ContentScript::inject(
        PAGE.to_string(),
        Url::parse("https://www.spanishdict.com/translate/perro").unwrap(),
        ExtractOptions::default(),
    )
    .unwrap();

    let err = content
        .send_message(&Request { action: "somethingElse".into() })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ScanError::Transport("The message port closed before a response was received.".into())
    );

    // The context is still alive for the request it does understand.
    match content.send_message(&Request::find_translate_links()).await.unwrap() {
        Response::Records(records) => assert_eq!(records.len(), 2),
        other => panic!("unexpected reply: {other:?}"),
    }
}

#[test]
fn page_text_parsing() {
    assert_eq!(Location::parse("   "), None);
    assert!(matches!(Location::parse("https://www.spanishdict.com/translate/hola"), Some(Location::Web(_))));
    assert_eq!(Location::parse("pages/hola.html"), Some(Location::File("pages/hola.html".into())));
}
