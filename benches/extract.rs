// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use url::Url;

use translink::{
    config::options::ExtractOptions,
    csv::convert_to_csv,
    extract::{Document, Extractor},
};

/// A synthetic results page: every third link is not a translation link,
/// and the three markup variants the extractor falls back through are mixed.
fn synthetic_page(n: usize) -> String {
    let mut html = String::from("<!doctype html><html><body><ul>");
    for i in 0..n {
        let li = match i % 3 {
            0 => format!(r#"<li><a href="/translate/w{i}"><span lang="es">palabra {i}</span><span lang="en">word {i}</span></a></li>"#),
            1 => format!(r#"<li><a href="/translate/w{i}"><span class="word">palabra {i}</span><span class="translation">word {i}</span></a></li>"#),
            _ => format!(r#"<li><a href="/conjugate/v{i}">verbo {i}</a></li>"#),
        };
        html.push_str(&li);
    }
    html.push_str("</ul></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let url = Url::parse("https://www.spanishdict.com/translate/hola").unwrap();
    let doc = Document::parse(&synthetic_page(3_000), url);
    let extractor = Extractor::new(&ExtractOptions::default()).unwrap();

    c.bench_function("extract_3000_links", |b| {
        b.iter(|| {
            let records = extractor.extract(black_box(&doc));
            black_box(records.len())
        })
    });

    let records = extractor.extract(&doc);
    c.bench_function("convert_to_csv_2000_records", |b| {
        b.iter(|| black_box(convert_to_csv(black_box(&records))).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
