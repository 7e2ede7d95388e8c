// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scraper::Html;

use dex_scrape::specs::{index, pokemon};

fn load(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn bench_extract(c: &mut Criterion) {
    let page = load("hitmontop.html");
    let doc = Html::parse_document(&page);

    c.bench_function("extract_parsed", |b| {
        b.iter(|| {
            let rec = pokemon::extract(black_box(&doc)).unwrap();
            black_box(rec.hit_points)
        })
    });

    c.bench_function("parse_and_extract", |b| {
        b.iter(|| {
            let rec = pokemon::parse_page(black_box(&page)).unwrap();
            black_box(rec.hit_points)
        })
    });
}

fn bench_index(c: &mut Criterion) {
    let listing = load("pokedex_swsh.html");
    let doc = Html::parse_document(&listing);

    c.bench_function("parse_index", |b| {
        b.iter(|| black_box(index::parse_index(black_box(&doc)).len()))
    });
}

criterion_group!(benches, bench_extract, bench_index);
criterion_main!(benches);
