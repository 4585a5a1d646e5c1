//! Search engine benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `index/build` | Suffix array construction as the corpus grows |
//! | `search/first_page` | Full `Searcher::search` for page 0 |
//! | `search/deep_page` | Same query at a late offset (more matches fetched) |
//! | `search/unicode_query` | Non-ASCII query, which takes the regex scan path |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shakesearch::{CorpusIndex, SearchConfig, Searcher};
use std::hint::black_box;

const LINES: &[&str] = &[
    "To be, or not to be, that is the question.\n",
    "Where is the Duke of Florence tonight?\n",
    "He is drunk with sack and sugar.\n",
    "Now is the winter of our discontent.\n",
    "Enter Hamlet, reading.\n",
    "Ærlig talt, sagde prinsen af Danmark.\n",
];

fn corpus(repeats: usize) -> String {
    LINES.iter().cycle().take(LINES.len() * repeats).copied().collect()
}

// ---------------------------------------------------------------------------
// Index construction
// ---------------------------------------------------------------------------

fn build_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/build");
    group.sample_size(10);

    for repeats in [100usize, 1_000, 10_000] {
        let text = corpus(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| CorpusIndex::build(black_box(text.as_bytes().to_vec())).unwrap())
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

fn search_bench(c: &mut Criterion) {
    let searcher = Searcher::from_bytes(corpus(10_000), SearchConfig::default()).unwrap();

    c.bench_function("search/first_page", |b| {
        b.iter(|| searcher.search(black_box("florence"), 0, 20).unwrap())
    });

    c.bench_function("search/deep_page", |b| {
        b.iter(|| searcher.search(black_box("florence"), 5_000, 20).unwrap())
    });

    c.bench_function("search/unicode_query", |b| {
        b.iter(|| searcher.search(black_box("ærlig"), 0, 20).unwrap())
    });
}

criterion_group!(search_benches, build_bench, search_bench);
criterion_main!(search_benches);
