//! Benchmarks for autopaging.
//!
//! Run with: cargo bench
//!
//! These benchmarks paginate synthetic articles in both representations.

use autopaging::{parse_blocks, ContentFilter, ContentItem, PaginationConfig, PagingType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a flat article with the given number of paragraphs.
fn create_flat_article(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            format!(
                "<p>Paragraph {} of the benchmark article, long enough to hold a few dozen words \
                 so that word counting has something to chew on.</p>",
                i + 1
            )
        })
        .collect()
}

/// Creates a block article with the given number of paragraph blocks.
fn create_block_article(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            format!(
                "<!-- wp:paragraph {{\"className\":\"p-{}\"}} -->\n<p>Block paragraph {}.</p>\n<!-- /wp:paragraph -->",
                i,
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_flat_pages(c: &mut Criterion) {
    let body = create_flat_article(200);
    let filter = ContentFilter::new(PaginationConfig::new().with_num_pages(5));

    c.bench_function("flat_200_paragraphs_5_pages", |b| {
        b.iter(|| filter.filter(vec![ContentItem::post(1, black_box(body.clone()))]))
    });
}

fn bench_flat_words(c: &mut Criterion) {
    let body = create_flat_article(200);
    let config = PaginationConfig::new()
        .with_paging_type(PagingType::Words)
        .with_num_words(300);
    let filter = ContentFilter::new(config);

    c.bench_function("flat_200_paragraphs_300_words", |b| {
        b.iter(|| filter.filter(vec![ContentItem::post(1, black_box(body.clone()))]))
    });
}

fn bench_blocks(c: &mut Criterion) {
    let body = create_block_article(200);
    let filter = ContentFilter::new(PaginationConfig::new().with_num_pages(5));

    c.bench_function("parse_200_blocks", |b| {
        b.iter(|| parse_blocks(black_box(&body)))
    });

    c.bench_function("blocks_200_paragraphs_5_pages", |b| {
        b.iter(|| filter.filter(vec![ContentItem::post(1, black_box(body.clone()))]))
    });
}

criterion_group!(benches, bench_flat_pages, bench_flat_words, bench_blocks);
criterion_main!(benches);
