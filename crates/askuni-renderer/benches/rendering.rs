//! Benchmarks for answer rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use askuni_renderer::{HtmlBackend, MarkdownRenderer, render};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate an answer-shaped document with the given number of sections.
fn generate_answer(sections: usize, items_per_list: usize) -> String {
    let mut md = String::with_capacity(sections * (200 + items_per_list * 60));
    md.push_str("# Answer\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str(&format!(
            "Paragraph {i} has **bold**, *italic*, `code` and a [link](https://u.test/{i}).\n\n"
        ));
        for j in 0..items_per_list {
            md.push_str(&format!("- item {j} with __strong__ text\n"));
        }
        md.push_str("\n```\nlet x = 1;\n```\n\n> quoted line\n\n---\n\n");
    }
    md
}

fn bench_render_short(c: &mut Criterion) {
    let answer = "The library opens at **8 AM**. See [hours](https://u.test/hours).";

    c.bench_function("render_short_answer", |b| {
        b.iter(|| render(answer));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_size");

    for (sections, items) in [(2, 3), (10, 5), (40, 8)] {
        let markdown = generate_answer(sections, items);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("answer", format!("{sections}s_{items}i")),
            &markdown,
            |b, md| {
                let mut renderer = MarkdownRenderer::<HtmlBackend>::new();
                b.iter(|| renderer.render(md));
            },
        );
    }

    group.finish();
}

fn bench_render_nested_lists(c: &mut Criterion) {
    let mut markdown = String::new();
    for i in 0..50 {
        markdown.push_str(&format!("- top {i}\n  - child\n    1. leaf\n    2. leaf\n"));
    }

    c.bench_function("render_nested_lists", |b| {
        b.iter(|| render(&markdown));
    });
}

criterion_group!(
    benches,
    bench_render_short,
    bench_render_varying_sizes,
    bench_render_nested_lists,
);
criterion_main!(benches);
