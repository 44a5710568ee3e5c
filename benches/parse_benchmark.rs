//! Benchmarks for resumd parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use a synthetic resume table scaled by entry count.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resumd::{render, RenderOptions, ResumeParser};

/// Build a synthetic resume markdown table with the given entry counts.
fn create_test_resume(education: usize, experience: usize) -> String {
    let mut main = String::new();

    for i in 0..education {
        let header = if i == 0 { "EDUCATION " } else { "" };
        main.push_str(&format!(
            "**{header}School {i}** — *Degree {i}* September 2015 - June 2019 \
             GPA: 3.{i}. Relevant CS Coursework: Algorithms, Systems. Notes for entry {i}. "
        ));
    }
    for i in 0..experience {
        let header = if i == 0 { "WORK EXPERIENCE " } else { "" };
        main.push_str(&format!(
            "**{header}Company {i}** — *Role {i}* January 2020 - Present \
             Shipped [project {i}](https://example.com/{i}) end\\-to\\-end. "
        ));
    }

    format!(
        "| Name | SKILLS Fluent in Rust. Experienced with parsers. Practiced in writing. \
         ACTIVITIES Reading. GETS ME UP IN THE MORNING Coffee. |\n\
         | :--- | :--- |\n\
         | {main} |  |\n"
    )
}

fn bench_parse(c: &mut Criterion) {
    let small = create_test_resume(2, 2);
    let large = create_test_resume(20, 20);

    let mut group = c.benchmark_group("parse");
    group.bench_function("small", |b| {
        let parser = ResumeParser::new();
        b.iter(|| parser.parse(black_box(&small)).unwrap())
    });
    group.bench_function("large", |b| {
        let parser = ResumeParser::new();
        b.iter(|| parser.parse(black_box(&large)).unwrap())
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let md = create_test_resume(10, 10);
    let resume = ResumeParser::new().parse(&md).unwrap();
    let options = RenderOptions::default();

    c.bench_function("render_html", |b| {
        b.iter(|| render::to_html(black_box(&resume), &options).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
