use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logsift::matcher::{self, Pattern};
use logsift::LogAnalyzer;

fn bench_matcher(c: &mut Criterion) {
    let text = "ab".repeat(5_000) + "abc";

    c.bench_function("count repetitive text", |b| {
        b.iter(|| matcher::count(black_box(&text), black_box("ababc")))
    });

    c.bench_function("count ignore case", |b| {
        b.iter(|| matcher::count_ignore_case(black_box(&text), black_box("ABABC")))
    });

    let pattern = Pattern::new("ababc", true);
    c.bench_function("compiled pattern", |b| {
        b.iter(|| pattern.count(black_box(&text)))
    });
}

fn bench_analyzer(c: &mut Criterion) {
    let mut analyzer = LogAnalyzer::new();
    for i in 0..2_000 {
        analyzer.add_log(
            "2024-01-15 08:00:00",
            if i % 3 == 0 { "ERROR" } else { "INFO" },
            &format!("request {} failed to connect to database", i % 50),
        );
    }

    c.bench_function("search keyword over 2000 records", |b| {
        b.iter(|| analyzer.search_keyword(black_box("database"), false))
    });
}

criterion_group!(benches, bench_matcher, bench_analyzer);
criterion_main!(benches);
