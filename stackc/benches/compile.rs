use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stackc::prelude::*;

/// Long flat chain mixing both precedence levels.
fn flat_source(terms: usize) -> String {
    (0..terms)
        .map(|i| match i % 4 {
            0 => format!("{i} +"),
            1 => format!("{i} *"),
            2 => format!("{i} -"),
            _ => format!("{i} /"),
        })
        .collect::<Vec<_>>()
        .join(" ")
        + " 1"
}

/// Deeply parenthesized expression.
fn nested_source(depth: usize) -> String {
    format!("{}1{}", "(1 + ".repeat(depth), ")".repeat(depth))
}

fn criterion_benchmark(c: &mut Criterion) {
    {
        let source = flat_source(1000);

        c.bench_function("lex flat", |b| {
            b.iter(|| {
                let count = Lexer::new(black_box(source.as_str())).into_iter().count();
                black_box(count)
            })
        });

        c.bench_function("compile flat", |b| {
            b.iter(|| black_box(compile_str(black_box(source.as_str()))))
        });
    }

    {
        let source = nested_source(200);

        c.bench_function("compile nested", |b| {
            b.iter(|| black_box(compile_str(black_box(source.as_str()))))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
