use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ion_text::{
    print_string, render_chars, render_clob, render_symbol, render_string, CharSequence, Context,
    FmtSink,
};

fn sample_text(size: usize) -> String {
    (0..size)
        .map(|i| match i % 40 {
            0 => '\n',
            7 => '"',
            19 => '\u{e9}',
            31 => '\u{1F600}',
            n => char::from(b'a' + (n % 26) as u8),
        })
        .collect()
}

fn benchmark_batched_vs_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("batched_vs_scalar");

    for size in [16, 256, 4096].iter() {
        let text = sample_text(*size);

        group.bench_with_input(BenchmarkId::new("batched", size), &text, |b, text| {
            let mut out = String::with_capacity(text.len() * 2);
            b.iter(|| {
                out.clear();
                black_box(text.as_str())
                    .render_body(&mut FmtSink::ascii(&mut out), Context::ShortString)
            })
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), &text, |b, text| {
            let mut out = String::with_capacity(text.len() * 2);
            b.iter(|| {
                out.clear();
                render_chars(&mut FmtSink::ascii(&mut out), black_box(text), Context::ShortString)
            })
        });
    }
    group.finish();
}

fn benchmark_utf16_input(c: &mut Criterion) {
    let units: Vec<u16> = sample_text(1024).encode_utf16().collect();

    c.bench_function("render_string_utf16", |b| {
        let mut out = String::with_capacity(units.len() * 2);
        b.iter(|| {
            out.clear();
            render_string(&mut FmtSink::ascii(&mut out), Some(black_box(units.as_slice())))
        })
    });
}

fn benchmark_symbols(c: &mut Criterion) {
    let mut group = c.benchmark_group("symbols");

    for symbol in ["name", "$ion_symbol_table", "<=", "null", "first name"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(symbol), symbol, |b, symbol| {
            let mut out = String::new();
            b.iter(|| {
                out.clear();
                render_symbol(&mut FmtSink::ascii(&mut out), Some(black_box(*symbol)))
            })
        });
    }
    group.finish();
}

fn benchmark_clob(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    c.bench_function("render_clob", |b| {
        let mut out = String::with_capacity(bytes.len() * 4);
        b.iter(|| {
            out.clear();
            render_clob(&mut FmtSink::ascii(&mut out), Some(black_box(bytes.as_slice())))
        })
    });
}

fn benchmark_print_string(c: &mut Criterion) {
    let text = sample_text(256);

    c.bench_function("print_string", |b| b.iter(|| print_string(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_batched_vs_scalar,
    benchmark_utf16_input,
    benchmark_symbols,
    benchmark_clob,
    benchmark_print_string
);
criterion_main!(benches);
