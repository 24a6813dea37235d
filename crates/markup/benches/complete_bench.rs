use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::{complete, complete_into};

const LARGE_BLOCKS: usize = 20_000;

fn make_blocks(blocks: usize) -> String {
    let mut input = String::new();
    for _ in 0..blocks {
        input.push_str("<div class=box><span>hello</span><img src=x/></div>");
    }
    input
}

fn make_plain(bytes: usize) -> String {
    let mut input = String::new();
    while input.len() < bytes {
        input.push_str("streamed prose with 1 < 2 comparisons in it ");
    }
    input
}

fn make_unclosed(depth: usize) -> String {
    let mut input = String::new();
    for i in 0..depth {
        input.push_str("<n");
        input.push_str(&i.to_string());
        input.push('>');
    }
    input
}

fn bench_complete_balanced_blocks(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_complete_balanced_blocks", |b| {
        b.iter(|| {
            let out = complete(black_box(&input));
            black_box(out.len());
        });
    });
}

fn bench_complete_plain_text(c: &mut Criterion) {
    let input = make_plain(1024 * 1024);
    c.bench_function("bench_complete_plain_text", |b| {
        b.iter(|| {
            let out = complete(black_box(&input));
            black_box(out.len());
        });
    });
}

fn bench_complete_deep_unclosed(c: &mut Criterion) {
    let input = make_unclosed(10_000);
    c.bench_function("bench_complete_deep_unclosed", |b| {
        b.iter(|| {
            let out = complete(black_box(&input));
            black_box(out.len());
        });
    });
}

fn bench_complete_angle_noise(c: &mut Criterion) {
    // Every `<` fails to start a tag, exercising the skip path.
    let input = "< ".repeat(256 * 1024);
    c.bench_function("bench_complete_angle_noise", |b| {
        b.iter(|| {
            let out = complete(black_box(&input));
            black_box(out.len());
        });
    });
}

fn bench_complete_into_reused_buffer(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_complete_into_reused_buffer", |b| {
        let mut out = String::with_capacity(input.len() + 64);
        b.iter(|| {
            out.clear();
            complete_into(black_box(&input), &mut out);
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_complete_balanced_blocks,
    bench_complete_plain_text,
    bench_complete_deep_unclosed,
    bench_complete_angle_noise,
    bench_complete_into_reused_buffer
);
criterion_main!(benches);
