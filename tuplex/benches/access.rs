use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tuplex::{tuple, Tuple};

type Forty = (
    u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64,
    u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64, u64,
    u64, u64,
);

fn forty() -> Tuple<Forty> {
    Tuple::from(tuplex::ValueInitialize)
}

fn bench_get(c: &mut Criterion) {
    let t = forty();
    let mut group = c.benchmark_group("get");
    let _ = group.bench_function(BenchmarkId::new("forty", 0), |b| {
        b.iter(|| *black_box(&t).get::<0>())
    });
    let _ = group.bench_function(BenchmarkId::new("forty", 35), |b| {
        b.iter(|| *black_box(&t).get::<35>())
    });
    group.finish();
}

fn bench_eq(c: &mut Criterion) {
    let a = forty();
    let mut b = forty();
    *b.get_mut::<39>() = 1;
    let mut group = c.benchmark_group("eq");
    let _ = group.bench_function("forty/equal", |bench| {
        bench.iter(|| black_box(&a) == black_box(&a))
    });
    let _ = group.bench_function("forty/last-differs", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b))
    });
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let narrow = tuple![1_u8, 2_u16, 3_u32, "four"];
    let _ = c.bench_function("convert/widen-borrowed", |b| {
        b.iter(|| Tuple::<(u64, u64, u64, String)>::convert_from(black_box(&narrow)))
    });
}

criterion_group!(benches, bench_get, bench_eq, bench_convert);
criterion_main!(benches);
