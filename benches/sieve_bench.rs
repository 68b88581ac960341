use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primetable::{find_next_prime, find_nth_prime, is_prime, sift, PrimeTable};

fn bench_sift_1m(c: &mut Criterion) {
    let mut cells = vec![0u8; 1_000_000];
    c.bench_function("sift(1_000_000 cells)", |b| {
        b.iter(|| sift(black_box(&mut cells[..])));
    });
}

fn bench_sift_bool_1m(c: &mut Criterion) {
    let mut cells = vec![false; 1_000_000];
    c.bench_function("sift(1_000_000 bool cells)", |b| {
        b.iter(|| sift(black_box(&mut cells[..])));
    });
}

fn bench_is_prime(c: &mut Criterion) {
    let table = PrimeTable::with_len(1_000_000);
    c.bench_function("is_prime(1_999_993)", |b| {
        b.iter(|| is_prime(black_box(1_999_993), table.as_slice()));
    });
}

fn bench_nth_prime_10001(c: &mut Criterion) {
    let table = PrimeTable::with_len(1_000_000);
    c.bench_function("find_nth_prime(10_001)", |b| {
        b.iter(|| find_nth_prime(black_box(10_001), table.as_slice()));
    });
}

fn bench_next_prime(c: &mut Criterion) {
    let table = PrimeTable::with_len(1_000_000);
    // 1_327 is followed by the first prime gap of length 34
    c.bench_function("find_next_prime(1_327)", |b| {
        b.iter(|| find_next_prime(black_box(1_327), table.as_slice()));
    });
}

fn bench_enumerate_1m(c: &mut Criterion) {
    let table = PrimeTable::with_len(1_000_000);
    c.bench_function("enumerate_primes(1_000_000 cells)", |b| {
        b.iter(|| table.primes().count());
    });
}

criterion_group!(
    benches,
    bench_sift_1m,
    bench_sift_bool_1m,
    bench_is_prime,
    bench_nth_prime_10001,
    bench_next_prime,
    bench_enumerate_1m,
);
criterion_main!(benches);
