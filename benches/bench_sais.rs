use criterion::{criterion_group, criterion_main, Criterion};
use rand::{prelude::*, SeedableRng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut input = vec![];
    let mut rng = SmallRng::seed_from_u64(123);
    for i in 1..=6 {
        let mut s = vec![0u8; 10usize.pow(i as u32)];

        for e in s.iter_mut() {
            *e = rng.gen_range(b' '..=b'~');
        }

        input.push(s);
    }

    for s in input {
        c.bench_function(&format!("sais {}", s.len()), |b| {
            b.iter(|| sais::construct(&s).unwrap())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
