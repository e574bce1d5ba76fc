use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use beamline_lattice::{Ele, Lattice, TestPattern};

/// Lattice with `n_ele` active elements, all built from the same pattern family.
fn lattice_of(n_ele: usize) -> Lattice {
    let mut lat = Lattice::test_pattern(1);
    lat.ele = (0..n_ele).map(|i| Ele::test_pattern(i as i32)).collect();
    lat.n_ele_max = n_ele as i32 - 1;
    lat.n_ele_use = lat.n_ele_max;
    lat
}

fn bench_ele_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("ele_equality");
    let a = Ele::test_pattern(1);
    let b = a.clone();
    let mut last_differs = a.clone();
    last_differs.offset_moves_aperture = !last_differs.offset_moves_aperture;

    group.bench_function("equal", |bench| {
        bench.iter(|| black_box(&a) == black_box(&b))
    });
    group.bench_function("last_field_differs", |bench| {
        bench.iter(|| black_box(&a) == black_box(&last_differs))
    });
    group.finish();
}

fn bench_lattice_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_equality");

    for n_ele in [10usize, 100, 1_000].iter() {
        let a = lattice_of(*n_ele);
        let b = a.clone();
        group.throughput(Throughput::Elements(*n_ele as u64));
        group.bench_with_input(BenchmarkId::new("equal", n_ele), n_ele, |bench, _| {
            bench.iter(|| black_box(&a) == black_box(&b))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ele_equality, bench_lattice_equality);
criterion_main!(benches);
