use criterion::{criterion_group, criterion_main, Criterion};
use rankine_model::{compute_factors, derive_parameters, ScalingModel};
use rankine_types::chip::RawChipSpec;
use std::hint::black_box;

fn bench_pipeline(c: &mut Criterion) {
    let model = ScalingModel::new();
    let raw = RawChipSpec {
        node_nm: 45.0,
        transistor_count_millions: None,
        die_area_mm2: Some(40.0),
        frequency_mhz: 1000.0,
        tdp_watts: 300.0,
    };

    c.bench_function("derive_and_compute_by_area", |b| {
        b.iter(|| {
            let params = derive_parameters(black_box(&raw), &model).unwrap();
            black_box(compute_factors(&params, &model).unwrap())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
