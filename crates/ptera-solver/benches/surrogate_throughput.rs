use criterion::{criterion_group, criterion_main, Criterion};
use ptera_core::{RequestPayload, SimulationRequest};
use ptera_solver::surrogate;

fn bench_surrogate(c: &mut Criterion) {
    let request = SimulationRequest::new(RequestPayload {
        span_m: 0.8,
        mean_chord_m: 0.12,
        stroke_frequency_hz: 5.0,
        stroke_amplitude_rad: 0.25,
        cruise_velocity_m_s: 8.0,
        air_density_kg_m3: 1.2,
        cl_alpha_per_rad: 5.7,
        cd0: 0.02,
        planform_area_m2: 0.18,
        tail_moment_arm_m: Some(0.3),
        prefer_high_fidelity: false,
    })
    .expect("valid request");

    let mut group = c.benchmark_group("surrogate");
    group.bench_function("fixture", |b| {
        b.iter(|| {
            let _ = surrogate(&request);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_surrogate);
criterion_main!(benches);
