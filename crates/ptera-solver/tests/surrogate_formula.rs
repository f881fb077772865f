use std::f64::consts::PI;

use ptera_core::{RequestPayload, SimulationRequest};
use ptera_solver::{surrogate, SOLVER_NAME};

fn sample_payload() -> RequestPayload {
    RequestPayload {
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
    }
}

#[test]
fn fixture_produces_positive_forces() {
    let request = SimulationRequest::new(sample_payload()).unwrap();
    let result = surrogate(&request);
    assert!(result.thrust_n > 0.0);
    assert!(result.lift_n > 0.0);
    assert!(result.torque_nm > 0.0);
    assert_eq!(result.solver(), Some(SOLVER_NAME));
}

#[test]
fn fixture_matches_direct_recomputation() {
    let request = SimulationRequest::new(sample_payload()).unwrap();
    let result = surrogate(&request);

    let omega = 2.0 * PI * 5.0;
    let aspect_ratio = 0.8 * 0.8 / 0.18;
    let cl = 5.7 * 0.25;
    let q = 0.5 * 1.2 * 8.0 * 8.0;
    let heave = 0.5 * 1.2 * 0.18 * (omega * 0.25) * (omega * 0.25);
    let lift = q * 0.18 * cl + heave;
    let cdi = cl * cl / (PI * aspect_ratio * 0.9);
    let drag = q * 0.18 * (0.02 + cdi);

    assert!((result.lift_n - lift).abs() < 1e-12);
    assert!((result.thrust_n - drag).abs() < 1e-12);
    assert!((result.torque_nm - lift * 0.3).abs() < 1e-12);
}

#[test]
fn hover_uses_the_velocity_floor() {
    let mut payload = sample_payload();
    payload.cruise_velocity_m_s = 0.0;
    let at_rest = surrogate(&SimulationRequest::new(payload.clone()).unwrap());
    payload.cruise_velocity_m_s = 0.1;
    let at_floor = surrogate(&SimulationRequest::new(payload).unwrap());
    assert_eq!(at_rest.thrust_n, at_floor.thrust_n);
    assert_eq!(at_rest.lift_n, at_floor.lift_n);
}

#[test]
fn omitted_moment_arm_defaults_to_quarter_span() {
    let mut payload = sample_payload();
    payload.tail_moment_arm_m = None;
    let request = SimulationRequest::new(payload).unwrap();
    let result = surrogate(&request);
    assert!((result.torque_nm - result.lift_n * 0.2).abs() < 1e-12);
}

#[test]
fn zero_frequency_drops_the_heave_term() {
    let mut payload = sample_payload();
    payload.stroke_frequency_hz = 0.0;
    let request = SimulationRequest::new(payload).unwrap();
    let result = surrogate(&request);

    let q = 0.5 * 1.2 * 8.0 * 8.0;
    let lift = q * 0.18 * (5.7 * 0.25);
    assert!((result.lift_n - lift).abs() < 1e-12);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let request = SimulationRequest::new(sample_payload()).unwrap();
    let first = surrogate(&request);
    let second = surrogate(&request);
    assert_eq!(first, second);
    assert_eq!(
        first.thrust_n.to_bits(),
        second.thrust_n.to_bits(),
        "no hidden state may perturb the arithmetic"
    );
}
