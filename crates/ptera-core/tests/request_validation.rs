use ptera_core::{PteraError, RequestPayload, SimulationRequest};

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
        prefer_high_fidelity: true,
    }
}

fn rejected_field(payload: RequestPayload) -> String {
    match SimulationRequest::new(payload) {
        Err(PteraError::Validation(info)) => info.context["field"].clone(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn accepts_valid_payload() {
    let request = SimulationRequest::new(sample_payload()).expect("valid payload");
    assert_eq!(request.span_m(), 0.8);
    assert_eq!(request.tail_moment_arm_m(), Some(0.3));
    assert!(request.prefer_high_fidelity());
}

#[test]
fn rejects_non_positive_span() {
    let mut payload = sample_payload();
    payload.span_m = 0.0;
    assert_eq!(rejected_field(payload), "span_m");
}

#[test]
fn rejects_negative_planform_area() {
    let mut payload = sample_payload();
    payload.planform_area_m2 = -0.18;
    assert_eq!(rejected_field(payload), "planform_area_m2");
}

#[test]
fn rejects_negative_stroke_amplitude() {
    let mut payload = sample_payload();
    payload.stroke_amplitude_rad = -0.1;
    assert_eq!(rejected_field(payload), "stroke_amplitude_rad");
}

#[test]
fn rejects_negative_tail_moment_arm() {
    let mut payload = sample_payload();
    payload.tail_moment_arm_m = Some(-0.3);
    assert_eq!(rejected_field(payload), "tail_moment_arm_m");
}

#[test]
fn rejects_non_finite_density() {
    let mut payload = sample_payload();
    payload.air_density_kg_m3 = f64::NAN;
    assert_eq!(rejected_field(payload), "air_density_kg_m3");
}

#[test]
fn negative_lift_slope_is_allowed() {
    let mut payload = sample_payload();
    payload.cl_alpha_per_rad = -2.0;
    let request = SimulationRequest::new(payload).expect("sign unconstrained");
    assert_eq!(request.cl_alpha_per_rad(), -2.0);
}

#[test]
fn validation_error_names_constraint() {
    let mut payload = sample_payload();
    payload.mean_chord_m = -1.0;
    let err = SimulationRequest::new(payload).unwrap_err();
    let info = err.info();
    assert_eq!(info.code, "ptera_core.invalid_field");
    assert_eq!(info.context["constraint"], "strictly positive");
}

#[test]
fn moment_arm_defaults_to_quarter_span() {
    let mut payload = sample_payload();
    payload.tail_moment_arm_m = None;
    let request = SimulationRequest::new(payload).unwrap();
    assert_eq!(request.moment_arm_m(), 0.2);
}

#[test]
fn explicit_moment_arm_wins_over_default() {
    let request = SimulationRequest::new(sample_payload()).unwrap();
    assert_eq!(request.moment_arm_m(), 0.3);
}

#[test]
fn aspect_ratio_from_span_and_area() {
    let request = SimulationRequest::new(sample_payload()).unwrap();
    assert!((request.aspect_ratio() - 0.64 / 0.18).abs() < 1e-12);
}
