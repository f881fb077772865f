use proptest::prelude::*;
use ptera_core::{RequestPayload, SimulationRequest};
use ptera_solver::surrogate;

fn payload(
    span_m: f64,
    planform_area_m2: f64,
    stroke_frequency_hz: f64,
    stroke_amplitude_rad: f64,
    cruise_velocity_m_s: f64,
    cl_alpha_per_rad: f64,
) -> RequestPayload {
    RequestPayload {
        span_m,
        mean_chord_m: planform_area_m2 / span_m,
        stroke_frequency_hz,
        stroke_amplitude_rad,
        cruise_velocity_m_s,
        air_density_kg_m3: 1.2,
        cl_alpha_per_rad,
        cd0: 0.02,
        planform_area_m2,
        tail_moment_arm_m: None,
        prefer_high_fidelity: false,
    }
}

proptest! {
    #[test]
    fn outputs_stay_finite_over_the_valid_domain(
        span in 0.05f64..5.0,
        area in 0.001f64..2.0,
        frequency in 0.0f64..50.0,
        amplitude in 0.0f64..1.5,
        velocity in 0.0f64..40.0,
        cl_alpha in -8.0f64..8.0,
    ) {
        let request = SimulationRequest::new(
            payload(span, area, frequency, amplitude, velocity, cl_alpha),
        ).unwrap();
        let result = surrogate(&request);
        prop_assert!(result.thrust_n.is_finite());
        prop_assert!(result.lift_n.is_finite());
        prop_assert!(result.torque_nm.is_finite());
        // Drag coefficient is a sum of non-negative terms.
        prop_assert!(result.thrust_n >= 0.0);
    }

    #[test]
    fn surrogate_is_deterministic(
        span in 0.05f64..5.0,
        area in 0.001f64..2.0,
        frequency in 0.0f64..50.0,
        amplitude in 0.0f64..1.5,
    ) {
        let request = SimulationRequest::new(
            payload(span, area, frequency, amplitude, 8.0, 5.7),
        ).unwrap();
        let first = surrogate(&request);
        let second = surrogate(&request);
        prop_assert_eq!(first, second);
    }
}
