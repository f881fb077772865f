//! Closed-form blade-element/quasi-steady estimate of flapping-wing forces.

use std::f64::consts::PI;

use ptera_core::{aero, SimulationRequest, SimulationResult};

/// Solver identity recorded by the surrogate.
pub const SOLVER_NAME: &str = "analytic";

/// Estimates thrust, lift and torque from closed-form relations.
///
/// Deterministic and infallible for any validated request: dynamic pressure
/// is floored at hover, and the induced drag term degrades to zero for
/// degenerate aspect ratios. Thrust equals total drag under the steady
/// cruise force balance assumption.
pub fn surrogate(request: &SimulationRequest) -> SimulationResult {
    let rho = request.air_density_kg_m3();
    let area = request.planform_area_m2();
    let omega = 2.0 * PI * request.stroke_frequency_hz();
    let aspect_ratio = request.aspect_ratio();

    let lift_coefficient = request.cl_alpha_per_rad() * request.stroke_amplitude_rad();
    let dynamic_pressure = aero::dynamic_pressure(rho, request.cruise_velocity_m_s());
    let heave_lift = aero::heave_lift(rho, area, omega, request.stroke_amplitude_rad());
    let lift = dynamic_pressure * area * lift_coefficient + heave_lift;

    let drag_coefficient =
        request.cd0() + aero::induced_drag_coefficient(lift_coefficient, aspect_ratio);
    let drag = dynamic_pressure * area * drag_coefficient;
    let thrust = drag;

    let torque = lift * request.moment_arm_m();

    SimulationResult::new(thrust, lift, torque).with_diagnostic("solver", SOLVER_NAME)
}
