//! Quasi-steady aerodynamic relations shared by the analytic surrogate and
//! the high-fidelity result mapping.
//!
//! Both computation paths must agree on these constants, otherwise the
//! diagnostic drag breakdown reported by the high-fidelity path stops being
//! comparable with the surrogate output.

use std::f64::consts::PI;

/// Floor applied to the freestream velocity before computing dynamic
/// pressure, in m/s. Avoids singular force coefficients at hover.
pub const VELOCITY_FLOOR_M_S: f64 = 0.1;

/// Oswald-like span efficiency used in the induced drag estimate.
pub const SPAN_EFFICIENCY: f64 = 0.9;

/// Dynamic pressure for the floored freestream velocity, in Pa.
pub fn dynamic_pressure(air_density_kg_m3: f64, velocity_m_s: f64) -> f64 {
    let velocity = velocity_m_s.max(VELOCITY_FLOOR_M_S);
    0.5 * air_density_kg_m3 * velocity * velocity
}

/// Lift contribution of the flapping motion itself, in N.
///
/// Added-mass-like term proportional to the square of the plunge velocity
/// scale `omega * amplitude`, independent of forward speed.
pub fn heave_lift(
    air_density_kg_m3: f64,
    planform_area_m2: f64,
    stroke_rate_rad_s: f64,
    stroke_amplitude_rad: f64,
) -> f64 {
    let plunge_velocity = stroke_rate_rad_s * stroke_amplitude_rad;
    0.5 * air_density_kg_m3 * planform_area_m2 * plunge_velocity * plunge_velocity
}

/// Induced drag coefficient from lifting-line theory.
///
/// Returns zero for degenerate aspect ratios instead of dividing by zero.
pub fn induced_drag_coefficient(lift_coefficient: f64, aspect_ratio: f64) -> f64 {
    if aspect_ratio <= 0.0 {
        return 0.0;
    }
    lift_coefficient * lift_coefficient / (PI * aspect_ratio * SPAN_EFFICIENCY)
}
