use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, PteraError};

/// Wire shape of a simulation request, prior to validation.
///
/// This is the payload accepted on every external surface (HTTP body, tool
/// arguments). A [`SimulationRequest`] can only be obtained from it through
/// validation, so code operating on a request never re-checks ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    /// Wing span in m, tip to tip.
    pub span_m: f64,
    /// Mean aerodynamic chord in m.
    pub mean_chord_m: f64,
    /// Flapping stroke frequency in Hz.
    pub stroke_frequency_hz: f64,
    /// Flapping stroke amplitude in rad.
    pub stroke_amplitude_rad: f64,
    /// Forward cruise velocity in m/s.
    pub cruise_velocity_m_s: f64,
    /// Air density in kg/m^3.
    pub air_density_kg_m3: f64,
    /// Lift-curve slope per rad; may be negative for inverted sections.
    pub cl_alpha_per_rad: f64,
    /// Zero-lift drag coefficient.
    pub cd0: f64,
    /// Wing planform area in m^2.
    pub planform_area_m2: f64,
    /// Tail moment arm in m; defaults to a quarter of the span when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail_moment_arm_m: Option<f64>,
    /// Whether the high-fidelity path should be attempted first.
    #[serde(default = "default_prefer_high_fidelity")]
    pub prefer_high_fidelity: bool,
}

fn default_prefer_high_fidelity() -> bool {
    true
}

/// Validated, immutable simulation input.
///
/// Construction is the only place ranges are checked; every accessor on a
/// value of this type may assume the invariants below hold:
///
/// - physical extents (`span_m`, `mean_chord_m`, `planform_area_m2`,
///   `air_density_kg_m3`) are strictly positive,
/// - rates and coefficients are non-negative except `cl_alpha_per_rad`,
/// - every field is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RequestPayload", into = "RequestPayload")]
pub struct SimulationRequest {
    payload: RequestPayload,
}

impl SimulationRequest {
    /// Validates the payload and wraps it into an immutable request.
    pub fn new(payload: RequestPayload) -> Result<Self, PteraError> {
        require_strictly_positive("span_m", payload.span_m)?;
        require_strictly_positive("mean_chord_m", payload.mean_chord_m)?;
        require_strictly_positive("planform_area_m2", payload.planform_area_m2)?;
        require_strictly_positive("air_density_kg_m3", payload.air_density_kg_m3)?;
        require_non_negative("stroke_frequency_hz", payload.stroke_frequency_hz)?;
        require_non_negative("stroke_amplitude_rad", payload.stroke_amplitude_rad)?;
        require_non_negative("cruise_velocity_m_s", payload.cruise_velocity_m_s)?;
        require_non_negative("cd0", payload.cd0)?;
        require_finite("cl_alpha_per_rad", payload.cl_alpha_per_rad)?;
        if let Some(arm) = payload.tail_moment_arm_m {
            require_non_negative("tail_moment_arm_m", arm)?;
        }
        Ok(Self { payload })
    }

    /// Wing span in m.
    pub fn span_m(&self) -> f64 {
        self.payload.span_m
    }

    /// Mean aerodynamic chord in m.
    pub fn mean_chord_m(&self) -> f64 {
        self.payload.mean_chord_m
    }

    /// Flapping stroke frequency in Hz.
    pub fn stroke_frequency_hz(&self) -> f64 {
        self.payload.stroke_frequency_hz
    }

    /// Flapping stroke amplitude in rad.
    pub fn stroke_amplitude_rad(&self) -> f64 {
        self.payload.stroke_amplitude_rad
    }

    /// Forward cruise velocity in m/s.
    pub fn cruise_velocity_m_s(&self) -> f64 {
        self.payload.cruise_velocity_m_s
    }

    /// Air density in kg/m^3.
    pub fn air_density_kg_m3(&self) -> f64 {
        self.payload.air_density_kg_m3
    }

    /// Lift-curve slope per rad.
    pub fn cl_alpha_per_rad(&self) -> f64 {
        self.payload.cl_alpha_per_rad
    }

    /// Zero-lift drag coefficient.
    pub fn cd0(&self) -> f64 {
        self.payload.cd0
    }

    /// Wing planform area in m^2.
    pub fn planform_area_m2(&self) -> f64 {
        self.payload.planform_area_m2
    }

    /// Tail moment arm in m, when explicitly supplied.
    pub fn tail_moment_arm_m(&self) -> Option<f64> {
        self.payload.tail_moment_arm_m
    }

    /// Whether the high-fidelity path should be attempted first.
    pub fn prefer_high_fidelity(&self) -> bool {
        self.payload.prefer_high_fidelity
    }

    /// Effective moment arm in m: the supplied tail arm, or span/4.
    pub fn moment_arm_m(&self) -> f64 {
        self.payload
            .tail_moment_arm_m
            .unwrap_or(self.payload.span_m / 4.0)
    }

    /// Wing aspect ratio, span^2 / area.
    pub fn aspect_ratio(&self) -> f64 {
        self.payload.span_m * self.payload.span_m / self.payload.planform_area_m2
    }
}

impl TryFrom<RequestPayload> for SimulationRequest {
    type Error = PteraError;

    fn try_from(payload: RequestPayload) -> Result<Self, Self::Error> {
        Self::new(payload)
    }
}

impl From<SimulationRequest> for RequestPayload {
    fn from(request: SimulationRequest) -> Self {
        request.payload
    }
}

fn invalid_field(field: &str, value: f64, constraint: &str) -> PteraError {
    PteraError::Validation(
        ErrorInfo::new(
            "ptera_core.invalid_field",
            format!("{field} must be {constraint}"),
        )
        .with_context("field", field)
        .with_context("value", value.to_string())
        .with_context("constraint", constraint),
    )
}

fn require_finite(field: &str, value: f64) -> Result<(), PteraError> {
    if !value.is_finite() {
        return Err(invalid_field(field, value, "finite"));
    }
    Ok(())
}

fn require_strictly_positive(field: &str, value: f64) -> Result<(), PteraError> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid_field(field, value, "strictly positive"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), PteraError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(invalid_field(field, value, "non-negative"));
    }
    Ok(())
}
