//! Vortex-lattice problem description derived from a simulation request.

use ptera_core::{aero, SimulationRequest};
use serde::{Deserialize, Serialize};

/// Chordwise panel resolution of the generated wing.
pub const NUM_CHORDWISE_PANELS: usize = 6;

/// Spanwise panel resolution per wing segment.
pub const NUM_SPANWISE_PANELS: usize = 6;

/// Floor on half-span and chord, in m, so degenerate requests still yield a
/// well-posed lattice.
const MIN_EXTENT_M: f64 = 1e-3;

/// Panel distribution along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Cosine clustering towards edges.
    Cosine,
    /// Uniform distribution.
    Uniform,
}

/// One spanwise cross section of the wing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingSection {
    /// Leading edge spanwise station in m.
    pub y_le_m: f64,
    /// Local chord in m.
    pub chord_m: f64,
    /// Local twist in degrees.
    pub twist_deg: f64,
    /// Spanwise panels between this section and the next.
    pub num_spanwise_panels: usize,
    /// Spanwise panel distribution.
    pub spanwise_spacing: Spacing,
}

/// Rectangular-ish symmetric wing, described by its root and tip sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingGeometry {
    /// Wing name forwarded to the solver.
    pub name: String,
    /// Whether the solver should mirror the wing about the root plane.
    pub symmetric: bool,
    /// Airfoil section name.
    pub airfoil: String,
    /// Chordwise panel count.
    pub num_chordwise_panels: usize,
    /// Chordwise panel distribution.
    pub chordwise_spacing: Spacing,
    /// Cross sections from root to tip.
    pub sections: Vec<WingSection>,
    /// Reference area in m^2.
    pub s_ref_m2: f64,
    /// Reference span in m.
    pub b_ref_m: f64,
    /// Reference chord in m.
    pub c_ref_m: f64,
}

impl WingGeometry {
    /// Total panel count across both halves of a symmetric wing.
    pub fn panel_count(&self) -> usize {
        let segments = self.sections.len().saturating_sub(1);
        let spanwise: usize = self
            .sections
            .iter()
            .take(segments)
            .map(|section| section.num_spanwise_panels)
            .sum();
        let one_side = self.num_chordwise_panels * spanwise;
        if self.symmetric {
            one_side * 2
        } else {
            one_side
        }
    }
}

/// Freestream conditions for a steady solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Air density in kg/m^3.
    pub density_kg_m3: f64,
    /// Freestream velocity in m/s, already floored.
    pub velocity_m_s: f64,
    /// Angle of attack in degrees.
    pub alpha_deg: f64,
    /// Sideslip angle in degrees.
    pub beta_deg: f64,
}

/// Complete problem definition handed to a solver backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VlmProblem {
    /// The single main wing.
    pub wing: WingGeometry,
    /// Freestream conditions.
    pub operating_point: OperatingPoint,
}

impl VlmProblem {
    /// Builds the fixed-resolution lattice problem for a request.
    ///
    /// The wing spans half the given span and is mirrored by the solver.
    /// Chord comes from area / span unless the given mean chord is larger,
    /// and the flapping amplitude stands in for an effective angle of
    /// attack, expressed in degrees.
    pub fn from_request(request: &SimulationRequest) -> Self {
        let half_span = (request.span_m() / 2.0).max(MIN_EXTENT_M);
        let chord_from_area = request.planform_area_m2() / request.span_m().max(MIN_EXTENT_M);
        let chord = chord_from_area.max(request.mean_chord_m()).max(MIN_EXTENT_M);

        let section = |y_le_m: f64| WingSection {
            y_le_m,
            chord_m: chord,
            twist_deg: 0.0,
            num_spanwise_panels: NUM_SPANWISE_PANELS,
            spanwise_spacing: Spacing::Cosine,
        };

        Self {
            wing: WingGeometry {
                name: "main-wing".to_string(),
                symmetric: true,
                airfoil: "naca0012".to_string(),
                num_chordwise_panels: NUM_CHORDWISE_PANELS,
                chordwise_spacing: Spacing::Cosine,
                sections: vec![section(0.0), section(half_span)],
                s_ref_m2: request.planform_area_m2(),
                b_ref_m: request.span_m(),
                c_ref_m: request.mean_chord_m(),
            },
            operating_point: OperatingPoint {
                density_kg_m3: request.air_density_kg_m3(),
                velocity_m_s: request
                    .cruise_velocity_m_s()
                    .max(aero::VELOCITY_FLOOR_M_S),
                alpha_deg: request.stroke_amplitude_rad().to_degrees(),
                beta_deg: 0.0,
            },
        }
    }
}

/// Force and moment output of one steady solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VlmSolution {
    /// Near-field force in wind axes (drag, side, lift), in N.
    pub force_wind_axes_n: [f64; 3],
    /// Near-field moment in wind axes (roll, pitch, yaw), in N*m; zero when
    /// the solver does not report moments.
    #[serde(default)]
    pub moment_wind_axes_nm: [f64; 3],
    /// Number of vortex panels used; zero means unreported.
    #[serde(default)]
    pub panel_count: usize,
    /// Induced drag as resolved by the solver, if it reports one.
    #[serde(default)]
    pub induced_drag_n: Option<f64>,
    /// Solver identity.
    #[serde(default)]
    pub solver: String,
    /// Solver version string.
    #[serde(default)]
    pub solver_version: String,
}
