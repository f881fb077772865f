use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Diagnostic key under which every result records the solver identity.
pub const DIAG_SOLVER: &str = "solver";

/// Aerodynamic force estimate produced by a single simulation call.
///
/// Produced fresh per call; nothing is cached or shared between
/// invocations. Serialized field names follow SI unit suffixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Net thrust in N.
    #[serde(rename = "thrust_N")]
    pub thrust_n: f64,
    /// Total lift in N, including the heave contribution.
    #[serde(rename = "lift_N")]
    pub lift_n: f64,
    /// Pitching torque about the reference point in N*m.
    #[serde(rename = "torque_Nm")]
    pub torque_nm: f64,
    /// Open-ended solver diagnostics: solver identity plus, for the
    /// high-fidelity path, breakdown terms such as induced drag, parasitic
    /// drag, heave lift, panel count and solver version.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub diagnostics: BTreeMap<String, serde_json::Value>,
}

impl SimulationResult {
    /// Creates a result carrying the three force quantities and no
    /// diagnostics yet.
    pub fn new(thrust_n: f64, lift_n: f64, torque_nm: f64) -> Self {
        Self {
            thrust_n,
            lift_n,
            torque_nm,
            diagnostics: BTreeMap::new(),
        }
    }

    /// Attaches one diagnostic entry.
    pub fn with_diagnostic(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.diagnostics.insert(key.into(), value.into());
        self
    }

    /// Solver identity recorded in the diagnostics, if any.
    pub fn solver(&self) -> Option<&str> {
        self.diagnostics.get(DIAG_SOLVER).and_then(|v| v.as_str())
    }
}
