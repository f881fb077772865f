//! Selection policy between the high-fidelity adapter and the surrogate.

use ptera_core::{HighFidelitySolver, SimulationRequest, SimulationResult};
use ptera_vlm::VlmAdapter;

use crate::surrogate::surrogate;

/// Entry point for simulation requests.
///
/// Holds the high-fidelity seam; the surrogate needs no state. One value
/// serves arbitrarily many concurrent callers, since a simulation is a
/// single synchronous computation with no shared mutable state.
pub struct Simulator {
    high_fidelity: Box<dyn HighFidelitySolver>,
}

impl Simulator {
    /// Simulator over the best high-fidelity backend available at runtime.
    pub fn new() -> Self {
        Self::with_adapter(Box::new(VlmAdapter::discover()))
    }

    /// Simulator over an explicit adapter; the seam used by tests.
    pub fn with_adapter(high_fidelity: Box<dyn HighFidelitySolver>) -> Self {
        Self { high_fidelity }
    }

    /// Computes forces for a validated request. Never fails: the surrogate
    /// is the guaranteed fallback.
    ///
    /// Policy, in order: attempt the high-fidelity adapter when the request
    /// prefers it and the adapter is available; return its result unchanged
    /// on success; on computation failure log a warning and fall through;
    /// in every other case return the surrogate estimate. No retries, no
    /// merging of partial results.
    pub fn simulate(&self, request: &SimulationRequest) -> SimulationResult {
        if request.prefer_high_fidelity() && self.high_fidelity.is_available() {
            match self.high_fidelity.compute(request) {
                Ok(Some(result)) => return result,
                Ok(None) => {}
                Err(err) => {
                    log::warn!("high-fidelity solve failed, falling back to surrogate: {err}");
                }
            }
        }
        surrogate(request)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
