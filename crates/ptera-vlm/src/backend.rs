//! Backend seam between the adapter and a concrete solver implementation.

use ptera_core::PteraError;

use crate::problem::{VlmProblem, VlmSolution};

/// Opaque vortex-lattice solver.
///
/// Availability is checked before every dispatch attempt; `solve` may still
/// report unavailability via `Ok(None)` when the backing library disappears
/// between the two calls.
pub trait VortexLatticeSolver: Send + Sync {
    /// Identifier used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether a solve can be attempted right now.
    fn is_available(&self) -> bool;

    /// Runs a steady solve for the given problem.
    fn solve(&self, problem: &VlmProblem) -> Result<Option<VlmSolution>, PteraError>;
}

/// Backend used when no solver library is compiled in or discoverable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSolver;

impl VortexLatticeSolver for NullSolver {
    fn name(&self) -> &str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn solve(&self, _problem: &VlmProblem) -> Result<Option<VlmSolution>, PteraError> {
        Ok(None)
    }
}

/// Best backend available in this build: the dynamic loader when the
/// `dynamic` feature is enabled, otherwise the null backend.
#[cfg(feature = "dynamic")]
pub fn default_backend() -> Box<dyn VortexLatticeSolver> {
    Box::new(crate::loader::DynamicSolver::discover())
}

/// Best backend available in this build: the dynamic loader when the
/// `dynamic` feature is enabled, otherwise the null backend.
#[cfg(not(feature = "dynamic"))]
pub fn default_backend() -> Box<dyn VortexLatticeSolver> {
    Box::new(NullSolver)
}
