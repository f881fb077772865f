#![deny(missing_docs)]
#![doc = "Core data model and quasi-steady aerodynamic relations for the pterasim flapping-wing estimation service."]

pub mod aero;
pub mod errors;
mod request;
mod result;

pub use errors::{ErrorInfo, PteraError};
pub use request::{RequestPayload, SimulationRequest};
pub use result::{SimulationResult, DIAG_SOLVER};

/// Seam for optional higher-fidelity force computation.
///
/// Implementations translate a validated request into their own problem
/// representation, run the solve, and map the output back into a
/// [`SimulationResult`]. Availability is a runtime property: the backing
/// library may be absent entirely, which is signalled either through
/// [`HighFidelitySolver::is_available`] or by returning `Ok(None)` from
/// [`HighFidelitySolver::compute`]. Neither is an error.
pub trait HighFidelitySolver: Send + Sync {
    /// Whether a solve can be attempted right now.
    fn is_available(&self) -> bool;

    /// Attempts a high-fidelity solve for the request.
    ///
    /// `Ok(None)` reports unavailability; `Err` reports that the geometry
    /// build or the solve itself failed.
    fn compute(&self, request: &SimulationRequest)
        -> Result<Option<SimulationResult>, PteraError>;
}
