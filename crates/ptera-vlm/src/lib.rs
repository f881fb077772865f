//! Optional high-fidelity vortex-lattice adapter for the pterasim service.
//!
//! Translates a validated request into a fixed-resolution lattice problem,
//! delegates the solve to an external library discovered at runtime, and
//! maps the wind-axis output back into a [`ptera_core::SimulationResult`].
//! The library is best-effort interop behind a versioned C ABI; its absence
//! is never an error.

pub mod abi;
mod adapter;
mod backend;
#[cfg(feature = "dynamic")]
mod loader;
mod problem;

pub use adapter::VlmAdapter;
pub use backend::{default_backend, NullSolver, VortexLatticeSolver};
#[cfg(feature = "dynamic")]
pub use loader::{DynamicSolver, LIBRARY_ENV};
pub use problem::{
    OperatingPoint, Spacing, VlmProblem, VlmSolution, WingGeometry, WingSection,
    NUM_CHORDWISE_PANELS, NUM_SPANWISE_PANELS,
};
