#![deny(missing_docs)]
#![doc = "Surrogate force estimation and high-fidelity dispatch for the pterasim service."]

mod dispatch;
mod surrogate;

pub use dispatch::Simulator;
pub use surrogate::{surrogate, SOLVER_NAME};
