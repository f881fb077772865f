//! Service surfaces for the pterasim estimator: HTTP endpoint, stdio tool
//! transport, and the operational discovery description.
//!
//! Everything here is thin integration glue over [`ptera_solver::Simulator`];
//! the aerodynamic semantics live in the solver crates.

pub mod describe;
pub mod http;
pub mod tool;
