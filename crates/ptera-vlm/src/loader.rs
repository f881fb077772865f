//! Dynamic discovery of an external vortex-lattice solver library.
//!
//! The library is an optional runtime dependency: failure to locate, load or
//! initialise it is not an error, it simply leaves the backend unavailable
//! and the dispatcher on the surrogate path.

use std::env;
use std::ffi::{OsStr, OsString};
use std::os::raw::c_void;
use std::path::Path;

use libloading::Library;
use ptera_core::{ErrorInfo, PteraError};

use crate::abi::{
    verify_abi_compat, Entrypoint, VlmSolverInfo, VlmStatus, VlmVTable, ENTRYPOINT_SYMBOL,
};
use crate::backend::VortexLatticeSolver;
use crate::problem::{VlmProblem, VlmSolution};

/// Environment variable naming the solver library to load.
pub const LIBRARY_ENV: &str = "PTERA_VLM_LIBRARY";

struct LoadedSolver {
    // Held only to keep the vtable's code mapped.
    _library: Library,
    vtable: VlmVTable,
    name: String,
    version: String,
}

impl Drop for LoadedSolver {
    fn drop(&mut self) {
        if let Some(shutdown) = self.vtable.shutdown {
            shutdown();
        }
    }
}

/// Solver backend backed by a dynamically loaded library.
pub struct DynamicSolver {
    inner: Option<LoadedSolver>,
}

impl DynamicSolver {
    /// Attempts to load the library named by [`LIBRARY_ENV`], falling back
    /// to the platform default library name in the loader search path.
    pub fn discover() -> Self {
        let path = env::var_os(LIBRARY_ENV).unwrap_or_else(default_library_name);
        Self {
            inner: load(&path),
        }
    }
}

impl VortexLatticeSolver for DynamicSolver {
    fn name(&self) -> &str {
        self.inner
            .as_ref()
            .map(|loaded| loaded.name.as_str())
            .unwrap_or("none")
    }

    fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    fn solve(&self, problem: &VlmProblem) -> Result<Option<VlmSolution>, PteraError> {
        let Some(loaded) = self.inner.as_ref() else {
            return Ok(None);
        };
        let solve = loaded.vtable.solve_steady.ok_or_else(|| {
            PteraError::Solver(
                ErrorInfo::new(
                    "ptera_vlm.missing_solve",
                    "solver library exports no steady solve",
                )
                .with_context("solver", loaded.name.clone()),
            )
        })?;

        let payload = serde_json::to_vec(problem).map_err(|err| {
            PteraError::Serde(ErrorInfo::new("ptera_vlm.encode_problem", err.to_string()))
        })?;

        let mut output: Vec<u8> = Vec::new();
        let status = solve(
            (&mut output as *mut Vec<u8>).cast::<c_void>(),
            payload.as_ptr(),
            payload.len(),
            collect_output,
        );
        if !status.is_ok() {
            let message = read_last_error(loaded, status.message_len)
                .unwrap_or_else(|| format!("solver returned status {}", status.code));
            return Err(PteraError::Solver(
                ErrorInfo::new("ptera_vlm.solve_failed", message)
                    .with_context("solver", loaded.name.clone()),
            ));
        }

        let mut solution: VlmSolution = serde_json::from_slice(&output).map_err(|err| {
            PteraError::Solver(
                ErrorInfo::new("ptera_vlm.decode_solution", err.to_string())
                    .with_context("solver", loaded.name.clone()),
            )
        })?;
        if solution.solver.is_empty() {
            solution.solver = loaded.name.clone();
        }
        if solution.solver_version.is_empty() {
            solution.solver_version = loaded.version.clone();
        }
        if solution.panel_count == 0 {
            solution.panel_count = problem.wing.panel_count();
        }
        Ok(Some(solution))
    }
}

fn default_library_name() -> OsString {
    OsString::from(format!(
        "{}ptera_vlm{}",
        env::consts::DLL_PREFIX,
        env::consts::DLL_SUFFIX
    ))
}

fn load(path: &OsStr) -> Option<LoadedSolver> {
    let display = Path::new(path).display().to_string();
    let library = match unsafe { Library::new(path) } {
        Ok(library) => library,
        Err(err) => {
            log::debug!("vortex-lattice library {display} not loadable: {err}");
            return None;
        }
    };
    let entrypoint: Entrypoint = match unsafe { library.get::<Entrypoint>(ENTRYPOINT_SYMBOL) } {
        Ok(symbol) => *symbol,
        Err(err) => {
            log::debug!("vortex-lattice library {display} exports no entrypoint: {err}");
            return None;
        }
    };

    let mut info = VlmSolverInfo::zeroed();
    let mut vtable = VlmVTable::zeroed();
    let status = unsafe { entrypoint(&mut info, &mut vtable) };
    if !status.is_ok() {
        log::debug!("vortex-lattice entrypoint in {display} failed with status {}", status.code);
        return None;
    }
    if let Err(err) = verify_abi_compat(&info) {
        log::warn!("ignoring vortex-lattice library {display}: {err}");
        return None;
    }

    let name = unsafe { info.name.as_str() }.ok()?.to_string();
    let version = unsafe { info.version.as_str() }.ok()?.to_string();
    if let Some(init) = vtable.init {
        if !init().is_ok() {
            log::warn!("vortex-lattice library {display} failed to initialise");
            return None;
        }
    }

    log::info!("loaded vortex-lattice solver {name} {version} from {display}");
    Some(LoadedSolver {
        _library: library,
        vtable,
        name: if name.is_empty() { "vlm".to_string() } else { name },
        version,
    })
}

extern "C" fn collect_output(sink: *mut c_void, ptr: *const u8, len: usize) -> VlmStatus {
    if sink.is_null() {
        return VlmStatus {
            code: 1,
            message_len: 0,
        };
    }
    let buffer = unsafe { &mut *(sink as *mut Vec<u8>) };
    if !ptr.is_null() && len > 0 {
        buffer.extend_from_slice(unsafe { std::slice::from_raw_parts(ptr, len) });
    }
    VlmStatus::OK
}

fn read_last_error(loaded: &LoadedSolver, message_len: usize) -> Option<String> {
    let last_error = loaded.vtable.last_error?;
    let capacity = message_len.clamp(1, 4096);
    let mut buffer = vec![0u8; capacity];
    let written = last_error(buffer.as_mut_ptr(), buffer.len());
    if written == 0 {
        return None;
    }
    buffer.truncate(written.min(capacity));
    String::from_utf8(buffer).ok()
}
