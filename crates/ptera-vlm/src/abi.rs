//! Versioned C ABI spoken with external vortex-lattice solver libraries.
//!
//! Problem and solution payloads cross the boundary as JSON bytes, so the
//! library side is free to evolve its internal representation as long as the
//! entrypoint signature and this vtable stay fixed.

use std::os::raw::{c_char, c_void};

use ptera_core::{ErrorInfo, PteraError};

/// ABI revision this host understands.
pub const PTERA_VLM_ABI_VERSION: u32 = 1;

/// Symbol every solver library must export.
pub const ENTRYPOINT_SYMBOL: &[u8] = b"ptera_vlm_entrypoint\0";

/// Result returned by solver entrypoints.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VlmStatus {
    /// Zero on success, solver-defined otherwise.
    pub code: i32,
    /// Length of the message retrievable through the vtable's `last_error`.
    pub message_len: usize,
}

impl VlmStatus {
    /// Successful status with no pending error message.
    pub const OK: Self = Self {
        code: 0,
        message_len: 0,
    };

    /// Whether the call succeeded.
    pub fn is_ok(self) -> bool {
        self.code == 0
    }
}

/// Borrowed UTF-8 string crossing the ABI boundary.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AbiString {
    /// Pointer to the first byte; may be null for the empty string.
    pub ptr: *const c_char,
    /// Byte length of the string.
    pub len: usize,
}

impl AbiString {
    /// The empty string.
    pub fn empty() -> Self {
        Self {
            ptr: std::ptr::null(),
            len: 0,
        }
    }

    /// Reinterprets the raw bytes as UTF-8.
    ///
    /// # Safety
    ///
    /// `ptr` must either be null or point at `len` readable bytes that stay
    /// alive for `'a`.
    pub unsafe fn as_str<'a>(self) -> Result<&'a str, PteraError> {
        if self.ptr.is_null() {
            return Ok("");
        }
        let slice = std::slice::from_raw_parts(self.ptr as *const u8, self.len);
        std::str::from_utf8(slice).map_err(|err| {
            PteraError::Serde(ErrorInfo::new("ptera_vlm.invalid_utf8", err.to_string()))
        })
    }
}

/// Identity block filled in by the solver entrypoint.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct VlmSolverInfo {
    /// ABI revision the library was built against.
    pub abi_version: u32,
    /// Short solver name, e.g. `pterasoftware`.
    pub name: AbiString,
    /// Solver version string.
    pub version: AbiString,
}

impl VlmSolverInfo {
    /// Blank info block handed to the entrypoint for filling.
    pub fn zeroed() -> Self {
        Self {
            abi_version: 0,
            name: AbiString::empty(),
            version: AbiString::empty(),
        }
    }
}

/// Callback through which the solver emits its JSON solution bytes.
///
/// `sink` is the opaque pointer passed into the solve call and must be
/// forwarded unchanged.
pub type OutCallback = extern "C" fn(sink: *mut c_void, ptr: *const u8, len: usize) -> VlmStatus;

/// Function table filled in by the solver entrypoint.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct VlmVTable {
    /// One-time initialisation; optional.
    pub init: Option<extern "C" fn() -> VlmStatus>,
    /// Steady solve: consumes a JSON problem, emits a JSON solution.
    pub solve_steady: Option<
        extern "C" fn(
            sink: *mut c_void,
            problem_ptr: *const u8,
            problem_len: usize,
            emit: OutCallback,
        ) -> VlmStatus,
    >,
    /// Copies the most recent error message into the buffer, returning the
    /// number of bytes written; optional.
    pub last_error: Option<extern "C" fn(buffer: *mut u8, capacity: usize) -> usize>,
    /// Teardown hook invoked when the library handle is dropped; optional.
    pub shutdown: Option<extern "C" fn()>,
}

impl VlmVTable {
    /// Blank vtable handed to the entrypoint for filling.
    pub fn zeroed() -> Self {
        Self {
            init: None,
            solve_steady: None,
            last_error: None,
            shutdown: None,
        }
    }
}

/// Signature of [`ENTRYPOINT_SYMBOL`].
pub type Entrypoint =
    unsafe extern "C" fn(info: *mut VlmSolverInfo, vtable: *mut VlmVTable) -> VlmStatus;

/// Rejects libraries built against a different ABI revision.
pub fn verify_abi_compat(info: &VlmSolverInfo) -> Result<(), PteraError> {
    if info.abi_version != PTERA_VLM_ABI_VERSION {
        return Err(PteraError::Solver(ErrorInfo::new(
            "ptera_vlm.abi_mismatch",
            format!(
                "solver ABI {} is incompatible with host ABI {}",
                info.abi_version, PTERA_VLM_ABI_VERSION
            ),
        )));
    }
    Ok(())
}
