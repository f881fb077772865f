use ptera_vlm::abi::{
    verify_abi_compat, AbiString, VlmSolverInfo, VlmStatus, VlmVTable, PTERA_VLM_ABI_VERSION,
};

#[test]
fn matching_abi_version_is_accepted() {
    let info = VlmSolverInfo {
        abi_version: PTERA_VLM_ABI_VERSION,
        name: AbiString::empty(),
        version: AbiString::empty(),
    };
    assert!(verify_abi_compat(&info).is_ok());
}

#[test]
fn mismatched_abi_version_is_rejected() {
    let info = VlmSolverInfo {
        abi_version: PTERA_VLM_ABI_VERSION + 1,
        ..VlmSolverInfo::zeroed()
    };
    let err = verify_abi_compat(&info).unwrap_err();
    assert_eq!(err.info().code, "ptera_vlm.abi_mismatch");
}

#[test]
fn zeroed_info_fails_compat() {
    // An entrypoint that never filled the block in must not pass.
    assert!(verify_abi_compat(&VlmSolverInfo::zeroed()).is_err());
}

#[test]
fn empty_abi_string_reads_as_empty() {
    let value = unsafe { AbiString::empty().as_str() }.unwrap();
    assert_eq!(value, "");
}

#[test]
fn abi_string_round_trips_utf8() {
    let backing = "pterasoftware";
    let raw = AbiString {
        ptr: backing.as_ptr() as *const _,
        len: backing.len(),
    };
    let value = unsafe { raw.as_str() }.unwrap();
    assert_eq!(value, "pterasoftware");
}

#[test]
fn ok_status_has_no_pending_message() {
    assert!(VlmStatus::OK.is_ok());
    assert_eq!(VlmStatus::OK.message_len, 0);
    let failed = VlmStatus {
        code: 3,
        message_len: 17,
    };
    assert!(!failed.is_ok());
}

#[test]
fn zeroed_vtable_exports_nothing() {
    let vtable = VlmVTable::zeroed();
    assert!(vtable.init.is_none());
    assert!(vtable.solve_steady.is_none());
    assert!(vtable.last_error.is_none());
    assert!(vtable.shutdown.is_none());
}
