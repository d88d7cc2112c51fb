//! `ntdll.dll` exports.

use std::sync::Arc;

use super::{f, SignatureTable};
use crate::errors::WinDlError;
use crate::loader::{self, LibraryBinding, LoadSettings};
use crate::windef::{DWORD32, HANDLE, NTSTATUS, PULONG, PVOID, ULONG};

pub const DLL_NAME: &str = "ntdll";

pub static API: SignatureTable = SignatureTable::new(
    DLL_NAME,
    &[f(
        "NtQueryInformationProcess",
        NTSTATUS,
        &[HANDLE, DWORD32, PVOID, ULONG, PULONG],
    )],
);

/// Load `ntdll` with the selected functions (empty slice = all).
pub fn load(fns: &[&str], settings: LoadSettings) -> Result<Arc<LibraryBinding>, WinDlError> {
    loader::load(DLL_NAME, &API, fns, settings)
}
