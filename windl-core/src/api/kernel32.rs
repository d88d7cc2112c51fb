//! `kernel32.dll` exports: module handles, heap and process utilities,
//! error reporting.

use std::sync::Arc;

use super::{f, SignatureTable};
use crate::errors::WinDlError;
use crate::loader::{self, LibraryBinding, LoadSettings};
use crate::windef::{
    BOOL, DWORD, HANDLE, HMODULE, INT, LPCTSTR, LPCVOID, LPTSTR, LPVOID, PFILETIME, PHANDLE,
    VA_LIST, VOID,
};

pub const DLL_NAME: &str = "kernel32";

pub static API: SignatureTable = SignatureTable::new(
    DLL_NAME,
    &[
        f(
            "FormatMessageW",
            DWORD,
            &[DWORD, LPCVOID, DWORD, DWORD, LPTSTR, DWORD, VA_LIST],
        ),
        f("FreeConsole", BOOL, &[]),
        f("GetLastError", DWORD, &[]),
        f("GetModuleHandleW", HMODULE, &[LPCTSTR]),
        f("GetModuleHandleExW", BOOL, &[DWORD, LPCTSTR, HMODULE]),
        f("GetProcessHeaps", DWORD, &[DWORD, PHANDLE]),
        f("GetSystemTimes", BOOL, &[PFILETIME, PFILETIME, PFILETIME]),
        f("HeapFree", BOOL, &[HANDLE, DWORD, LPVOID]),
        f("OpenProcess", HANDLE, &[DWORD, BOOL, DWORD]),
        f("OutputDebugStringW", VOID, &[LPCTSTR]),
        f("SetLastError", VOID, &[DWORD]),
        f("SetThreadExecutionState", INT, &[INT]),
    ],
);

/// Load `kernel32` with the selected functions (empty slice = all).
pub fn load(fns: &[&str], settings: LoadSettings) -> Result<Arc<LibraryBinding>, WinDlError> {
    loader::load(DLL_NAME, &API, fns, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signatures() {
        let sig = API.get("GetLastError").unwrap();
        assert_eq!(sig.ret, DWORD);
        assert!(sig.params.is_empty());

        let sig = API.get("OpenProcess").unwrap();
        assert_eq!(sig.ret, HANDLE);
        assert_eq!(sig.params, &[DWORD, BOOL, DWORD]);
    }

    #[test]
    fn test_format_message_arity() {
        assert_eq!(API.get("FormatMessageW").unwrap().params.len(), 7);
    }
}
