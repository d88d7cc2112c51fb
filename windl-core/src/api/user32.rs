//! `user32.dll` exports: window creation and enumeration, the message
//! queue, display device and raw input queries, win-event hooks.

use std::sync::Arc;

use super::{f, SignatureTable};
use crate::errors::WinDlError;
use crate::loader::{self, LibraryBinding, LoadSettings};
use crate::windef::{
    ATOM, BOOL, DWORD, HANDLE, HDC, HINSTANCE, HMENU, HMODULE, HWINEVENTHOOK, HWND, INT, LONG,
    LONG_PTR, LPARAM, LPCTSTR, LPCWSTR, LPDWORD, LPMSG, LPPOINT, LPRECT, LPTSTR, LPVOID,
    LPWNDCLASSEX, LPWSTR, LRESULT, PDISPLAY_DEVICEW, PRAWINPUTDEVICELIST, PUINT, PWINDOWINFO,
    UINT, WINEVENTPROC, WNDENUMPROC, WPARAM,
};

pub const DLL_NAME: &str = "user32";

pub static API: SignatureTable = SignatureTable::new(
    DLL_NAME,
    &[
        f("BringWindowToTop", BOOL, &[HWND]),
        f("ClientToScreen", BOOL, &[HWND, LPPOINT]),
        f("CloseWindow", BOOL, &[HWND]),
        f(
            "CreateWindowExW",
            HWND,
            &[
                DWORD, LPCTSTR, LPCTSTR, DWORD, INT, INT, INT, INT, HWND, HMENU, HINSTANCE, LPVOID,
            ],
        ),
        f("DefWindowProcW", LRESULT, &[HWND, UINT, WPARAM, LPARAM]),
        f("DestroyWindow", BOOL, &[HWND]),
        f("DispatchMessageW", LRESULT, &[LPMSG]),
        f(
            "EnumDisplayDevicesW",
            BOOL,
            &[LPCWSTR, DWORD, PDISPLAY_DEVICEW, DWORD],
        ),
        f("EnumThreadWindows", BOOL, &[DWORD, WNDENUMPROC, LPARAM]),
        f("EnumWindows", BOOL, &[WNDENUMPROC, LPARAM]),
        f("FindWindowExW", HWND, &[HWND, HWND, LPCTSTR, LPCTSTR]),
        f("GetAltTabInfoW", BOOL, &[HWND, INT, INT, LPWSTR, INT]),
        f("GetAncestor", HWND, &[HWND, UINT]),
        f("GetClassInfoExW", BOOL, &[HINSTANCE, LPCTSTR, LPWNDCLASSEX]),
        f("GetForegroundWindow", HWND, &[]),
        f("GetMessageW", BOOL, &[LPMSG, HWND, UINT, UINT]),
        f("GetParent", HWND, &[HWND]),
        f("GetRawInputDeviceInfoW", UINT, &[HANDLE, UINT, LPVOID, PUINT]),
        f(
            "GetRawInputDeviceList",
            INT,
            &[PRAWINPUTDEVICELIST, PUINT, UINT],
        ),
        f("GetTopWindow", HWND, &[HWND]),
        f("GetWindow", HWND, &[HWND, UINT]),
        f("GetWindowInfo", BOOL, &[HWND, PWINDOWINFO]),
        f("GetWindowLongW", LONG, &[HWND, INT]),
        // 64-bit Windows only; on a 32-bit library the symbol is absent and
        // resolution fails at the bridge.
        f("GetWindowLongPtrW", LONG_PTR, &[HWND, INT]),
        f("GetWindowRect", BOOL, &[HWND, LPRECT]),
        f("GetWindowTextW", INT, &[HWND, LPTSTR, INT]),
        f("GetWindowThreadProcessId", DWORD, &[HWND, LPDWORD]),
        f("IsWindowVisible", BOOL, &[HWND]),
        f("PeekMessageW", BOOL, &[LPMSG, HWND, UINT, UINT, UINT]),
        f("PostMessageW", BOOL, &[HWND, UINT, WPARAM, LPARAM]),
        f("PrintWindow", BOOL, &[HWND, HDC, UINT]),
        f("RegisterClassExW", ATOM, &[LPWNDCLASSEX]),
        f("SendMessageW", LRESULT, &[HWND, UINT, WPARAM, LPARAM]),
        f("SetForegroundWindow", BOOL, &[HWND]),
        f("SetWindowTextW", BOOL, &[HWND, LPCTSTR]),
        f(
            "SetWinEventHook",
            HWINEVENTHOOK,
            &[UINT, UINT, HMODULE, WINEVENTPROC, DWORD, DWORD, UINT],
        ),
        f("ShowWindow", BOOL, &[HWND, INT]),
        f("TranslateMessage", BOOL, &[LPMSG]),
        f("TranslateMessageEx", BOOL, &[LPMSG]),
        f("UnhookWinEvent", BOOL, &[HWINEVENTHOOK]),
        f("UpdateWindow", BOOL, &[HWND]),
    ],
);

/// Load `user32` with the selected functions (empty slice = all).
pub fn load(fns: &[&str], settings: LoadSettings) -> Result<Arc<LibraryBinding>, WinDlError> {
    loader::load(DLL_NAME, &API, fns, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_expected_exports() {
        assert_eq!(API.len(), 41);
        for name in ["CreateWindowExW", "EnumWindows", "ShowWindow", "SendMessageW"] {
            assert!(API.get(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn test_create_window_ex_signature() {
        let sig = API.get("CreateWindowExW").unwrap();
        assert_eq!(sig.ret, HWND);
        assert_eq!(sig.params.len(), 12);
        assert_eq!(sig.params[0], DWORD);
        assert_eq!(sig.params[11], LPVOID);
    }

    #[test]
    fn test_message_pump_signatures() {
        let get = API.get("GetMessageW").unwrap();
        assert_eq!(get.params, &[LPMSG, HWND, UINT, UINT]);
        let dispatch = API.get("DispatchMessageW").unwrap();
        assert_eq!(dispatch.ret, LRESULT);
        assert_eq!(dispatch.params, &[LPMSG]);
    }

    #[test]
    fn test_get_window_long_ptr_is_pointer_width() {
        let sig = API.get("GetWindowLongPtrW").unwrap();
        assert_eq!(sig.ret.size(), std::mem::size_of::<usize>());
    }
}
