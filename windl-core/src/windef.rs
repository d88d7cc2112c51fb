//! Windows macro-type vocabulary.
//!
//! The native headers describe every signature in macro types (`DWORD`,
//! `HWND`, `LPCTSTR`, ...).  This module maps each macro name to its
//! [`FieldType`] so the per-DLL tables read the way the headers do.  Handles
//! and every `LP*`/`P*` indirection are untyped pointers -- this layer never
//! dereferences them, the width is all that matters for the call ABI.

use crate::types::{FieldType, Primitive};

const fn prim(p: Primitive) -> FieldType {
    FieldType::Primitive(p)
}

pub const VOID: FieldType = prim(Primitive::Void);

// Fixed-width integers.
pub const BOOL: FieldType = prim(Primitive::I32);
pub const INT: FieldType = prim(Primitive::I32);
pub const LONG: FieldType = prim(Primitive::I32);
pub const NTSTATUS: FieldType = prim(Primitive::I32);
pub const UINT: FieldType = prim(Primitive::U32);
pub const DWORD: FieldType = prim(Primitive::U32);
pub const DWORD32: FieldType = prim(Primitive::U32);
pub const ULONG: FieldType = prim(Primitive::U32);
pub const WORD: FieldType = prim(Primitive::U16);
pub const USHORT: FieldType = prim(Primitive::U16);
pub const ATOM: FieldType = prim(Primitive::U16);
pub const BYTE: FieldType = prim(Primitive::U8);

// Pointer-width integers.
pub const WPARAM: FieldType = prim(Primitive::Usize);
pub const LPARAM: FieldType = prim(Primitive::Isize);
pub const LRESULT: FieldType = prim(Primitive::Isize);
pub const LONG_PTR: FieldType = prim(Primitive::Isize);

// Handles.
pub const HANDLE: FieldType = prim(Primitive::Pointer);
pub const HWND: FieldType = HANDLE;
pub const HMENU: FieldType = HANDLE;
pub const HINSTANCE: FieldType = HANDLE;
pub const HMODULE: FieldType = HANDLE;
pub const HDC: FieldType = HANDLE;
pub const HICON: FieldType = HANDLE;
pub const HCURSOR: FieldType = HANDLE;
pub const HBRUSH: FieldType = HANDLE;
pub const HWINEVENTHOOK: FieldType = HANDLE;

// Untyped and string pointers.
pub const PVOID: FieldType = prim(Primitive::Pointer);
pub const LPVOID: FieldType = PVOID;
pub const LPCVOID: FieldType = PVOID;
pub const LPTSTR: FieldType = PVOID;
pub const LPCTSTR: FieldType = PVOID;
pub const LPWSTR: FieldType = PVOID;
pub const LPCWSTR: FieldType = PVOID;
pub const VA_LIST: FieldType = PVOID;

// Out-parameter pointers.
pub const LPDWORD: FieldType = PVOID;
pub const PUINT: FieldType = PVOID;
pub const PULONG: FieldType = PVOID;
pub const PHANDLE: FieldType = PVOID;
pub const PFILETIME: FieldType = PVOID;
pub const LPPOINT: FieldType = PVOID;
pub const LPRECT: FieldType = PVOID;
pub const LPMSG: FieldType = PVOID;
pub const LPWNDCLASSEX: FieldType = PVOID;
pub const PWINDOWINFO: FieldType = PVOID;
pub const PRAWINPUTDEVICELIST: FieldType = PVOID;
pub const PDISPLAY_DEVICEW: FieldType = PVOID;
pub const LPINITCOMMONCONTROLSEX: FieldType = PVOID;

// Callbacks.
pub const WNDENUMPROC: FieldType = PVOID;
pub const WINEVENTPROC: FieldType = PVOID;
pub const WNDPROC: FieldType = PVOID;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_widths() {
        assert_eq!(DWORD.size(), 4);
        assert_eq!(BOOL.size(), 4);
        assert_eq!(ATOM.size(), 2);
        assert_eq!(BYTE.size(), 1);
    }

    #[test]
    fn test_pointer_widths_track_target() {
        let ptr = std::mem::size_of::<usize>();
        assert_eq!(HWND.size(), ptr);
        assert_eq!(WPARAM.size(), ptr);
        assert_eq!(LRESULT.size(), ptr);
        assert_eq!(LPCTSTR.size(), ptr);
    }
}
