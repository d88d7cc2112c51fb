//! Layout descriptors for the native structures the signature tables touch.
//!
//! Field order is native memory order; sizes and offsets are asserted
//! against the documented `sizeof` values in the tests below.  The wide
//! string members of `DISPLAY_DEVICEW` are fixed-length buffer fields sized
//! in **bytes** (`WCHAR[32]` is 64 bytes), which is what makes the total
//! come out at the native 840.

use crate::buffer::FixedBuffer;
use crate::structs::{field, StructDescriptor, UnionDescriptor};
use crate::types::FieldType;
use crate::windef::{ATOM, BOOL, DWORD, HANDLE, HBRUSH, HCURSOR, HICON, HINSTANCE, HWND, INT,
    LONG, LPARAM, LPCWSTR, UINT, USHORT, WNDPROC, WORD, WPARAM};

/// <https://learn.microsoft.com/en-us/windows/win32/api/windef/ns-windef-point>
pub static POINT: StructDescriptor = StructDescriptor {
    name: "POINT",
    fields: &[field("x", LONG), field("y", LONG)],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/windef/ns-windef-rect>
pub static RECT: StructDescriptor = StructDescriptor {
    name: "RECT",
    fields: &[
        field("left", LONG),
        field("top", LONG),
        field("right", LONG),
        field("bottom", LONG),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/minwinbase/ns-minwinbase-filetime>
pub static FILETIME: StructDescriptor = StructDescriptor {
    name: "FILETIME",
    fields: &[
        field("dwLowDateTime", DWORD),
        field("dwHighDateTime", DWORD),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-msg>
pub static MSG: StructDescriptor = StructDescriptor {
    name: "MSG",
    fields: &[
        field("hwnd", HWND),
        field("message", UINT),
        field("wParam", WPARAM),
        field("lParam", LPARAM),
        field("time", DWORD),
        field("pt", FieldType::Struct(&POINT)),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw>
pub static WNDCLASSEXW: StructDescriptor = StructDescriptor {
    name: "WNDCLASSEXW",
    fields: &[
        field("cbSize", UINT),
        field("style", UINT),
        field("lpfnWndProc", WNDPROC),
        field("cbClsExtra", INT),
        field("cbWndExtra", INT),
        field("hInstance", HINSTANCE),
        field("hIcon", HICON),
        field("hCursor", HCURSOR),
        field("hbrBackground", HBRUSH),
        field("lpszMenuName", LPCWSTR),
        field("lpszClassName", LPCWSTR),
        field("hIconSm", HICON),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-windowinfo>
pub static WINDOWINFO: StructDescriptor = StructDescriptor {
    name: "WINDOWINFO",
    fields: &[
        field("cbSize", DWORD),
        field("rcWindow", FieldType::Struct(&RECT)),
        field("rcClient", FieldType::Struct(&RECT)),
        field("dwStyle", DWORD),
        field("dwExStyle", DWORD),
        field("dwWindowStatus", DWORD),
        field("cxWindowBorders", UINT),
        field("cyWindowBorders", UINT),
        field("atomWindowType", ATOM),
        field("wCreatorVersion", WORD),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-rawinputdevicelist>
pub static RAWINPUTDEVICELIST: StructDescriptor = StructDescriptor {
    name: "RAWINPUTDEVICELIST",
    fields: &[field("hDevice", HANDLE), field("dwType", DWORD)],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/commctrl/ns-commctrl-initcommoncontrolsex>
pub static INITCOMMONCONTROLSEX: StructDescriptor = StructDescriptor {
    name: "INITCOMMONCONTROLSEX",
    fields: &[field("dwSize", DWORD), field("dwICC", DWORD)],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/wingdi/ns-wingdi-display_devicew>
pub static DISPLAY_DEVICEW: StructDescriptor = StructDescriptor {
    name: "DISPLAY_DEVICEW",
    fields: &[
        field("cb", DWORD),
        field("DeviceName", FieldType::Buffer(FixedBuffer::wide(32))),
        field("DeviceString", FieldType::Buffer(FixedBuffer::wide(128))),
        field("StateFlags", DWORD),
        field("DeviceID", FieldType::Buffer(FixedBuffer::wide(128))),
        field("DeviceKey", FieldType::Buffer(FixedBuffer::wide(128))),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-rid_device_info_mouse>
pub static RID_DEVICE_INFO_MOUSE: StructDescriptor = StructDescriptor {
    name: "RID_DEVICE_INFO_MOUSE",
    fields: &[
        field("dwId", DWORD),
        field("dwNumberOfButtons", DWORD),
        field("dwSampleRate", DWORD),
        field("fHasHorizontalWheel", BOOL),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-rid_device_info_keyboard>
pub static RID_DEVICE_INFO_KEYBOARD: StructDescriptor = StructDescriptor {
    name: "RID_DEVICE_INFO_KEYBOARD",
    fields: &[
        field("dwType", DWORD),
        field("dwSubType", DWORD),
        field("dwKeyboardMode", DWORD),
        field("dwNumberOfFunctionKeys", DWORD),
        field("dwNumberOfIndicators", DWORD),
        field("dwNumberOfKeysTotal", DWORD),
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-rid_device_info_hid>
pub static RID_DEVICE_INFO_HID: StructDescriptor = StructDescriptor {
    name: "RID_DEVICE_INFO_HID",
    fields: &[
        field("dwVendorId", DWORD),
        field("dwProductId", DWORD),
        field("dwVersionNumber", DWORD),
        field("usUsagePage", USHORT),
        field("usUsage", USHORT),
    ],
};

/// The variant overlay inside [`RID_DEVICE_INFO`].
pub static RID_DEVICE_INFO_UNION: UnionDescriptor = UnionDescriptor {
    name: "RID_DEVICE_INFO_DUMMYUNIONNAME",
    variants: &[
        &RID_DEVICE_INFO_MOUSE,
        &RID_DEVICE_INFO_KEYBOARD,
        &RID_DEVICE_INFO_HID,
    ],
};

/// <https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-rid_device_info>
pub static RID_DEVICE_INFO: StructDescriptor = StructDescriptor {
    name: "RID_DEVICE_INFO",
    fields: &[
        field("cbSize", DWORD),
        field("dwType", DWORD),
        field("DUMMYUNIONNAME", FieldType::Union(&RID_DEVICE_INFO_UNION)),
    ],
};

/// All descriptors declared by this module, for enumeration (CLI dumps,
/// blanket layout tests).
pub fn all_structs() -> &'static [&'static StructDescriptor] {
    static ALL: &[&StructDescriptor] = &[
        &POINT,
        &RECT,
        &FILETIME,
        &MSG,
        &WNDCLASSEXW,
        &WINDOWINFO,
        &RAWINPUTDEVICELIST,
        &INITCOMMONCONTROLSEX,
        &DISPLAY_DEVICEW,
        &RID_DEVICE_INFO_MOUSE,
        &RID_DEVICE_INFO_KEYBOARD,
        &RID_DEVICE_INFO_HID,
        &RID_DEVICE_INFO,
    ];
    ALL
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextEncoding;
    use crate::types::FieldValue;

    #[test]
    fn test_scalar_struct_sizes() {
        assert_eq!(POINT.size(), 8);
        assert_eq!(RECT.size(), 16);
        assert_eq!(FILETIME.size(), 8);
        assert_eq!(INITCOMMONCONTROLSEX.size(), 8);
    }

    #[test]
    fn test_display_devicew_matches_native_sizeof() {
        assert_eq!(DISPLAY_DEVICEW.size(), 840);
        assert_eq!(DISPLAY_DEVICEW.offset_of("DeviceName"), Some(4));
        assert_eq!(DISPLAY_DEVICEW.offset_of("StateFlags"), Some(324));
        assert_eq!(DISPLAY_DEVICEW.offset_of("DeviceID"), Some(328));
        assert_eq!(DISPLAY_DEVICEW.offset_of("DeviceKey"), Some(584));
    }

    #[test]
    fn test_display_devicew_device_name_roundtrip() {
        let mut instance = vec![0u8; DISPLAY_DEVICEW.size()];
        DISPLAY_DEVICEW
            .write_field(
                &mut instance,
                "DeviceName",
                &FieldValue::Text(r"\\.\DISPLAY1".to_owned()),
            )
            .unwrap();
        let name = DISPLAY_DEVICEW.read_field(&instance, "DeviceName").unwrap();
        let name = name.as_text().unwrap();
        // Full 32-unit region decodes; the write left the tail at NUL.
        assert_eq!(name.chars().count(), 32);
        assert!(name.starts_with(r"\\.\DISPLAY1"));
    }

    #[test]
    fn test_display_devicew_buffers_are_wide() {
        for name in ["DeviceName", "DeviceString", "DeviceID", "DeviceKey"] {
            let f = DISPLAY_DEVICEW
                .fields
                .iter()
                .find(|f| f.name == name)
                .unwrap();
            match f.ty {
                FieldType::Buffer(b) => assert_eq!(b.encoding(), Some(TextEncoding::Utf16Le)),
                other => panic!("{name} is not a buffer field: {other:?}"),
            }
        }
    }

    #[test]
    fn test_rid_device_info_matches_native_sizeof() {
        assert_eq!(RID_DEVICE_INFO_MOUSE.size(), 16);
        assert_eq!(RID_DEVICE_INFO_KEYBOARD.size(), 24);
        assert_eq!(RID_DEVICE_INFO_HID.size(), 16);
        assert_eq!(RID_DEVICE_INFO_UNION.size(), 24);
        assert_eq!(RID_DEVICE_INFO.size(), 32);
        assert_eq!(RID_DEVICE_INFO.offset_of("DUMMYUNIONNAME"), Some(8));
    }

    #[test]
    fn test_rid_union_variant_selection() {
        let hid = RID_DEVICE_INFO_UNION.variant("RID_DEVICE_INFO_HID").unwrap();
        assert_eq!(hid.offset_of("usUsagePage"), Some(12));
        assert!(RID_DEVICE_INFO_UNION.variant("RID_DEVICE_INFO_TOUCH").is_none());
    }

    #[test]
    fn test_windowinfo_matches_native_sizeof() {
        // 4 + 16 + 16 + 4*5 + 2 + 2 = 60 on both arches.
        assert_eq!(WINDOWINFO.size(), 60);
        assert_eq!(WINDOWINFO.offset_of("rcClient"), Some(20));
        assert_eq!(WINDOWINFO.offset_of("wCreatorVersion"), Some(58));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pointer_bearing_sizes_x64() {
        assert_eq!(MSG.size(), 48);
        assert_eq!(MSG.offset_of("wParam"), Some(16));
        assert_eq!(MSG.offset_of("pt"), Some(36));
        assert_eq!(WNDCLASSEXW.size(), 80);
        assert_eq!(WNDCLASSEXW.offset_of("hInstance"), Some(24));
        assert_eq!(RAWINPUTDEVICELIST.size(), 16);
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn test_pointer_bearing_sizes_x86() {
        assert_eq!(MSG.size(), 28);
        assert_eq!(WNDCLASSEXW.size(), 48);
        assert_eq!(RAWINPUTDEVICELIST.size(), 8);
    }

    #[test]
    fn test_all_structs_have_unique_names() {
        let mut names: Vec<_> = all_structs().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all_structs().len());
    }

    #[test]
    fn test_msg_nested_point_region() {
        let pt_offset = MSG.offset_of("pt").unwrap();
        let mut instance = vec![0u8; MSG.size()];
        instance[pt_offset..pt_offset + 4].copy_from_slice(&640_i32.to_ne_bytes());
        let pt = MSG.read_field(&instance, "pt").unwrap();
        let region = pt.as_bytes().unwrap();
        assert_eq!(region.len(), POINT.size());
        assert_eq!(POINT.read_field(region, "x").unwrap(), FieldValue::Int(640));
    }
}
