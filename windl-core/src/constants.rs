//! Window style, show-state, and message-peek constants.
//!
//! Values are bit-for-bit the native header literals.  The handful of
//! composite styles are spelled as the bitwise OR of their named members so
//! the member set is visible at the definition.

// ---------------------------------------------------------------------------
// Window styles
// ---------------------------------------------------------------------------
// https://learn.microsoft.com/en-us/windows/win32/winmsg/window-styles

pub const WS_BORDER: u32 = 0x0080_0000;
pub const WS_CAPTION: u32 = 0x00C0_0000;
pub const WS_CHILD: u32 = 0x4000_0000;
pub const WS_CLIPCHILDREN: u32 = 0x0200_0000;
pub const WS_CLIPSIBLINGS: u32 = 0x0400_0000;
pub const WS_DISABLED: u32 = 0x0800_0000;
pub const WS_DLGFRAME: u32 = 0x0040_0000;
pub const WS_GROUP: u32 = 0x0002_0000;
pub const WS_HSCROLL: u32 = 0x0010_0000;
pub const WS_ICONIC: u32 = 0x2000_0000;
pub const WS_MAXIMIZE: u32 = 0x0100_0000;
pub const WS_MAXIMIZEBOX: u32 = 0x0001_0000;
pub const WS_MINIMIZE: u32 = 0x2000_0000;
pub const WS_MINIMIZEBOX: u32 = 0x0002_0000;
pub const WS_OVERLAPPED: u32 = 0x0000_0000;
pub const WS_POPUP: u32 = 0x8000_0000;
pub const WS_SIZEBOX: u32 = 0x0004_0000;
pub const WS_SYSMENU: u32 = 0x0008_0000;
pub const WS_TABSTOP: u32 = 0x0001_0000;
pub const WS_THICKFRAME: u32 = 0x0004_0000;
pub const WS_TILED: u32 = 0x0000_0000;
pub const WS_VISIBLE: u32 = 0x1000_0000;
pub const WS_VSCROLL: u32 = 0x0020_0000;

pub const WS_OVERLAPPEDWINDOW: u32 =
    WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;
pub const WS_POPUPWINDOW: u32 = WS_POPUP | WS_BORDER | WS_SYSMENU;
pub const WS_TILEDWINDOW: u32 =
    WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;

// ---------------------------------------------------------------------------
// Extended window styles
// ---------------------------------------------------------------------------
// https://learn.microsoft.com/en-us/windows/win32/winmsg/extended-window-styles

pub const WS_EX_ACCEPTFILES: u32 = 0x0000_0010;
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;
pub const WS_EX_CLIENTEDGE: u32 = 0x0000_0200;
pub const WS_EX_COMPOSITED: u32 = 0x0200_0000;
pub const WS_EX_CONTEXTHELP: u32 = 0x0000_0400;
pub const WS_EX_CONTROLPARENT: u32 = 0x0001_0000;
pub const WS_EX_DLGMODALFRAME: u32 = 0x0000_0001;
pub const WS_EX_LAYERED: u32 = 0x0008_0000;
pub const WS_EX_LAYOUTRTL: u32 = 0x0040_0000;
pub const WS_EX_LEFT: u32 = 0x0000_0000;
pub const WS_EX_LEFTSCROLLBAR: u32 = 0x0000_4000;
pub const WS_EX_LTRREADING: u32 = 0x0000_0000;
pub const WS_EX_MDICHILD: u32 = 0x0000_0040;
pub const WS_EX_NOACTIVATE: u32 = 0x0800_0000;
pub const WS_EX_NOINHERITLAYOUT: u32 = 0x0010_0000;
pub const WS_EX_NOPARENTNOTIFY: u32 = 0x0000_0004;
pub const WS_EX_NOREDIRECTIONBITMAP: u32 = 0x0020_0000;
pub const WS_EX_RIGHT: u32 = 0x0000_1000;
pub const WS_EX_RIGHTSCROLLBAR: u32 = 0x0000_0000;
pub const WS_EX_RTLREADING: u32 = 0x0000_2000;
pub const WS_EX_STATICEDGE: u32 = 0x0002_0000;
pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;
pub const WS_EX_TOPMOST: u32 = 0x0000_0008;
pub const WS_EX_TRANSPARENT: u32 = 0x0000_0020;
pub const WS_EX_WINDOWEDGE: u32 = 0x0000_0100;

pub const WS_EX_OVERLAPPEDWINDOW: u32 = WS_EX_WINDOWEDGE | WS_EX_CLIENTEDGE;
pub const WS_EX_PALETTEWINDOW: u32 = WS_EX_WINDOWEDGE | WS_EX_TOOLWINDOW | WS_EX_TOPMOST;

// ---------------------------------------------------------------------------
// PeekMessage removal flags
// ---------------------------------------------------------------------------

pub const PM_NOREMOVE: u32 = 0x0000;
pub const PM_REMOVE: u32 = 0x0001;
pub const PM_NOYIELD: u32 = 0x0002;

/// `CreateWindowExW` default-position sentinel: bit 31 set, as a signed int.
pub const CW_USEDEFAULT: i32 = 0x8000_0000_u32 as i32;

// ---------------------------------------------------------------------------
// ShowWindow commands
// ---------------------------------------------------------------------------
// https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-showwindow

pub const SW_HIDE: i32 = 0;
pub const SW_SHOWNORMAL: i32 = 1;
pub const SW_SHOWMINIMIZED: i32 = 2;
pub const SW_SHOWMAXIMIZED: i32 = 3;
/// Alias of [`SW_SHOWMAXIMIZED`].
pub const SW_MAXIMIZE: i32 = 3;
pub const SW_SHOWNOACTIVATE: i32 = 4;
pub const SW_SHOW: i32 = 5;
pub const SW_MINIMIZE: i32 = 6;
pub const SW_SHOWMINNOACTIVE: i32 = 7;
pub const SW_SHOWNA: i32 = 8;
pub const SW_RESTORE: i32 = 9;
pub const SW_SHOWDEFAULT: i32 = 10;
pub const SW_FORCEMINIMIZE: i32 = 11;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_styles_match_member_or() {
        assert_eq!(
            WS_OVERLAPPEDWINDOW,
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX
        );
        assert_eq!(WS_POPUPWINDOW, WS_POPUP | WS_BORDER | WS_SYSMENU);
        assert_eq!(WS_TILEDWINDOW, WS_OVERLAPPEDWINDOW);
        assert_eq!(WS_EX_OVERLAPPEDWINDOW, WS_EX_WINDOWEDGE | WS_EX_CLIENTEDGE);
        assert_eq!(
            WS_EX_PALETTEWINDOW,
            WS_EX_WINDOWEDGE | WS_EX_TOOLWINDOW | WS_EX_TOPMOST
        );
    }

    #[test]
    fn test_composite_styles_literal_values() {
        assert_eq!(WS_OVERLAPPEDWINDOW, 0x00CF_0000);
        assert_eq!(WS_POPUPWINDOW, 0x8088_0000);
        assert_eq!(WS_EX_OVERLAPPEDWINDOW, 0x0000_0300);
        assert_eq!(WS_EX_PALETTEWINDOW, 0x0000_0188);
    }

    #[test]
    fn test_header_aliases() {
        assert_eq!(WS_TILED, WS_OVERLAPPED);
        assert_eq!(WS_ICONIC, WS_MINIMIZE);
        assert_eq!(WS_SIZEBOX, WS_THICKFRAME);
        assert_eq!(SW_MAXIMIZE, SW_SHOWMAXIMIZED);
    }

    #[test]
    fn test_cw_usedefault_is_bit_31() {
        assert_eq!(CW_USEDEFAULT as u32, 0x8000_0000);
        assert_eq!(CW_USEDEFAULT, i32::MIN);
    }
}
