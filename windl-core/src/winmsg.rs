//! Window message identifiers.
//!
//! Windowing, notification, and menu messages, bit-for-bit the native
//! header values.
//! <https://learn.microsoft.com/en-us/windows/win32/winmsg/window-messages>

pub const MN_GETHMENU: u32 = 0x01E1;

pub const WM_ERASEBKGND: u32 = 0x0014;
pub const WM_GETFONT: u32 = 0x0031;
pub const WM_GETTEXT: u32 = 0x000D;
pub const WM_GETTEXTLENGTH: u32 = 0x000E;
pub const WM_SETFONT: u32 = 0x0030;
pub const WM_SETICON: u32 = 0x0080;
pub const WM_SETTEXT: u32 = 0x000C;

// Window notifications.
pub const WM_ACTIVATEAPP: u32 = 0x001C;
pub const WM_CANCELMODE: u32 = 0x001F;
pub const WM_CHILDACTIVATE: u32 = 0x0022;
pub const WM_CLOSE: u32 = 0x0010;
pub const WM_CREATE: u32 = 0x0001;
pub const WM_DESTROY: u32 = 0x0002;
pub const WM_ENABLE: u32 = 0x000A;
pub const WM_ENTERSIZEMOVE: u32 = 0x0231;
pub const WM_EXITSIZEMOVE: u32 = 0x0232;
pub const WM_GETICON: u32 = 0x007F;
pub const WM_GETMINMAXINFO: u32 = 0x0024;
pub const WM_INPUTLANGCHANGE: u32 = 0x0051;
pub const WM_INPUTLANGCHANGEREQUEST: u32 = 0x0050;
pub const WM_MOVE: u32 = 0x0003;
pub const WM_MOVING: u32 = 0x0216;
pub const WM_NCACTIVATE: u32 = 0x0086;
pub const WM_NCCALCSIZE: u32 = 0x0083;
pub const WM_NCCREATE: u32 = 0x0081;
pub const WM_NCDESTROY: u32 = 0x0082;
pub const WM_NULL: u32 = 0x0000;
pub const WM_QUERYDRAGICON: u32 = 0x0037;
pub const WM_QUERYOPEN: u32 = 0x0013;
pub const WM_QUIT: u32 = 0x0012;
pub const WM_SHOWWINDOW: u32 = 0x0018;
pub const WM_SIZE: u32 = 0x0005;
pub const WM_SIZING: u32 = 0x0214;
pub const WM_STYLECHANGED: u32 = 0x007D;
pub const WM_STYLECHANGING: u32 = 0x007C;
pub const WM_THEMECHANGED: u32 = 0x031A;
pub const WM_USERCHANGED: u32 = 0x0054;
pub const WM_WINDOWPOSCHANGED: u32 = 0x0047;
pub const WM_WINDOWPOSCHANGING: u32 = 0x0046;

pub const WM_COPYDATA: u32 = 0x004A;

// Menu notifications.
pub const WM_COMMAND: u32 = 0x0111;
pub const WM_CONTEXTMENU: u32 = 0x007B;
pub const WM_ENTERMENULOOP: u32 = 0x0211;
pub const WM_EXITMENULOOP: u32 = 0x0212;
pub const WM_GETTITLEBARINFOEX: u32 = 0x033F;
pub const WM_MENUCOMMAND: u32 = 0x0126;
pub const WM_MENUDRAG: u32 = 0x0123;
pub const WM_MENUGETOBJECT: u32 = 0x0124;
pub const WM_MENURBUTTONUP: u32 = 0x0122;
pub const WM_NEXTMENU: u32 = 0x0213;
pub const WM_UNINITMENUPOPUP: u32 = 0x0125;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_values() {
        assert_eq!(WM_NULL, 0);
        assert_eq!(WM_CREATE, 0x0001);
        assert_eq!(WM_CLOSE, 0x0010);
        assert_eq!(WM_QUIT, 0x0012);
        assert_eq!(WM_COMMAND, 0x0111);
        assert_eq!(MN_GETHMENU, 0x01E1);
    }

    #[test]
    fn test_sizemove_pairing() {
        assert_eq!(WM_EXITSIZEMOVE, WM_ENTERSIZEMOVE + 1);
        assert_eq!(WM_EXITMENULOOP, WM_ENTERMENULOOP + 1);
    }
}
