//! `comctl32.dll` exports.

use std::sync::Arc;

use super::{f, SignatureTable};
use crate::errors::WinDlError;
use crate::loader::{self, LibraryBinding, LoadSettings};
use crate::windef::{BOOL, LPINITCOMMONCONTROLSEX};

pub const DLL_NAME: &str = "comctl32";

pub static API: SignatureTable = SignatureTable::new(
    DLL_NAME,
    &[f("InitCommonControlsEx", BOOL, &[LPINITCOMMONCONTROLSEX])],
);

/// Load `comctl32` with the selected functions (empty slice = all).
pub fn load(fns: &[&str], settings: LoadSettings) -> Result<Arc<LibraryBinding>, WinDlError> {
    loader::load(DLL_NAME, &API, fns, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_common_controls_ex() {
        let sig = API.get("InitCommonControlsEx").unwrap();
        assert_eq!(sig.ret, BOOL);
        assert_eq!(sig.params, &[LPINITCOMMONCONTROLSEX]);
    }
}
