//! `windl_core` -- declarative Win32 API signature tables with a dynamic
//! loader.
//!
//! Native function signatures, struct layouts, and header constants are
//! plain `static` data; the loader resolves a table (or a selection of its
//! functions) into callable addresses through a pluggable FFI bridge, with
//! an optional process-wide singleton cache per library name.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `WinDlError` enum via `thiserror` |
//! | [`types`] | Marshalling primitives and the `FieldType` tagged union |
//! | [`buffer`] | Fixed-length buffer codec for embedded byte/text regions |
//! | [`structs`] | Struct/union layout descriptors with placement rules |
//! | [`windef`] | Windows macro-type vocabulary (`DWORD`, `HWND`, ...) |
//! | [`winstruct`] | Concrete native struct descriptors |
//! | [`api`] | Per-DLL signature tables (`user32`, `kernel32`, ...) |
//! | [`constants`] | Window style / show-state / peek-flag constants |
//! | [`winmsg`] | Window message identifiers |
//! | [`loader`] | `FfiBridge`, `Loader`, and the singleton `LibraryCache` |
//!
//! # Example
//!
//! ```no_run
//! use windl_core::api::user32;
//! use windl_core::loader::LoadSettings;
//!
//! let binding = user32::load(&["ShowWindow", "UpdateWindow"], LoadSettings::cached())?;
//! let show = binding.get("ShowWindow").unwrap();
//! let show: unsafe extern "system" fn(isize, i32) -> i32 = unsafe { show.cast() };
//! # Ok::<(), windl_core::WinDlError>(())
//! ```

pub mod api;
pub mod buffer;
pub mod constants;
pub mod errors;
pub mod loader;
pub mod structs;
pub mod types;
pub mod windef;
pub mod winmsg;
pub mod winstruct;

pub use api::{Signature, SignatureTable};
pub use buffer::{BufferSource, BufferValue, FixedBuffer, TextEncoding};
pub use errors::WinDlError;
pub use loader::{
    default_loader, FfiBridge, LibloadingBridge, LibraryBinding, LibraryCache, LoadSettings,
    Loader, ResolvedFn,
};
pub use structs::{Field, StructDescriptor, UnionDescriptor};
pub use types::{FieldType, FieldValue, Primitive};
