//! Error types for `windl_core`.
//!
//! All Rust-side failures are funnelled through [`WinDlError`], which uses
//! `thiserror` for `Display` and `Error` derives.  Library/symbol resolution
//! failures carry the underlying `libloading::Error` as their source; the
//! loader never wraps or retries them, it hands them to the caller as-is.

use thiserror::Error;

/// Top-level error type for the `windl_core` library.
///
/// Each variant corresponds to a distinct failure class.
#[derive(Debug, Error)]
pub enum WinDlError {
    /// A string value was written into a buffer field that has no text
    /// encoding configured, so there is no way to interpret it.
    #[error("string value given, but the buffer field has no text encoding")]
    MissingEncoding,

    /// A value did not fit into a fixed-size byte region.
    ///
    /// Detected before any copy takes place; the target buffer is untouched.
    #[error("buffer given is {len} bytes, but only {capacity} bytes available")]
    BufferOverflow { len: usize, capacity: usize },

    /// A [`FieldValue`](crate::types::FieldValue) shape or range did not
    /// match the field type it was written to.
    #[error("value does not match field type (expected {expected})")]
    ValueShape { expected: &'static str },

    /// A field name was looked up on a struct descriptor that does not
    /// declare it.
    #[error("{descriptor} has no field named {field}")]
    UnknownField {
        descriptor: &'static str,
        field: String,
    },

    /// The dynamic library itself could not be opened.
    #[error("failed to load {dll}: {source}")]
    Library {
        dll: String,
        #[source]
        source: libloading::Error,
    },

    /// The library was opened but an exported symbol could not be resolved.
    #[error("failed to resolve symbol {name}: {source}")]
    Symbol {
        name: String,
        #[source]
        source: libloading::Error,
    },

    /// Resolution failure reported by a non-default
    /// [`FfiBridge`](crate::loader::FfiBridge) implementation.
    #[error("{0}")]
    Bridge(String),
}
