//! Per-DLL signature tables.
//!
//! One submodule per native library.  Each declares the exported function
//! names it binds together with the return and parameter marshalling types,
//! and a `load` convenience that routes the table through the process-wide
//! [`loader`](crate::loader).
//!
//! The tables are the wire protocol of this crate: a wrong parameter type or
//! order is not caught anywhere at runtime, it silently corrupts the call
//! frame.  Entries follow the documented signatures for the advertised
//! symbol, nothing is inferred.

use serde::Serialize;

use crate::types::FieldType;

pub mod comctl32;
pub mod kernel32;
pub mod ntdll;
pub mod user32;

// ---------------------------------------------------------------------------
// Signature data
// ---------------------------------------------------------------------------

/// Return type plus ordered parameter types of one exported function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub ret: FieldType,
    pub params: &'static [FieldType],
}

impl Signature {
    pub const fn new(ret: FieldType, params: &'static [FieldType]) -> Self {
        Self { ret, params }
    }
}

/// The exported-name -> [`Signature`] mapping of one DLL.
///
/// Declared once per library in `static` data and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignatureTable {
    dll: &'static str,
    entries: &'static [(&'static str, Signature)],
}

impl SignatureTable {
    pub const fn new(dll: &'static str, entries: &'static [(&'static str, Signature)]) -> Self {
        Self { dll, entries }
    }

    /// Library name the table describes (no extension).
    pub fn dll(&self) -> &'static str {
        self.dll
    }

    pub fn entries(&self) -> &'static [(&'static str, Signature)] {
        self.entries
    }

    pub fn get(&self, name: &str) -> Option<&'static Signature> {
        self.entry(name).map(|(_, sig)| sig)
    }

    pub fn entry(&self, name: &str) -> Option<(&'static str, &'static Signature)> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, sig)| (*n, sig))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Table-entry shorthand used by the per-DLL submodules.
pub(crate) const fn f(
    name: &'static str,
    ret: FieldType,
    params: &'static [FieldType],
) -> (&'static str, Signature) {
    (name, Signature::new(ret, params))
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Every table this crate declares.
pub fn all_tables() -> [&'static SignatureTable; 4] {
    [
        &comctl32::API,
        &kernel32::API,
        &ntdll::API,
        &user32::API,
    ]
}

/// Look a table up by library name (case-insensitive, no extension).
pub fn table_for(dll: &str) -> Option<&'static SignatureTable> {
    all_tables()
        .into_iter()
        .find(|t| t.dll.eq_ignore_ascii_case(dll))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
