//! Struct and union layout descriptors.
//!
//! A [`StructDescriptor`] is a static, ordered field-name -> type mapping;
//! declaring one is pure data, with no runtime validation that the layout
//! matches the real native ABI.  What *is* computed is placement: field
//! offsets round up to each field's alignment and the total size rounds up
//! to the struct's alignment, the same placement rules the native compiler
//! applies.  Whether the declared field list reproduces the native
//! `sizeof`/`offsetof` remains an authoring invariant, asserted in tests
//! against the documented values, never enforced at declaration time.
//!
//! A [`UnionDescriptor`] overlays several variant shapes on one region and
//! is sized to the largest.  No active-variant bookkeeping exists; the
//! native API decides which shape is meaningful, callers pick the matching
//! variant when decoding.

use serde::Serialize;

use crate::errors::WinDlError;
use crate::types::{FieldType, FieldValue};

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// One named field in a struct layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

/// Shorthand for declaring a [`Field`] in a `static` table.
pub const fn field(name: &'static str, ty: FieldType) -> Field {
    Field { name, ty }
}

/// Ordered field layout matching a native structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructDescriptor {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl StructDescriptor {
    /// Struct alignment: the largest field alignment.
    pub fn align(&self) -> usize {
        self.fields
            .iter()
            .map(|f| f.ty.align())
            .max()
            .unwrap_or(1)
    }

    /// Total size with placement padding, rounded up to the struct
    /// alignment.
    pub fn size(&self) -> usize {
        let mut end = 0;
        for f in self.fields {
            end = round_up(end, f.ty.align()) + f.ty.size();
        }
        round_up(end, self.align())
    }

    /// Byte offset of the named field, or `None` if undeclared.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut end = 0;
        for f in self.fields {
            let offset = round_up(end, f.ty.align());
            if f.name == name {
                return Some(offset);
            }
            end = offset + f.ty.size();
        }
        None
    }

    /// Every field with its computed offset, in declaration order.
    pub fn layout(&self) -> Vec<(Field, usize)> {
        let mut out = Vec::with_capacity(self.fields.len());
        let mut end = 0;
        for f in self.fields {
            let offset = round_up(end, f.ty.align());
            out.push((*f, offset));
            end = offset + f.ty.size();
        }
        out
    }

    /// Decode the named field out of an instance buffer.
    ///
    /// `buffer` must start at the struct's base; panics if it is shorter
    /// than the layout requires (caller contract, as with the raw codec).
    pub fn read_field<'a>(
        &self,
        buffer: &'a [u8],
        name: &str,
    ) -> Result<FieldValue<'a>, WinDlError> {
        let (f, offset) = self.find(name)?;
        Ok(f.ty.read(buffer, offset))
    }

    /// Encode `value` into the named field of an instance buffer.
    pub fn write_field(
        &self,
        buffer: &mut [u8],
        name: &str,
        value: &FieldValue<'_>,
    ) -> Result<(), WinDlError> {
        let (f, offset) = self.find(name)?;
        f.ty.write(buffer, offset, value)
    }

    fn find(&self, name: &str) -> Result<(Field, usize), WinDlError> {
        let mut end = 0;
        for f in self.fields {
            let offset = round_up(end, f.ty.align());
            if f.name == name {
                return Ok((*f, offset));
            }
            end = offset + f.ty.size();
        }
        Err(WinDlError::UnknownField {
            descriptor: self.name,
            field: name.to_owned(),
        })
    }
}

/// Variant overlay for a native union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnionDescriptor {
    pub name: &'static str,
    pub variants: &'static [&'static StructDescriptor],
}

impl UnionDescriptor {
    pub fn align(&self) -> usize {
        self.variants.iter().map(|v| v.align()).max().unwrap_or(1)
    }

    /// Size of the largest variant, rounded up to the union alignment.
    pub fn size(&self) -> usize {
        let largest = self.variants.iter().map(|v| v.size()).max().unwrap_or(0);
        round_up(largest, self.align())
    }

    /// Select a variant shape by name.
    pub fn variant(&self, name: &str) -> Option<&'static StructDescriptor> {
        self.variants.iter().copied().find(|v| v.name == name)
    }
}

fn round_up(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
