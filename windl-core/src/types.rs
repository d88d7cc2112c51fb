//! Marshalling type registry.
//!
//! [`Primitive`] is the fixed catalogue of scalar marshalling types; every
//! native signature and struct layout in this crate is expressed in terms of
//! it.  [`FieldType`] is the tagged union actually carried by signature
//! tables and struct descriptors: a primitive, a fixed-length byte region
//! ([`FixedBuffer`](crate::buffer::FixedBuffer)), a nested struct, or a
//! union overlay.
//!
//! Both types are `const`-constructible so the per-DLL tables can live in
//! `static` data.  Scalar values cross the byte boundary in native byte
//! order, matching what the target ABI stores in memory.

use serde::Serialize;

use crate::buffer::{BufferSource, BufferValue, FixedBuffer};
use crate::errors::WinDlError;
use crate::structs::{StructDescriptor, UnionDescriptor};

// ---------------------------------------------------------------------------
// Primitive scalars
// ---------------------------------------------------------------------------

/// Scalar marshalling types with a known native size.
///
/// `Usize`/`Isize` are the pointer-width integers (`WPARAM`/`LPARAM`
/// territory); `Pointer` covers every handle, string pointer, and callback --
/// the loader never dereferences, so one untyped pointer kind suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Primitive {
    Void,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Isize,
    Usize,
    Pointer,
}

impl Primitive {
    /// Native size in bytes.  `Void` occupies no storage.
    pub const fn size(self) -> usize {
        match self {
            Primitive::Void => 0,
            Primitive::I8 | Primitive::U8 => 1,
            Primitive::I16 | Primitive::U16 => 2,
            Primitive::I32 | Primitive::U32 | Primitive::F32 => 4,
            Primitive::I64 | Primitive::U64 | Primitive::F64 => 8,
            Primitive::Isize | Primitive::Usize | Primitive::Pointer => {
                std::mem::size_of::<usize>()
            }
        }
    }

    /// Native alignment.  Scalars are size-aligned on the Windows x86/x64
    /// ABIs.
    pub const fn align(self) -> usize {
        match self {
            Primitive::Void => 1,
            other => other.size(),
        }
    }

    fn read<'a>(self, buffer: &'a [u8], offset: usize) -> FieldValue<'a> {
        match self {
            Primitive::Void => FieldValue::Bytes(&buffer[offset..offset]),
            Primitive::I8 => FieldValue::Int(buffer[offset] as i8 as i64),
            Primitive::U8 => FieldValue::Uint(buffer[offset] as u64),
            Primitive::I16 => FieldValue::Int(i16::from_ne_bytes(ne(buffer, offset)) as i64),
            Primitive::U16 => FieldValue::Uint(u16::from_ne_bytes(ne(buffer, offset)) as u64),
            Primitive::I32 => FieldValue::Int(i32::from_ne_bytes(ne(buffer, offset)) as i64),
            Primitive::U32 => FieldValue::Uint(u32::from_ne_bytes(ne(buffer, offset)) as u64),
            Primitive::I64 => FieldValue::Int(i64::from_ne_bytes(ne(buffer, offset))),
            Primitive::U64 => FieldValue::Uint(u64::from_ne_bytes(ne(buffer, offset))),
            Primitive::F32 => FieldValue::Float(f32::from_ne_bytes(ne(buffer, offset)) as f64),
            Primitive::F64 => FieldValue::Float(f64::from_ne_bytes(ne(buffer, offset))),
            Primitive::Isize => FieldValue::Int(isize::from_ne_bytes(ne(buffer, offset)) as i64),
            Primitive::Usize | Primitive::Pointer => {
                FieldValue::Uint(usize::from_ne_bytes(ne(buffer, offset)) as u64)
            }
        }
    }

    fn write(self, buffer: &mut [u8], offset: usize, value: &FieldValue<'_>) -> Result<(), WinDlError> {
        match self {
            Primitive::Void => Ok(()),
            Primitive::I8 => put(buffer, offset, int_as::<i8>(value, "i8")?.to_ne_bytes()),
            Primitive::U8 => put(buffer, offset, uint_as::<u8>(value, "u8")?.to_ne_bytes()),
            Primitive::I16 => put(buffer, offset, int_as::<i16>(value, "i16")?.to_ne_bytes()),
            Primitive::U16 => put(buffer, offset, uint_as::<u16>(value, "u16")?.to_ne_bytes()),
            Primitive::I32 => put(buffer, offset, int_as::<i32>(value, "i32")?.to_ne_bytes()),
            Primitive::U32 => put(buffer, offset, uint_as::<u32>(value, "u32")?.to_ne_bytes()),
            Primitive::I64 => put(buffer, offset, int_as::<i64>(value, "i64")?.to_ne_bytes()),
            Primitive::U64 => put(buffer, offset, uint_as::<u64>(value, "u64")?.to_ne_bytes()),
            Primitive::F32 => {
                let v = value
                    .as_float()
                    .ok_or(WinDlError::ValueShape { expected: "f32" })?;
                put(buffer, offset, (v as f32).to_ne_bytes())
            }
            Primitive::F64 => {
                let v = value
                    .as_float()
                    .ok_or(WinDlError::ValueShape { expected: "f64" })?;
                put(buffer, offset, v.to_ne_bytes())
            }
            Primitive::Isize => {
                put(buffer, offset, int_as::<isize>(value, "isize")?.to_ne_bytes())
            }
            Primitive::Usize | Primitive::Pointer => put(
                buffer,
                offset,
                uint_as::<usize>(value, "pointer-width unsigned")?.to_ne_bytes(),
            ),
        }
    }
}

fn ne<const N: usize>(buffer: &[u8], offset: usize) -> [u8; N] {
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[offset..offset + N]);
    bytes
}

fn put<const N: usize>(buffer: &mut [u8], offset: usize, bytes: [u8; N]) -> Result<(), WinDlError> {
    buffer[offset..offset + N].copy_from_slice(&bytes);
    Ok(())
}

fn int_as<T: TryFrom<i64>>(value: &FieldValue<'_>, expected: &'static str) -> Result<T, WinDlError> {
    value
        .as_int()
        .and_then(|v| T::try_from(v).ok())
        .ok_or(WinDlError::ValueShape { expected })
}

fn uint_as<T: TryFrom<u64>>(value: &FieldValue<'_>, expected: &'static str) -> Result<T, WinDlError> {
    value
        .as_uint()
        .and_then(|v| T::try_from(v).ok())
        .ok_or(WinDlError::ValueShape { expected })
}

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// A marshalling type usable as a struct field, parameter, or return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Primitive(Primitive),
    Buffer(FixedBuffer),
    Struct(&'static StructDescriptor),
    Union(&'static UnionDescriptor),
}

impl FieldType {
    /// Size of the region this type occupies, in bytes.
    pub fn size(&self) -> usize {
        match self {
            FieldType::Primitive(p) => p.size(),
            FieldType::Buffer(b) => b.size(),
            FieldType::Struct(s) => s.size(),
            FieldType::Union(u) => u.size(),
        }
    }

    /// Required alignment of the region.
    ///
    /// Fixed buffers model raw `BYTE[n]` storage and align to 1; a wide
    /// character array that needs 2-alignment gets it from its position in
    /// the surrounding layout, which is an authoring invariant exactly like
    /// the total struct size.
    pub fn align(&self) -> usize {
        match self {
            FieldType::Primitive(p) => p.align(),
            FieldType::Buffer(_) => 1,
            FieldType::Struct(s) => s.align(),
            FieldType::Union(u) => u.align(),
        }
    }

    /// Decode the region at `offset` into a [`FieldValue`] view.
    ///
    /// Never mutates.  Struct and union regions come back as raw byte views;
    /// callers drill in through the nested descriptor.  Panics if
    /// `offset + size()` overruns `buffer` (caller contract).
    pub fn read<'a>(&self, buffer: &'a [u8], offset: usize) -> FieldValue<'a> {
        match self {
            FieldType::Primitive(p) => p.read(buffer, offset),
            FieldType::Buffer(b) => match b.get(buffer, offset) {
                BufferValue::Bytes(bytes) => FieldValue::Bytes(bytes),
                BufferValue::Text(text) => FieldValue::Text(text),
            },
            FieldType::Struct(_) | FieldType::Union(_) => {
                FieldValue::Bytes(&buffer[offset..offset + self.size()])
            }
        }
    }

    /// Encode `value` into the region at `offset`.
    ///
    /// Fails with [`WinDlError::ValueShape`] when the value's shape (or
    /// integer range) does not fit the type, and with
    /// [`WinDlError::BufferOverflow`] when a byte/text value exceeds the
    /// region.  The buffer is untouched on failure.
    pub fn write(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: &FieldValue<'_>,
    ) -> Result<(), WinDlError> {
        match self {
            FieldType::Primitive(p) => p.write(buffer, offset, value),
            FieldType::Buffer(b) => match value {
                FieldValue::Bytes(bytes) => b.set(buffer, offset, BufferSource::Bytes(bytes)),
                FieldValue::Text(text) => b.set(buffer, offset, BufferSource::Text(text)),
                _ => Err(WinDlError::ValueShape {
                    expected: "bytes or text",
                }),
            },
            FieldType::Struct(_) | FieldType::Union(_) => {
                let bytes = value.as_bytes().ok_or(WinDlError::ValueShape {
                    expected: "raw bytes",
                })?;
                let capacity = self.size();
                if bytes.len() > capacity {
                    return Err(WinDlError::BufferOverflow {
                        len: bytes.len(),
                        capacity,
                    });
                }
                buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Decoded values
// ---------------------------------------------------------------------------

/// A decoded view of (or a value destined for) one field region.
///
/// Signed and unsigned integers are widened to 64 bits; `Bytes` borrows the
/// owning buffer, `Text` is owned because decoding allocates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bytes(&'a [u8]),
    Text(String),
}

impl<'a> FieldValue<'a> {
    /// Signed view; accepts `Uint` values that fit in `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            FieldValue::Int(v) => Some(v),
            FieldValue::Uint(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Unsigned view; accepts non-negative `Int` values.
    pub fn as_uint(&self) -> Option<u64> {
        match *self {
            FieldValue::Uint(v) => Some(v),
            FieldValue::Int(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            FieldValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            FieldValue::Bytes(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
