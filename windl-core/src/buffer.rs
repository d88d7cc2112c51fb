//! Fixed-length buffer codec.
//!
//! Native structs embed fixed-size byte regions -- `WCHAR DeviceName[32]`
//! and friends -- that neither a scalar nor a pointer models.  [`FixedBuffer`]
//! is the field type for such a region: a constant byte capacity plus an
//! optional text encoding.  With an encoding, `get` decodes the whole region
//! to a `String` and `set` accepts text; without one, the region is raw
//! bytes.
//!
//! Two behaviors are deliberate and load-bearing for byte-for-byte parity
//! with structures native code reads back:
//!
//! - `get` decodes the **full** region, trailing garbage included.  No
//!   NUL trimming.
//! - `set` copies left-aligned and leaves trailing bytes of the region
//!   unmodified.  No zero padding.

use serde::Serialize;

use crate::errors::WinDlError;

// ---------------------------------------------------------------------------
// Encodings
// ---------------------------------------------------------------------------

/// Text encodings understood by the codec.
///
/// `Utf16Le` is the native wide-string representation; `Utf8` covers narrow
/// text.  Decoding is lossy on invalid code units, mirroring how native
/// buffers with arbitrary trailing bytes have always round-tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    Utf16Le,
    Utf8,
}

impl TextEncoding {
    fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf16Le => text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect(),
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
        }
    }

    fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf16Le => {
                // An odd trailing byte cannot form a code unit and is dropped.
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// The codec
// ---------------------------------------------------------------------------

/// Field type for a fixed-size byte region embedded in a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedBuffer {
    size: usize,
    encoding: Option<TextEncoding>,
}

impl FixedBuffer {
    /// Raw byte region of `size` bytes, no text interpretation.
    pub const fn bytes(size: usize) -> Self {
        Self {
            size,
            encoding: None,
        }
    }

    /// Byte region of `size` bytes decoded/encoded as `encoding`.
    pub const fn text(size: usize, encoding: TextEncoding) -> Self {
        Self {
            size,
            encoding: Some(encoding),
        }
    }

    /// Wide-string region of `chars` UTF-16 code units (`WCHAR[chars]`).
    pub const fn wide(chars: usize) -> Self {
        Self::text(chars * 2, TextEncoding::Utf16Le)
    }

    /// Capacity in bytes.  Fixed at construction.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn encoding(&self) -> Option<TextEncoding> {
        self.encoding
    }

    /// Decode the region starting at `offset`.
    ///
    /// Returns exactly [`size`](Self::size) bytes as a borrowed view, or,
    /// when an encoding is configured, the decode of those bytes as an owned
    /// `String` (trailing bytes included -- see the module docs).  Borrowed
    /// views alias `buffer`; copy before mutating the source.
    ///
    /// Panics if `offset + size` overruns `buffer` (caller contract).
    pub fn get<'a>(&self, buffer: &'a [u8], offset: usize) -> BufferValue<'a> {
        let region = &buffer[offset..offset + self.size];
        match self.encoding {
            Some(encoding) => BufferValue::Text(encoding.decode(region)),
            None => BufferValue::Bytes(region),
        }
    }

    /// Encode `value` into the region starting at `offset`.
    ///
    /// Text requires a configured encoding ([`WinDlError::MissingEncoding`]
    /// otherwise).  A value longer than the capacity fails with
    /// [`WinDlError::BufferOverflow`] before anything is copied.  On success
    /// the bytes land left-aligned at `offset`; the rest of the region is
    /// left as it was.
    pub fn set<'v>(
        &self,
        buffer: &mut [u8],
        offset: usize,
        value: impl Into<BufferSource<'v>>,
    ) -> Result<(), WinDlError> {
        let encoded: Vec<u8>;
        let bytes: &[u8] = match value.into() {
            BufferSource::Text(text) => match self.encoding {
                Some(encoding) => {
                    encoded = encoding.encode(text);
                    &encoded
                }
                None => return Err(WinDlError::MissingEncoding),
            },
            BufferSource::Bytes(b) => b,
            BufferSource::Owned(v) => {
                encoded = v;
                &encoded
            }
        };

        if bytes.len() > self.size {
            return Err(WinDlError::BufferOverflow {
                len: bytes.len(),
                capacity: self.size,
            });
        }

        buffer[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Value shapes
// ---------------------------------------------------------------------------

/// Decoded result of [`FixedBuffer::get`].
#[derive(Debug, Clone, PartialEq)]
pub enum BufferValue<'a> {
    /// Borrowed view of the raw region (no encoding configured).
    Bytes(&'a [u8]),
    /// Owned decode of the full region (encoding configured).
    Text(String),
}

impl<'a> BufferValue<'a> {
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            BufferValue::Bytes(b) => Some(*b),
            BufferValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            BufferValue::Text(t) => Some(t),
            BufferValue::Bytes(_) => None,
        }
    }
}

/// The accepted input shapes of [`FixedBuffer::set`]: text, a borrowed byte
/// slice, or an owned byte vector.
#[derive(Debug)]
pub enum BufferSource<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Owned(Vec<u8>),
}

impl<'a> From<&'a str> for BufferSource<'a> {
    fn from(text: &'a str) -> Self {
        BufferSource::Text(text)
    }
}

impl<'a> From<&'a String> for BufferSource<'a> {
    fn from(text: &'a String) -> Self {
        BufferSource::Text(text)
    }
}

impl<'a> From<&'a [u8]> for BufferSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        BufferSource::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for BufferSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        BufferSource::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for BufferSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        BufferSource::Bytes(bytes)
    }
}

impl From<Vec<u8>> for BufferSource<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        BufferSource::Owned(bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_exact_capacity() {
        let field = FixedBuffer::bytes(4);
        let buf = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let view = field.get(&buf, 2).as_bytes().unwrap();
        assert_eq!(view, &[3, 4, 5, 6]);
    }

    #[test]
    fn test_get_aliases_owning_buffer() {
        let field = FixedBuffer::bytes(3);
        let buf = [9u8; 8];
        let view = field.get(&buf, 1).as_bytes().unwrap();
        assert!(std::ptr::eq(&buf[1], &view[0]));
    }

    #[test]
    fn test_raw_roundtrip() {
        let field = FixedBuffer::bytes(6);
        let mut buf = [0u8; 10];
        field.set(&mut buf, 2, &[0xCA, 0xFE, 0xBA][..]).unwrap();
        let view = field.get(&buf, 2).as_bytes().unwrap();
        assert_eq!(&view[..3], &[0xCA, 0xFE, 0xBA]);
        assert_eq!(view.len(), 6);
    }

    #[test]
    fn test_overflow_fails_before_copy() {
        let field = FixedBuffer::bytes(4);
        let mut buf = [0xAAu8; 8];
        let err = field.set(&mut buf, 0, &[1u8, 2, 3, 4, 5][..]).unwrap_err();
        match err {
            WinDlError::BufferOverflow { len, capacity } => {
                assert_eq!(len, 5);
                assert_eq!(capacity, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(buf, [0xAAu8; 8]);
    }

    #[test]
    fn test_encoded_overflow_fails() {
        // 4 chars encode to 8 bytes in UTF-16LE, over a 6-byte field.
        let field = FixedBuffer::text(6, TextEncoding::Utf16Le);
        let mut buf = [0u8; 6];
        let err = field.set(&mut buf, 0, "abcd").unwrap_err();
        assert!(matches!(err, WinDlError::BufferOverflow { len: 8, capacity: 6 }));
        assert_eq!(buf, [0u8; 6]);
    }

    #[test]
    fn test_string_without_encoding_is_type_error() {
        let field = FixedBuffer::bytes(16);
        let mut buf = [0u8; 16];
        let err = field.set(&mut buf, 0, "text").unwrap_err();
        assert!(matches!(err, WinDlError::MissingEncoding));
        assert_eq!(buf, [0u8; 16]);
    }

    #[test]
    fn test_set_does_not_zero_pad() {
        let field = FixedBuffer::bytes(6);
        let mut buf = [0xFFu8; 6];
        field.set(&mut buf, 0, &[1u8, 2][..]).unwrap();
        assert_eq!(buf, [1, 2, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_wide_roundtrip_keeps_trailing_region() {
        // Fix the prior contents so the expected decode is deterministic:
        // "Hi" occupies 2 code units, the remaining 2 stay 0x2020 (U+2020).
        let field = FixedBuffer::wide(4);
        assert_eq!(field.size(), 8);
        let mut buf = [0x20u8; 8];
        field.set(&mut buf, 0, "Hi").unwrap();
        let text = field.get(&buf, 0);
        let text = text.as_text().unwrap();
        assert_eq!(text.chars().count(), 4);
        assert!(text.starts_with("Hi"));
        assert_eq!(&text[2..], "\u{2020}\u{2020}");
    }

    #[test]
    fn test_utf8_roundtrip() {
        let field = FixedBuffer::text(8, TextEncoding::Utf8);
        let mut buf = [b'.'; 8];
        field.set(&mut buf, 0, "ok").unwrap();
        assert_eq!(field.get(&buf, 0).as_text().unwrap(), "ok......");
    }

    #[test]
    fn test_owned_vec_source() {
        let field = FixedBuffer::bytes(4);
        let mut buf = [0u8; 4];
        field.set(&mut buf, 0, vec![7u8, 8, 9]).unwrap();
        assert_eq!(buf, [7, 8, 9, 0]);
    }

    #[test]
    fn test_odd_trailing_byte_dropped_on_decode() {
        let field = FixedBuffer::text(5, TextEncoding::Utf16Le);
        let buf = [b'a', 0, b'b', 0, 0xEE];
        assert_eq!(field.get(&buf, 0).as_text().unwrap(), "ab");
    }
}
