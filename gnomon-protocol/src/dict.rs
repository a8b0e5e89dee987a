//! Key-value dictionary payloads.
//!
//! Application messages on the companion link carry a flat dictionary of
//! typed tuples, so either side can add fields without breaking the other.
//!
//! Wire layout:
//! - COUNT (1 byte): number of tuples
//! - per tuple: KEY (u32 LE), KIND (1 byte), LENGTH (u16 LE), VALUE bytes
//!
//! Integer tuples may be 1, 2 or 4 bytes wide; text is UTF-8 without a
//! terminator. Readers must skip tuples with keys they do not know.

use core::str;

/// Tuple kind: raw bytes
pub const KIND_BYTES: u8 = 0;
/// Tuple kind: UTF-8 text
pub const KIND_TEXT: u8 = 1;
/// Tuple kind: unsigned integer (1, 2 or 4 bytes, little-endian)
pub const KIND_UINT: u8 = 2;
/// Tuple kind: signed integer (1, 2 or 4 bytes, little-endian)
pub const KIND_INT: u8 = 3;

/// Per-tuple overhead: KEY + KIND + LENGTH
const TUPLE_HEADER: usize = 4 + 1 + 2;

/// Errors that can occur while reading or writing a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Payload ended in the middle of a tuple
    Truncated,
    /// Writer buffer has no room for the tuple
    NoSpace,
    /// Unknown tuple kind byte
    BadKind,
    /// Integer tuple with an unsupported width
    BadWidth,
    /// Text tuple is not valid UTF-8
    Utf8,
}

/// A single decoded tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

/// Decoded tuple value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleValue<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Uint(u32),
    Int(i32),
}

/// Serializes a dictionary into a caller-provided buffer
pub struct DictWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    count: u8,
}

impl<'a> DictWriter<'a> {
    /// Start a dictionary in `buf`
    pub fn new(buf: &'a mut [u8]) -> Result<Self, DictError> {
        if buf.is_empty() {
            return Err(DictError::NoSpace);
        }
        buf[0] = 0;
        Ok(Self { buf, len: 1, count: 0 })
    }

    fn push_tuple(&mut self, key: u32, kind: u8, value: &[u8]) -> Result<(), DictError> {
        let needed = TUPLE_HEADER + value.len();
        if self.len + needed > self.buf.len() || self.count == u8::MAX {
            return Err(DictError::NoSpace);
        }

        self.buf[self.len..self.len + 4].copy_from_slice(&key.to_le_bytes());
        self.buf[self.len + 4] = kind;
        self.buf[self.len + 5..self.len + 7].copy_from_slice(&(value.len() as u16).to_le_bytes());
        self.buf[self.len + 7..self.len + 7 + value.len()].copy_from_slice(value);

        self.len += needed;
        self.count += 1;
        self.buf[0] = self.count;
        Ok(())
    }

    /// Append an unsigned 8-bit integer tuple
    pub fn push_u8(&mut self, key: u32, value: u8) -> Result<(), DictError> {
        self.push_tuple(key, KIND_UINT, &[value])
    }

    /// Append a signed 32-bit integer tuple
    pub fn push_i32(&mut self, key: u32, value: i32) -> Result<(), DictError> {
        self.push_tuple(key, KIND_INT, &value.to_le_bytes())
    }

    /// Append a text tuple
    pub fn push_text(&mut self, key: u32, text: &str) -> Result<(), DictError> {
        self.push_tuple(key, KIND_TEXT, text.as_bytes())
    }

    /// Finish the dictionary; returns the number of bytes written
    pub fn finish(self) -> usize {
        self.len
    }
}

/// Iterates over the tuples of a serialized dictionary
pub struct DictReader<'a> {
    rest: &'a [u8],
    remaining: u8,
}

impl<'a> DictReader<'a> {
    /// Open a dictionary payload for reading
    pub fn new(payload: &'a [u8]) -> Result<Self, DictError> {
        let (&count, rest) = payload.split_first().ok_or(DictError::Truncated)?;
        Ok(Self {
            rest,
            remaining: count,
        })
    }

    fn next_tuple(&mut self) -> Result<Tuple<'a>, DictError> {
        if self.rest.len() < TUPLE_HEADER {
            return Err(DictError::Truncated);
        }

        let key = u32::from_le_bytes([self.rest[0], self.rest[1], self.rest[2], self.rest[3]]);
        let kind = self.rest[4];
        let len = u16::from_le_bytes([self.rest[5], self.rest[6]]) as usize;

        if self.rest.len() < TUPLE_HEADER + len {
            return Err(DictError::Truncated);
        }
        let raw = &self.rest[TUPLE_HEADER..TUPLE_HEADER + len];
        self.rest = &self.rest[TUPLE_HEADER + len..];

        let value = match kind {
            KIND_BYTES => TupleValue::Bytes(raw),
            KIND_TEXT => TupleValue::Text(str::from_utf8(raw).map_err(|_| DictError::Utf8)?),
            KIND_UINT => TupleValue::Uint(read_uint(raw)?),
            KIND_INT => TupleValue::Int(read_int(raw)?),
            _ => return Err(DictError::BadKind),
        };

        Ok(Tuple { key, value })
    }
}

impl<'a> Iterator for DictReader<'a> {
    type Item = Result<Tuple<'a>, DictError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.next_tuple();
        if result.is_err() {
            // Stop iterating after a malformed tuple
            self.remaining = 0;
        }
        Some(result)
    }
}

fn read_uint(raw: &[u8]) -> Result<u32, DictError> {
    match raw {
        [a] => Ok(*a as u32),
        [a, b] => Ok(u16::from_le_bytes([*a, *b]) as u32),
        [a, b, c, d] => Ok(u32::from_le_bytes([*a, *b, *c, *d])),
        _ => Err(DictError::BadWidth),
    }
}

fn read_int(raw: &[u8]) -> Result<i32, DictError> {
    match raw {
        [a] => Ok(*a as i8 as i32),
        [a, b] => Ok(i16::from_le_bytes([*a, *b]) as i32),
        [a, b, c, d] => Ok(i32::from_le_bytes([*a, *b, *c, *d])),
        _ => Err(DictError::BadWidth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_int_and_text() {
        let mut buf = [0u8; 64];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.push_i32(0, -7).unwrap();
        writer.push_text(1, "Cloudy").unwrap();
        let len = writer.finish();

        let mut reader = DictReader::new(&buf[..len]).unwrap();

        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.key, 0);
        assert_eq!(first.value, TupleValue::Int(-7));

        let second = reader.next().unwrap().unwrap();
        assert_eq!(second.key, 1);
        assert_eq!(second.value, TupleValue::Text("Cloudy"));

        assert!(reader.next().is_none());
    }

    #[test]
    fn roundtrip_u8() {
        let mut buf = [0u8; 16];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.push_u8(0, 0).unwrap();
        let len = writer.finish();

        let mut reader = DictReader::new(&buf[..len]).unwrap();
        let tuple = reader.next().unwrap().unwrap();
        assert_eq!(tuple.key, 0);
        assert_eq!(tuple.value, TupleValue::Uint(0));
    }

    #[test]
    fn narrow_integer_widths() {
        // A 2-byte signed tuple, written by hand
        let payload = [
            1u8, // count
            5, 0, 0, 0, // key = 5
            KIND_INT,
            2, 0, // length = 2
            0xFE, 0xFF, // -2
        ];

        let mut reader = DictReader::new(&payload).unwrap();
        let tuple = reader.next().unwrap().unwrap();
        assert_eq!(tuple.key, 5);
        assert_eq!(tuple.value, TupleValue::Int(-2));
    }

    #[test]
    fn truncated_tuple() {
        let mut buf = [0u8; 32];
        let mut writer = DictWriter::new(&mut buf).unwrap();
        writer.push_i32(0, 21).unwrap();
        let len = writer.finish();

        // Chop the last value byte off
        let mut reader = DictReader::new(&buf[..len - 1]).unwrap();
        assert_eq!(reader.next().unwrap(), Err(DictError::Truncated));
        assert!(reader.next().is_none());
    }

    #[test]
    fn unknown_kind_rejected() {
        let payload = [
            1u8, // count
            0, 0, 0, 0, // key
            9,    // bogus kind
            0, 0, // length = 0
        ];

        let mut reader = DictReader::new(&payload).unwrap();
        assert_eq!(reader.next().unwrap(), Err(DictError::BadKind));
    }

    #[test]
    fn writer_rejects_overflow() {
        let mut buf = [0u8; 8]; // too small for header + i32 tuple
        let mut writer = DictWriter::new(&mut buf).unwrap();
        assert_eq!(writer.push_i32(0, 1), Err(DictError::NoSpace));
    }
}
