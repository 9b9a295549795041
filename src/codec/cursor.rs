//! Byte cursors with nibble granularity.
//!
//! Nibbles are packed high half first: the first nibble of a byte occupies
//! bits 7..4, the second bits 3..0. Multi-byte fields are little-endian.
//! Whole-byte reads and writes always start on a byte boundary; a dangling
//! half byte is skipped (reader) or zero-filled (writer).

use alloc::vec::Vec;

/// Read cursor over a byte slice with a bit offset.
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
    bit: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, bit: 0 }
    }

    fn align(&mut self) {
        self.bit = self.bit.next_multiple_of(8);
    }

    /// Bytes consumed so far, counting a partially read byte.
    pub(crate) fn bytes_consumed(&self) -> usize {
        self.bit.div_ceil(8)
    }

    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.align();
        let start = self.bit / 8;
        let bytes = self.data.get(start..start + N)?;
        self.bit += N * 8;
        bytes.try_into().ok()
    }

    pub(crate) fn read_nibble(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.bit / 8)?;
        let value = if self.bit % 8 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        };
        self.bit += 4;
        Some(value)
    }

    pub(crate) fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    pub(crate) fn read_u16_le(&mut self) -> Option<u16> {
        self.take().map(u16::from_le_bytes)
    }

    pub(crate) fn read_u64_le(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }
}

/// Append-only write cursor.
pub(crate) struct BitWriter {
    out: Vec<u8>,
    pending: Option<u8>,
}

impl BitWriter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            pending: None,
        }
    }

    fn flush_nibble(&mut self) {
        if let Some(high) = self.pending.take() {
            self.out.push(high << 4);
        }
    }

    pub(crate) fn write_nibble(&mut self, value: u8) {
        let value = value & 0x0F;
        match self.pending.take() {
            Some(high) => self.out.push((high << 4) | value),
            None => self.pending = Some(value),
        }
    }

    pub(crate) fn write_u8(&mut self, value: u8) {
        self.flush_nibble();
        self.out.push(value);
    }

    pub(crate) fn write_u16_le(&mut self, value: u16) {
        self.flush_nibble();
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn write_u64_le(&mut self, value: u64) {
        self.flush_nibble();
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn into_bytes(mut self) -> Vec<u8> {
        self.flush_nibble();
        self.out
    }
}
