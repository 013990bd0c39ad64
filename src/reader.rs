//! Bounds-checked cursor over the input bytes.

use std::mem;

use bytemuck::AnyBitPattern;

use crate::error::{Error, Repr, Result};

#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        // `position` never exceeds `buf.len()`, but don't rely on that for memory safety.
        self.buf.get(self.position..).unwrap_or(&[])
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    /// Reads `count` bytes, or fails without moving the cursor if fewer remain.
    pub(crate) fn read_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        let slice = self.remaining().get(..count).ok_or_else(|| self.truncated(count))?;
        self.position += count;
        Ok(slice)
    }

    pub(crate) fn read_obj<T: AnyBitPattern>(&mut self) -> Result<&'a T> {
        assert_eq!(mem::align_of::<T>(), 1);

        let bytes = self.read_slice(mem::size_of::<T>())?;
        Ok(bytemuck::from_bytes(bytes))
    }

    fn truncated(&self, needed: usize) -> Error {
        Error::from(Repr::Truncated {
            offset: self.position,
            needed,
        })
    }
}
