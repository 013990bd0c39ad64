//! Frame header decoding.

#![allow(non_snake_case)]

use std::fmt;

use bytemuck::AnyBitPattern;

use crate::{
    error::Result,
    format::{FieldOrder, Marker},
    reader::Reader,
};

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    #[inline]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }
}

impl From<Dimensions> for (u16, u16) {
    /// Converts to `(width, height)`.
    fn from(dims: Dimensions) -> Self {
        (dims.width, dims.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Start of a frame header, as laid out on disk after the `0xFF 0xXX` marker.
#[derive(Clone, Copy, AnyBitPattern)]
#[repr(C)]
#[allow(dead_code)]
struct FrameHeader {
    /// Segment length. Not validated, since only the fields below are read.
    Lf: [u8; 2],
    /// Sample precision in bits.
    P: u8,
    A: [u8; 2],
    B: [u8; 2],
}

/// A located frame segment, ready for its dimensions to be read.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    marker: Marker,
    offset: usize,
    order: FieldOrder,
    /// Positioned at the segment's length field.
    reader: Reader<'a>,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(marker: Marker, offset: usize, order: FieldOrder, reader: Reader<'a>) -> Self {
        Self {
            marker,
            offset,
            order,
            reader,
        }
    }

    /// Returns the offset of the frame's `0xFF 0xXX` marker in the input buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Decodes the frame's dimensions.
    ///
    /// Needs the length field plus 5 more bytes (precision, then the two 16-bit dimension fields)
    /// to be present in the buffer; otherwise this fails with a truncation error.
    pub fn dimensions(&self) -> Result<Dimensions> {
        let mut reader = self.reader.clone();
        let header: &FrameHeader = reader.read_obj()?;
        let a = u16::from_be_bytes(header.A);
        let b = u16::from_be_bytes(header.B);
        Ok(match self.order {
            FieldOrder::HeightWidth => Dimensions::new(b, a),
            FieldOrder::WidthHeight => Dimensions::new(a, b),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    use super::*;

    fn frame(bytes: &[u8], order: FieldOrder) -> Frame<'_> {
        Frame::new(Marker::SOF0, 0, order, Reader::new(bytes))
    }

    #[test]
    fn height_comes_first() {
        let bytes = [0x00, 0x11, 0x08, 0x00, 0xC8, 0x01, 0x90];
        let dims = frame(&bytes, FieldOrder::HeightWidth).dimensions().unwrap();
        assert_eq!(dims, Dimensions::new(400, 200));
        assert_eq!(dims.to_string(), "400x200");
        assert_eq!(<(u16, u16)>::from(dims), (400, 200));

        let dims = frame(&bytes, FieldOrder::WidthHeight).dimensions().unwrap();
        assert_eq!(dims, Dimensions::new(200, 400));
    }

    #[test]
    fn big_endian_fields() {
        let bytes = [0x00, 0x00, 0x08, 0x01, 0x00, 0xFF, 0xFF];
        let dims = frame(&bytes, FieldOrder::HeightWidth).dimensions().unwrap();
        assert_eq!(dims.height(), 256);
        assert_eq!(dims.width(), u16::MAX);
    }

    #[test]
    fn truncated_header() {
        let bytes = [0x00, 0x11, 0x08, 0x00, 0xC8, 0x01, 0x90];
        for len in 0..bytes.len() {
            let err = frame(&bytes[..len], FieldOrder::HeightWidth)
                .dimensions()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Truncated);
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let bytes = [0x00, 0x11, 0x08, 0x00, 0x01, 0x00, 0x02, 0x03, 0x01, 0x22, 0x00];
        let dims = frame(&bytes, FieldOrder::HeightWidth).dimensions().unwrap();
        assert_eq!(dims, Dimensions::new(2, 1));
    }
}
