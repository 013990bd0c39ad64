//! Segment walker.
//!
//! Starting after the signature, every segment is introduced by the format's marker prefix byte
//! and a marker code, followed by a 2-byte big-endian length that counts itself but not the
//! marker. Segments that don't describe the frame are skipped by that length without being
//! interpreted, which keeps the scan cheap: at most one pass over the input, and usually just a
//! few hundred bytes of it.
//!
//! Since markers and segment bodies look alike, there's no way to resynchronize after reading a
//! wrong length; the scan simply fails when it doesn't find a marker prefix where it expects one.


use crate::{
    error::{Error, Repr, Result},
    format::{ContainerFormat, Marker},
    frame::Frame,
    reader::Reader,
};

/// A skipped segment of the container.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    marker: Marker,
    offset: usize,
    length: u16,
    body: &'a [u8],
}

impl<'a> Segment<'a> {
    /// Returns the offset of the segment's `0xFF 0xXX` marker in the input buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The declared segment length, which includes the 2 length bytes themselves.
    #[inline]
    pub fn length(&self) -> u16 {
        self.length
    }

    /// The segment's contents, excluding the marker and the length field.
    #[inline]
    pub fn body(&self) -> &'a [u8] {
        self.body
    }
}

/// Outcome of a single [`SegmentScanner::next_segment`] call.
#[derive(Debug)]
pub enum Step<'a> {
    /// A segment that doesn't describe the frame was skipped.
    Segment(Segment<'a>),
    /// The frame segment was found. The scan is over.
    Frame(Frame<'a>),
}

pub struct SegmentScanner<'a> {
    reader: Reader<'a>,
    format: &'a ContainerFormat,
    frame: Option<Frame<'a>>,
}

impl<'a> SegmentScanner<'a> {
    /// Checks that `buf` starts with the signature of `format` and prepares to scan the segments
    /// following it.
    pub fn new(buf: &'a [u8], format: &'a ContainerFormat) -> Result<Self> {
        let mut reader = Reader::new(buf);
        let signature = format.signature();
        if reader.read_slice(signature.len()).ok() != Some(signature) {
            return Err(Error::from(Repr::Signature {
                format: format.name(),
                expected: signature,
            }));
        }

        Ok(Self {
            reader,
            format,
            frame: None,
        })
    }

    /// Returns the current scan position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.reader.position()
    }

    /// Advances past the next segment, or stops at the frame segment.
    ///
    /// Once the frame segment has been found, every further call returns it again without
    /// moving.
    pub fn next_segment(&mut self) -> Result<Step<'a>> {
        if let Some(frame) = &self.frame {
            return Ok(Step::Frame(frame.clone()));
        }

        let offset = self.reader.position();
        if self.reader.remaining().is_empty() {
            return Err(Error::from(Repr::NoFrame { offset }));
        }

        let prefix = self.reader.read_u8()?;
        if prefix != self.format.marker_prefix() {
            return Err(Error::from(Repr::SyncLost {
                offset,
                byte: prefix,
            }));
        }

        let marker = Marker(self.reader.read_u8()?);

        if self.format.is_frame_marker(marker) {
            let frame = Frame::new(
                marker,
                offset,
                self.format.field_order(),
                self.reader.clone(),
            );
            self.frame = Some(frame.clone());
            return Ok(Step::Frame(frame));
        }

        if self.format.is_end_marker(marker) {
            return Err(Error::from(Repr::NoFrame { offset }));
        }

        let length_offset = self.reader.position();
        let length = self.reader.read_u16()?;
        if length < 2 {
            return Err(Error::from(Repr::InvalidLength {
                offset: length_offset,
                length,
            }));
        }
        let body = self.reader.read_slice(usize::from(length - 2))?;

        Ok(Step::Segment(Segment {
            marker,
            offset,
            length,
            body,
        }))
    }

    /// Skips segments until the frame segment is found.
    pub fn find_frame(&mut self) -> Result<Frame<'a>> {
        loop {
            if let Step::Frame(frame) = self.next_segment()? {
                return Ok(frame);
            }
        }
    }
}
