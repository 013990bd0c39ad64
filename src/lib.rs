//! Reads the pixel dimensions of an image straight from its container structure, without
//! decoding any image data.
//!
//! JPEG files consist of a sequence of marker-tagged, length-prefixed segments. The image width
//! and height live in the frame header (`SOFn`), usually within the first few hundred bytes. This
//! crate walks the segments up to that header and reads the two 16-bit fields from it.
//!
//! ```
//! let jpeg = [
//!     0xFF, 0xD8, // SOI
//!     0xFF, 0xE0, 0x00, 0x04, 0xAB, 0xCD, // APP0, 2 byte body
//!     0xFF, 0xC0, 0x00, 0x11, 0x08, // SOF0, length, precision
//!     0x00, 0xC8, // height
//!     0x01, 0x90, // width
//! ];
//! assert_eq!(segsize::extract_dimensions(&jpeg), Some((400, 200)));
//! assert_eq!(segsize::extract_dimensions(b"GIF89a"), None);
//! ```
//!
//! [`extract_dimensions`] is total: any input, including empty, truncated, or adversarial data,
//! yields either the dimensions or `None`. Use [`probe`] to find out *why* a scan failed.

mod error;
mod format;
mod frame;
mod reader;
mod scan;
mod trace;


pub use error::{Error, ErrorKind, Result};
pub use format::{ContainerFormat, FieldOrder, Marker};
pub use frame::{Dimensions, Frame};
pub use scan::{Segment, SegmentScanner, Step};
pub use trace::{Event, LogTrace, NoTrace, Trace};

/// Returns the `(width, height)` of a baseline JPEG image, or `None` if it can't be determined.
///
/// Diagnostics are sent to the [`log`] crate via [`LogTrace`].
pub fn extract_dimensions(image_bytes: &[u8]) -> Option<(u16, u16)> {
    extract_dimensions_traced(image_bytes, &mut LogTrace)
}

/// Like [`extract_dimensions`], but reports every scan step to `trace`.
pub fn extract_dimensions_traced(image_bytes: &[u8], trace: &mut dyn Trace) -> Option<(u16, u16)> {
    probe(image_bytes, &ContainerFormat::default(), trace)
        .ok()
        .map(Into::into)
}

/// Locates the first frame segment of `format` in `image_bytes` and decodes its dimensions.
///
/// On failure, [`Event::Failed`] is reported to `trace` before the error is returned.
pub fn probe(
    image_bytes: &[u8],
    format: &ContainerFormat,
    trace: &mut dyn Trace,
) -> Result<Dimensions> {
    let result = probe_impl(image_bytes, format, trace);
    if let Err(e) = &result {
        trace.event(&Event::Failed(e));
    }
    result
}

fn probe_impl(
    image_bytes: &[u8],
    format: &ContainerFormat,
    trace: &mut dyn Trace,
) -> Result<Dimensions> {
    let mut scanner = SegmentScanner::new(image_bytes, format)?;
    trace.event(&Event::Signature {
        format: format.name(),
    });

    loop {
        match scanner.next_segment()? {
            Step::Segment(segment) => trace.event(&Event::Segment(segment)),
            Step::Frame(frame) => {
                trace.event(&Event::Frame {
                    offset: frame.offset(),
                    marker: frame.marker(),
                });
                let dims = frame.dimensions()?;
                trace.event(&Event::Dimensions(dims));
                return Ok(dims);
            }
        }
    }
}
