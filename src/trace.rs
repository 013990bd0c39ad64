//! Diagnostic hook for observing a scan.
//!
//! A scan moves through `signature checked → scanning segments → frame found → dimensions read`,
//! and can fail at any of these points. Each transition is reported to a [`Trace`] sink passed in
//! by the caller. Sinks never influence the result.

use crate::{error::Error, format::Marker, frame::Dimensions, scan::Segment};

#[derive(Debug)]
#[non_exhaustive]
pub enum Event<'a> {
    /// The input starts with the signature of the named format.
    Signature { format: &'static str },
    /// A non-frame segment was skipped.
    Segment(Segment<'a>),
    /// The frame segment was located.
    Frame { offset: usize, marker: Marker },
    /// The frame header was decoded. This is the last event of a successful scan.
    Dimensions(Dimensions),
    /// The scan failed. This is the last event of an unsuccessful scan.
    Failed(&'a Error),
}

pub trait Trace {
    fn event(&mut self, event: &Event<'_>);
}

impl<F: FnMut(&Event<'_>)> Trace for F {
    fn event(&mut self, event: &Event<'_>) {
        self(event)
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn event(&mut self, _: &Event<'_>) {}
}

/// Forwards events to the [`log`] crate.
///
/// Scan steps are logged at `trace` level and failures at `debug` level, so nothing is emitted
/// unless the application enables it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn event(&mut self, event: &Event<'_>) {
        match event {
            Event::Signature { format } => log::trace!("found {format} signature"),
            Event::Segment(segment) => log::trace!(
                "skipping {:?} segment at {:#x} ({} bytes)",
                segment.marker(),
                segment.offset(),
                segment.length(),
            ),
            Event::Frame { offset, marker } => {
                log::trace!("found {:?} frame segment at {:#x}", marker, offset)
            }
            Event::Dimensions(dims) => log::trace!("frame dimensions: {dims}"),
            Event::Failed(e) => log::debug!("no dimensions: {e}"),
        }
    }
}
