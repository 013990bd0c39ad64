use core::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The reason a scan did not produce [`Dimensions`][crate::Dimensions].
///
/// [`extract_dimensions`][crate::extract_dimensions] collapses all of these into `None`; they are
/// only observable through [`probe`][crate::probe] and the [`Trace`][crate::Trace] hook.
pub struct Error {
    repr: Repr,
}

pub(crate) enum Repr {
    Signature {
        format: &'static str,
        expected: &'static [u8],
    },
    SyncLost {
        offset: usize,
        byte: u8,
    },
    Truncated {
        offset: usize,
        needed: usize,
    },
    InvalidLength {
        offset: usize,
        length: u16,
    },
    NoFrame {
        offset: usize,
    },
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data does not begin with the container's signature.
    SignatureMismatch,
    /// A byte that should have been a marker prefix was something else.
    SyncLost,
    /// A read or skip needed more bytes than the buffer holds.
    Truncated,
    /// A segment declared a length too small to cover its own length field.
    InvalidLength,
    /// The stream ended (or an end-of-image marker was reached) before a frame segment.
    NoFrame,
}

impl Error {
    pub(crate) fn from(e: impl Into<Repr>) -> Self {
        Self { repr: e.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::Signature { .. } => ErrorKind::SignatureMismatch,
            Repr::SyncLost { .. } => ErrorKind::SyncLost,
            Repr::Truncated { .. } => ErrorKind::Truncated,
            Repr::InvalidLength { .. } => ErrorKind::InvalidLength,
            Repr::NoFrame { .. } => ErrorKind::NoFrame,
        }
    }

    /// Returns the byte offset in the input at which the problem was detected.
    pub fn offset(&self) -> usize {
        match self.repr {
            Repr::Signature { .. } => 0,
            Repr::SyncLost { offset, .. }
            | Repr::Truncated { offset, .. }
            | Repr::InvalidLength { offset, .. }
            | Repr::NoFrame { offset } => offset,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Signature { format, expected } => {
                write!(f, "data does not start with the {format} signature {expected:02x?}")
            }
            Repr::SyncLost { offset, byte } => write!(
                f,
                "expected a marker at offset {offset}, found byte {byte:02x}"
            ),
            Repr::Truncated { offset, needed } => write!(
                f,
                "reached end of data at offset {offset} while reading {needed} bytes"
            ),
            Repr::InvalidLength { offset, length } => {
                write!(f, "invalid segment length {length} at offset {offset}")
            }
            Repr::NoFrame { offset } => {
                write!(f, "no frame segment found before offset {offset}")
            }
        }
    }
}

impl std::error::Error for Error {}
