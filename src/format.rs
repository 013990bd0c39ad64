//! Container format descriptors.

use std::fmt;

/// Order in which a frame header stores the two dimension fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// Number of lines first, then samples per line (JPEG).
    HeightWidth,
    WidthHeight,
}

/// Describes a container made of marker-prefixed, length-prefixed segments.
///
/// The scanner only needs to know how the stream starts, which byte introduces a marker, which
/// markers carry the frame header, and in which order that header stores the dimensions.
/// Everything else is skipped using the segment's own declared length.
#[derive(Debug, Clone)]
pub struct ContainerFormat {
    name: &'static str,
    signature: &'static [u8],
    marker_prefix: u8,
    frame_markers: &'static [u8],
    end_marker: Option<u8>,
    field_order: FieldOrder,
}

impl ContainerFormat {
    /// Baseline JPEG/JFIF: only `SOF0` frames are recognized.
    pub const JPEG: Self = Self::new(
        "JPEG",
        &[0xFF, 0xD8],
        0xFF,
        &[0xC0],
        Some(0xD9),
        FieldOrder::HeightWidth,
    );

    /// JPEG with any `SOFn` frame (progressive, lossless, arithmetic-coded, hierarchical).
    pub const JPEG_ANY_SOF: Self = Self::new(
        "JPEG",
        &[0xFF, 0xD8],
        0xFF,
        &[
            0xC0, 0xC1, 0xC2, 0xC3, 0xC5, 0xC6, 0xC7, 0xC9, 0xCA, 0xCB, 0xCD, 0xCE, 0xCF,
        ],
        Some(0xD9),
        FieldOrder::HeightWidth,
    );

    pub const fn new(
        name: &'static str,
        signature: &'static [u8],
        marker_prefix: u8,
        frame_markers: &'static [u8],
        end_marker: Option<u8>,
        field_order: FieldOrder,
    ) -> Self {
        Self {
            name,
            signature,
            marker_prefix,
            frame_markers,
            end_marker,
            field_order,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fixed leading bytes of every stream in this format.
    #[inline]
    pub fn signature(&self) -> &'static [u8] {
        self.signature
    }

    #[inline]
    pub fn marker_prefix(&self) -> u8 {
        self.marker_prefix
    }

    #[inline]
    pub fn field_order(&self) -> FieldOrder {
        self.field_order
    }

    /// Returns whether `marker` introduces a segment carrying the frame dimensions.
    #[inline]
    pub fn is_frame_marker(&self, marker: Marker) -> bool {
        self.frame_markers.contains(&marker.0)
    }

    #[inline]
    pub fn is_end_marker(&self, marker: Marker) -> bool {
        self.end_marker == Some(marker.0)
    }
}

impl Default for ContainerFormat {
    fn default() -> Self {
        Self::JPEG
    }
}

/// The code byte of a `0xFF 0xXX` marker.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(pub u8);

impl Marker {
    /// Baseline DCT.
    pub const SOF0: Self = Self(0xC0);
    /// Extended Sequential DCT.
    pub const SOF1: Self = Self(0xC1);
    /// Progressive DCT.
    pub const SOF2: Self = Self(0xC2);
    /// Lossless sequential.
    pub const SOF3: Self = Self(0xC3);
    pub const DHT: Self = Self(0xC4);
    pub const SOI: Self = Self(0xD8);
    pub const EOI: Self = Self(0xD9);
    pub const SOS: Self = Self(0xDA);
    pub const DQT: Self = Self(0xDB);
    pub const DRI: Self = Self(0xDD);
    pub const APP0: Self = Self(0xE0);
    pub const COM: Self = Self(0xFE);
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0x01 => f.write_str("TEM"),
            0xC4 => f.write_str("DHT"),
            0xC8 => f.write_str("JPG"),
            0xCC => f.write_str("DAC"),
            n @ 0xC0..=0xCF => write!(f, "SOF{}", n - 0xC0),
            n @ 0xD0..=0xD7 => write!(f, "RST{}", n - 0xD0),
            0xD8 => f.write_str("SOI"),
            0xD9 => f.write_str("EOI"),
            0xDA => f.write_str("SOS"),
            0xDB => f.write_str("DQT"),
            0xDC => f.write_str("DNL"),
            0xDD => f.write_str("DRI"),
            0xDE => f.write_str("DHP"),
            0xDF => f.write_str("EXP"),
            n @ 0xE0..=0xEF => write!(f, "APP{}", n - 0xE0),
            0xFE => f.write_str("COM"),
            n => f
                .debug_tuple("Marker")
                .field(&format_args!("{:02x}", n))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_names() {
        let names = [0xC0, 0xC2, 0xC4, 0xCF, 0xD3, 0xDB, 0xE1, 0xFE, 0x42]
            .map(|m| format!("{:?}", Marker(m)));
        assert_eq!(
            names,
            ["SOF0", "SOF2", "DHT", "SOF15", "RST3", "DQT", "APP1", "COM", "Marker(42)"]
        );
    }

    #[test]
    fn frame_markers() {
        assert!(ContainerFormat::JPEG.is_frame_marker(Marker::SOF0));
        assert!(!ContainerFormat::JPEG.is_frame_marker(Marker::SOF2));
        assert!(ContainerFormat::JPEG_ANY_SOF.is_frame_marker(Marker::SOF2));
        for not_a_frame in [Marker::DHT, Marker(0xC8), Marker(0xCC), Marker::SOS] {
            assert!(!ContainerFormat::JPEG_ANY_SOF.is_frame_marker(not_a_frame));
        }
        assert!(ContainerFormat::JPEG.is_end_marker(Marker::EOI));
    }

    #[test]
    fn default_is_baseline_jpeg() {
        let format = ContainerFormat::default();
        assert_eq!(format.name(), "JPEG");
        assert_eq!(format.signature(), [0xFF, 0xD8]);
        assert!(format.is_frame_marker(Marker::SOF0));
        assert!(!format.is_frame_marker(Marker::SOF2));
        assert_eq!(format.field_order(), FieldOrder::HeightWidth);
    }
}
