//! Frame control constants and frame-shape classification.

/// Frame-control byte of a blink frame.
pub const FC_BLINK: u8 = 0xC5;
/// First frame-control byte of short and long MAC frames.
pub const FC_1: u8 = 0x41;
/// Second frame-control byte of a short MAC frame (short source addressing).
pub const FC_2_SHORT: u8 = 0x88;
/// Second frame-control byte of a long MAC frame (long source addressing).
pub const FC_2_LONG: u8 = 0x8C;

/// The shape of a ranging MAC frame, recognized from its frame-control bytes.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FrameType {
    /// Blink (discovery) frame.
    Blink,
    /// Short MAC frame, both peers addressed by short address.
    ShortMac,
    /// Long MAC frame, both peers addressed by long address.
    LongMac,
    /// Unknown frame shape.
    Unknown,
}

impl FrameType {
    /// Classifies a received buffer by its leading frame-control bytes.
    ///
    /// Dispatching to the matching decode operation is the caller's job; the
    /// codec itself only validates the classification it is handed.
    pub fn classify(frame: &[u8]) -> Self {
        match frame {
            [FC_BLINK, ..] => Self::Blink,
            [FC_1, FC_2_SHORT, ..] => Self::ShortMac,
            [FC_1, FC_2_LONG, ..] => Self::LongMac,
            _ => Self::Unknown,
        }
    }

    /// Total length of a frame of this shape in octets.
    pub const fn length(&self) -> usize {
        match self {
            FrameType::Blink => 12,
            FrameType::ShortMac => 9,
            FrameType::LongMac => 23,
            FrameType::Unknown => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(FrameType::classify(&[0xC5, 0x00]), FrameType::Blink);
        assert_eq!(FrameType::classify(&[0x41, 0x88, 0x00]), FrameType::ShortMac);
        assert_eq!(FrameType::classify(&[0x41, 0x8C, 0x00]), FrameType::LongMac);
        assert_eq!(FrameType::classify(&[0x41, 0x00]), FrameType::Unknown);
        assert_eq!(FrameType::classify(&[0x41]), FrameType::Unknown);
        assert_eq!(FrameType::classify(&[]), FrameType::Unknown);
    }

    #[test]
    fn length() {
        assert_eq!(FrameType::Blink.length(), 12);
        assert_eq!(FrameType::ShortMac.length(), 9);
        assert_eq!(FrameType::LongMac.length(), 23);
        assert_eq!(FrameType::Unknown.length(), 0);
    }
}
