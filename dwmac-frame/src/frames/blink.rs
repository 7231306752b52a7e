use core::ops::Range;

use crate::{
    addressing::{LongAddress, ShortAddress},
    frame_control::FC_BLINK,
    Error, Result,
};

/// A reader/writer for a blink (discovery) frame.
///
/// Wire layout, 12 octets total:
///
/// | 0          | 1      | 2..10               | 10..12               |
/// |------------|--------|---------------------|----------------------|
/// | `FC_BLINK` | seq nr | src long addr (rev) | src short addr (rev) |
#[derive(Debug, PartialEq, Eq)]
pub struct BlinkFrame<Bytes> {
    bytes: Bytes,
}

impl<Bytes> BlinkFrame<Bytes> {
    /// Total frame length in octets.
    pub const LENGTH: usize = 12;

    const FRAME_CONTROL: usize = 0;
    const SEQ_NR: usize = 1;
    const SRC_LONG_ADDR: Range<usize> = 2..10;
    const SRC_SHORT_ADDR: Range<usize> = 10..12;
}

impl<Bytes: AsRef<[u8]>> BlinkFrame<Bytes> {
    /// Creates a view over a received frame, validating buffer length and
    /// frame control.
    pub fn new(bytes: Bytes) -> Result<Self> {
        let frame = Self::new_unchecked(bytes);
        frame.check()?;
        Ok(frame)
    }

    /// Creates a view without validating the buffer.
    ///
    /// The caller must guarantee that the buffer holds at least
    /// [`Self::LENGTH`] octets, otherwise the field accessors panic.
    pub fn new_unchecked(bytes: Bytes) -> Self {
        Self { bytes }
    }

    /// Checks buffer length and the frame-control byte.
    pub fn check(&self) -> Result<()> {
        let bytes = self.bytes.as_ref();
        if bytes.len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        if bytes[Self::FRAME_CONTROL] != FC_BLINK {
            return Err(Error::UnexpectedFrameType);
        }
        Ok(())
    }

    /// The frame's sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.bytes.as_ref()[Self::SEQ_NR]
    }

    /// The sender's long address, un-reversed into the caller's byte order.
    pub fn src_long_address(&self) -> LongAddress {
        // Safety: The range is a constant of matching length.
        let le_bytes = <[u8; 8]>::try_from(&self.bytes.as_ref()[Self::SRC_LONG_ADDR]).unwrap();
        LongAddress::from_le_bytes(le_bytes)
    }

    /// The sender's short address, un-reversed into the caller's byte order.
    pub fn src_short_address(&self) -> ShortAddress {
        // Safety: The range is a constant of matching length.
        let le_bytes = <[u8; 2]>::try_from(&self.bytes.as_ref()[Self::SRC_SHORT_ADDR]).unwrap();
        ShortAddress::from_le_bytes(le_bytes)
    }
}

impl<Bytes: AsRef<[u8]> + AsMut<[u8]>> BlinkFrame<Bytes> {
    /// Claims the start of an outgoing buffer and writes the frame-control
    /// byte. Fails if the buffer cannot hold a whole frame.
    pub fn new_outgoing(bytes: Bytes) -> Result<Self> {
        if bytes.as_ref().len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        let mut frame = Self::new_unchecked(bytes);
        frame.bytes.as_mut()[Self::FRAME_CONTROL] = FC_BLINK;
        Ok(frame)
    }

    pub fn set_sequence_number(&mut self, seq_nr: u8) {
        self.bytes.as_mut()[Self::SEQ_NR] = seq_nr;
    }

    /// Writes the sender's long address in wire byte order.
    pub fn set_src_long_address(&mut self, addr: LongAddress) {
        self.bytes.as_mut()[Self::SRC_LONG_ADDR].copy_from_slice(&addr.into_le_bytes());
    }

    /// Writes the sender's short address in wire byte order.
    pub fn set_src_short_address(&mut self, addr: ShortAddress) {
        self.bytes.as_mut()[Self::SRC_SHORT_ADDR].copy_from_slice(&addr.into_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_layout() {
        let mut buffer = [0u8; 12];
        let mut frame = BlinkFrame::new_outgoing(&mut buffer[..]).unwrap();
        frame.set_sequence_number(0x2A);
        frame.set_src_long_address(LongAddress::new([
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
        ]));
        frame.set_src_short_address(ShortAddress::new([0xAB, 0xCD]));

        assert_eq!(
            buffer,
            [0xC5, 0x2A, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0xCD, 0xAB]
        );
    }

    #[test]
    fn read_fields() {
        let buffer = [
            0xC5, 0x07, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0xCD, 0xAB,
        ];
        let frame = BlinkFrame::new(&buffer[..]).unwrap();
        assert_eq!(frame.sequence_number(), 0x07);
        assert_eq!(
            frame.src_long_address(),
            LongAddress::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08])
        );
        assert_eq!(frame.src_short_address(), ShortAddress::new([0xAB, 0xCD]));
    }

    #[test]
    fn rejects_undersized_buffer() {
        let buffer = [0xC5u8; 11];
        assert_eq!(
            BlinkFrame::new(&buffer[..]).unwrap_err(),
            Error::BufferTooSmall
        );

        let mut buffer = [0u8; 11];
        assert_eq!(
            BlinkFrame::new_outgoing(&mut buffer[..]).unwrap_err(),
            Error::BufferTooSmall
        );
    }

    #[test]
    fn rejects_foreign_frame_control() {
        let buffer = [0x41u8; 12];
        assert_eq!(
            BlinkFrame::new(&buffer[..]).unwrap_err(),
            Error::UnexpectedFrameType
        );
    }
}
