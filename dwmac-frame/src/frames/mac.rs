use core::ops::Range;

use crate::{
    addressing::{LongAddress, PanId, ShortAddress, RANGING_PAN_ID},
    frame_control::{FC_1, FC_2_LONG, FC_2_SHORT},
    Error, Result,
};

/// A reader/writer for a short MAC frame.
///
/// Wire layout, 9 octets total:
///
/// | 0..2                | 2      | 3..5   | 5..7                 | 7..9                 |
/// |---------------------|--------|--------|----------------------|----------------------|
/// | `FC_1`,`FC_2_SHORT` | seq nr | PAN ID | dst short addr (rev) | src short addr (rev) |
///
/// The read side only exposes the embedded source address. The destination
/// at offsets 5..7 is written on assembly but never consumed on reception;
/// receivers needing it have to read the buffer directly.
#[derive(Debug, PartialEq, Eq)]
pub struct ShortMacFrame<Bytes> {
    bytes: Bytes,
}

impl<Bytes> ShortMacFrame<Bytes> {
    /// Total frame length in octets.
    pub const LENGTH: usize = 9;

    const FRAME_CONTROL: Range<usize> = 0..2;
    const SEQ_NR: usize = 2;
    const PAN_ID: Range<usize> = 3..5;
    const DST_SHORT_ADDR: Range<usize> = 5..7;
    const SRC_SHORT_ADDR: Range<usize> = 7..9;
}

impl<Bytes: AsRef<[u8]>> ShortMacFrame<Bytes> {
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

    /// Checks buffer length and the frame-control bytes.
    pub fn check(&self) -> Result<()> {
        let bytes = self.bytes.as_ref();
        if bytes.len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        if bytes[Self::FRAME_CONTROL] != [FC_1, FC_2_SHORT] {
            return Err(Error::UnexpectedFrameType);
        }
        Ok(())
    }

    /// The frame's sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.bytes.as_ref()[Self::SEQ_NR]
    }

    /// The embedded PAN ID.
    pub fn pan_id(&self) -> PanId {
        // Safety: The range is a constant of matching length.
        let le_bytes = <[u8; 2]>::try_from(&self.bytes.as_ref()[Self::PAN_ID]).unwrap();
        PanId::from_le_bytes(le_bytes)
    }

    /// The sender's short address, un-reversed into the caller's byte order.
    pub fn src_short_address(&self) -> ShortAddress {
        // Safety: The range is a constant of matching length.
        let le_bytes = <[u8; 2]>::try_from(&self.bytes.as_ref()[Self::SRC_SHORT_ADDR]).unwrap();
        ShortAddress::from_le_bytes(le_bytes)
    }
}

impl<Bytes: AsRef<[u8]> + AsMut<[u8]>> ShortMacFrame<Bytes> {
    /// Claims an outgoing buffer: zero-fills it in its entirety, then writes
    /// the frame-control bytes and the PAN ID. Fails if the buffer cannot
    /// hold a whole frame.
    ///
    /// The zero-fill covers the whole buffer, not just the frame, so stale
    /// contents beyond the 9 written octets cannot leak into a transmission
    /// that sends more than the frame length.
    pub fn new_outgoing(mut bytes: Bytes) -> Result<Self> {
        if bytes.as_ref().len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        bytes.as_mut().fill(0);
        let mut frame = Self::new_unchecked(bytes);
        frame.bytes.as_mut()[Self::FRAME_CONTROL].copy_from_slice(&[FC_1, FC_2_SHORT]);
        frame.set_pan_id(RANGING_PAN_ID);
        Ok(frame)
    }

    pub fn set_sequence_number(&mut self, seq_nr: u8) {
        self.bytes.as_mut()[Self::SEQ_NR] = seq_nr;
    }

    pub fn set_pan_id(&mut self, pan_id: PanId) {
        self.bytes.as_mut()[Self::PAN_ID].copy_from_slice(&pan_id.to_le_bytes());
    }

    /// Writes the destination short address in wire byte order.
    pub fn set_dst_short_address(&mut self, addr: ShortAddress) {
        self.bytes.as_mut()[Self::DST_SHORT_ADDR].copy_from_slice(&addr.into_le_bytes());
    }

    /// Writes the source short address in wire byte order.
    pub fn set_src_short_address(&mut self, addr: ShortAddress) {
        self.bytes.as_mut()[Self::SRC_SHORT_ADDR].copy_from_slice(&addr.into_le_bytes());
    }
}

/// A reader/writer for a long MAC frame.
///
/// Wire layout, 23 octets total:
///
/// | 0..2               | 2      | 3..5   | 5..13               | 13..21              | 21..23               |
/// |--------------------|--------|--------|---------------------|---------------------|----------------------|
/// | `FC_1`,`FC_2_LONG` | seq nr | PAN ID | dst long addr (rev) | src long addr (rev) | src short addr (rev) |
///
/// As with [`ShortMacFrame`], the destination address is write-only: it is
/// never consumed on reception.
#[derive(Debug, PartialEq, Eq)]
pub struct LongMacFrame<Bytes> {
    bytes: Bytes,
}

impl<Bytes> LongMacFrame<Bytes> {
    /// Total frame length in octets.
    pub const LENGTH: usize = 23;

    const FRAME_CONTROL: Range<usize> = 0..2;
    const SEQ_NR: usize = 2;
    const PAN_ID: Range<usize> = 3..5;
    const DST_LONG_ADDR: Range<usize> = 5..13;
    const SRC_LONG_ADDR: Range<usize> = 13..21;
    const SRC_SHORT_ADDR: Range<usize> = 21..23;
}

impl<Bytes: AsRef<[u8]>> LongMacFrame<Bytes> {
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

    /// Checks buffer length and the frame-control bytes.
    pub fn check(&self) -> Result<()> {
        let bytes = self.bytes.as_ref();
        if bytes.len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        if bytes[Self::FRAME_CONTROL] != [FC_1, FC_2_LONG] {
            return Err(Error::UnexpectedFrameType);
        }
        Ok(())
    }

    /// The frame's sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.bytes.as_ref()[Self::SEQ_NR]
    }

    /// The embedded PAN ID.
    pub fn pan_id(&self) -> PanId {
        // Safety: The range is a constant of matching length.
        let le_bytes = <[u8; 2]>::try_from(&self.bytes.as_ref()[Self::PAN_ID]).unwrap();
        PanId::from_le_bytes(le_bytes)
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

impl<Bytes: AsRef<[u8]> + AsMut<[u8]>> LongMacFrame<Bytes> {
    /// Claims the start of an outgoing buffer and writes the frame-control
    /// bytes and the PAN ID. Fails if the buffer cannot hold a whole frame.
    ///
    /// No zero-fill here: all 23 octets of the frame are written on assembly.
    pub fn new_outgoing(bytes: Bytes) -> Result<Self> {
        if bytes.as_ref().len() < Self::LENGTH {
            return Err(Error::BufferTooSmall);
        }
        let mut frame = Self::new_unchecked(bytes);
        frame.bytes.as_mut()[Self::FRAME_CONTROL].copy_from_slice(&[FC_1, FC_2_LONG]);
        frame.set_pan_id(RANGING_PAN_ID);
        Ok(frame)
    }

    pub fn set_sequence_number(&mut self, seq_nr: u8) {
        self.bytes.as_mut()[Self::SEQ_NR] = seq_nr;
    }

    pub fn set_pan_id(&mut self, pan_id: PanId) {
        self.bytes.as_mut()[Self::PAN_ID].copy_from_slice(&pan_id.to_le_bytes());
    }

    /// Writes the destination long address in wire byte order.
    pub fn set_dst_long_address(&mut self, addr: LongAddress) {
        self.bytes.as_mut()[Self::DST_LONG_ADDR].copy_from_slice(&addr.into_le_bytes());
    }

    /// Writes the source long address in wire byte order.
    pub fn set_src_long_address(&mut self, addr: LongAddress) {
        self.bytes.as_mut()[Self::SRC_LONG_ADDR].copy_from_slice(&addr.into_le_bytes());
    }

    /// Writes the source short address in wire byte order.
    pub fn set_src_short_address(&mut self, addr: ShortAddress) {
        self.bytes.as_mut()[Self::SRC_SHORT_ADDR].copy_from_slice(&addr.into_le_bytes());
    }
}
