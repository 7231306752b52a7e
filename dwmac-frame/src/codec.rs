//! The stateful frame codec.
//!
//! Assembles outgoing frames into caller-owned buffers and extracts the
//! addressing fields of received ones, mediating between the caller's
//! natural address byte order and the reversed wire order through the typed
//! views in [`frames`](crate::frames).

use dwmac_util::{debug, trace, warn};

use crate::{
    addressing::{LongAddress, ShortAddress},
    frames::{BlinkFrame, LongMacFrame, ShortMacFrame},
    Result,
};

/// Assembles and decodes ranging MAC frames.
///
/// Owns the 8-bit sequence counter shared by all outgoing frame shapes:
/// every successful generate call embeds the current value and then
/// increments it, wrapping 255 → 0. The counter is never mutated on any
/// other path.
///
/// The codec is a plain owned value without interior mutability. Use one
/// codec per radio and call it from a single execution context; concurrent
/// generate calls on a shared codec would race on the counter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameCodec {
    seq_nr: u8,
}

impl FrameCodec {
    /// Creates a codec with the sequence counter at zero.
    pub const fn new() -> Self {
        Self { seq_nr: 0 }
    }

    /// The sequence number the next generated frame will carry.
    pub const fn sequence_number(&self) -> u8 {
        self.seq_nr
    }

    /// Assembles a blink (discovery) frame announcing the device's own
    /// addresses into the first [`BlinkFrame::LENGTH`] octets of `frame`.
    ///
    /// On success the sequence counter advances; on error the buffer and the
    /// counter are untouched.
    pub fn generate_blink_frame(
        &mut self,
        frame: &mut [u8],
        src_long_addr: LongAddress,
        src_short_addr: ShortAddress,
    ) -> Result<()> {
        let mut blink = BlinkFrame::new_outgoing(frame)?;
        blink.set_sequence_number(self.seq_nr);
        blink.set_src_long_address(src_long_addr);
        blink.set_src_short_address(src_short_addr);
        trace!("assembled blink frame, seq nr {}", self.seq_nr);
        self.increment_seq_nr();
        Ok(())
    }

    /// Assembles a short MAC frame into the buffer, zero-filling the buffer
    /// in its entirety first (see [`ShortMacFrame::new_outgoing`]).
    ///
    /// On success the sequence counter advances; on error the buffer and the
    /// counter are untouched.
    pub fn generate_short_mac_frame(
        &mut self,
        frame: &mut [u8],
        src_addr: ShortAddress,
        dst_addr: ShortAddress,
    ) -> Result<()> {
        let mut mac_frame = ShortMacFrame::new_outgoing(frame)?;
        mac_frame.set_sequence_number(self.seq_nr);
        mac_frame.set_dst_short_address(dst_addr);
        mac_frame.set_src_short_address(src_addr);
        trace!("assembled short mac frame, seq nr {}", self.seq_nr);
        self.increment_seq_nr();
        Ok(())
    }

    /// Assembles a long MAC frame into the first [`LongMacFrame::LENGTH`]
    /// octets of `frame`.
    ///
    /// On success the sequence counter advances; on error the buffer and the
    /// counter are untouched.
    pub fn generate_long_mac_frame(
        &mut self,
        frame: &mut [u8],
        src_short_addr: ShortAddress,
        src_long_addr: LongAddress,
        dst_long_addr: LongAddress,
    ) -> Result<()> {
        let mut mac_frame = LongMacFrame::new_outgoing(frame)?;
        mac_frame.set_sequence_number(self.seq_nr);
        mac_frame.set_dst_long_address(dst_long_addr);
        mac_frame.set_src_long_address(src_long_addr);
        mac_frame.set_src_short_address(src_short_addr);
        trace!("assembled long mac frame, seq nr {}", self.seq_nr);
        self.increment_seq_nr();
        Ok(())
    }

    /// Extracts the sender's long and short addresses from a received blink
    /// frame. Pure, no counter mutation.
    pub fn decode_blink_frame(&self, frame: &[u8]) -> Result<(LongAddress, ShortAddress)> {
        let blink = BlinkFrame::new(frame).inspect_err(|_| {
            warn!("dropping malformed blink frame");
        })?;
        debug!("decoded blink frame, seq nr {}", blink.sequence_number());
        Ok((blink.src_long_address(), blink.src_short_address()))
    }

    /// Extracts the sender's short address from a received short MAC frame.
    /// Pure, no counter mutation.
    ///
    /// The embedded destination address is not exposed, see
    /// [`ShortMacFrame`].
    pub fn decode_short_mac_frame(&self, frame: &[u8]) -> Result<ShortAddress> {
        let mac_frame = ShortMacFrame::new(frame).inspect_err(|_| {
            warn!("dropping malformed short mac frame");
        })?;
        debug!("decoded short mac frame, seq nr {}", mac_frame.sequence_number());
        Ok(mac_frame.src_short_address())
    }

    /// Extracts the sender's short and long addresses from a received long
    /// MAC frame. Pure, no counter mutation.
    ///
    /// The embedded destination address is not exposed, see [`LongMacFrame`].
    pub fn decode_long_mac_frame(&self, frame: &[u8]) -> Result<(ShortAddress, LongAddress)> {
        let mac_frame = LongMacFrame::new(frame).inspect_err(|_| {
            warn!("dropping malformed long mac frame");
        })?;
        debug!("decoded long mac frame, seq nr {}", mac_frame.sequence_number());
        Ok((mac_frame.src_short_address(), mac_frame.src_long_address()))
    }

    fn increment_seq_nr(&mut self) {
        self.seq_nr = self.seq_nr.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SRC_LONG: LongAddress = LongAddress::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    const DST_LONG: LongAddress = LongAddress::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    const SRC_SHORT: ShortAddress = ShortAddress::new([0xAB, 0xCD]);
    const DST_SHORT: ShortAddress = ShortAddress::new([0x12, 0x34]);

    #[test]
    fn blink_frame_reverses_the_long_address() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 12];
        codec
            .generate_blink_frame(&mut buffer, SRC_LONG, SRC_SHORT)
            .unwrap();

        assert_eq!(buffer[0], 0xC5);
        assert_eq!(buffer[1], 0x00);
        assert_eq!(
            buffer[2..10],
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(buffer[10..12], [0xCD, 0xAB]);
    }

    #[test]
    fn blink_frame_round_trip() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 12];
        codec
            .generate_blink_frame(&mut buffer, SRC_LONG, SRC_SHORT)
            .unwrap();

        let (long_addr, short_addr) = codec.decode_blink_frame(&buffer).unwrap();
        assert_eq!(long_addr, SRC_LONG);
        assert_eq!(short_addr, SRC_SHORT);
    }

    #[test]
    fn short_mac_frame_round_trip() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 9];
        codec
            .generate_short_mac_frame(&mut buffer, SRC_SHORT, DST_SHORT)
            .unwrap();

        // Only the source address round-trips; the destination is embedded
        // but not exposed by the decode operation.
        assert_eq!(codec.decode_short_mac_frame(&buffer).unwrap(), SRC_SHORT);
    }

    #[test]
    fn long_mac_frame_round_trip() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 23];
        codec
            .generate_long_mac_frame(&mut buffer, SRC_SHORT, SRC_LONG, DST_LONG)
            .unwrap();

        let (short_addr, long_addr) = codec.decode_long_mac_frame(&buffer).unwrap();
        assert_eq!(short_addr, SRC_SHORT);
        assert_eq!(long_addr, SRC_LONG);
    }

    #[test]
    fn pan_id_bytes_are_fixed() {
        let mut codec = FrameCodec::new();

        let mut short = [0u8; 9];
        codec
            .generate_short_mac_frame(&mut short, SRC_SHORT, DST_SHORT)
            .unwrap();
        assert_eq!(short[3..5], [0xCA, 0xDE]);

        let mut long = [0u8; 23];
        codec
            .generate_long_mac_frame(&mut long, SRC_SHORT, SRC_LONG, DST_LONG)
            .unwrap();
        assert_eq!(long[3..5], [0xCA, 0xDE]);
    }

    #[test]
    fn consecutive_frames_count_up() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 9];

        codec
            .generate_short_mac_frame(&mut buffer, SRC_SHORT, DST_SHORT)
            .unwrap();
        assert_eq!(buffer[2], 0);

        codec
            .generate_short_mac_frame(&mut buffer, SRC_SHORT, DST_SHORT)
            .unwrap();
        assert_eq!(buffer[2], 1);
    }

    #[test]
    fn sequence_counter_is_shared_across_frame_shapes() {
        let mut codec = FrameCodec::new();

        let mut blink = [0u8; 12];
        codec
            .generate_blink_frame(&mut blink, SRC_LONG, SRC_SHORT)
            .unwrap();
        assert_eq!(blink[1], 0);

        let mut long = [0u8; 23];
        codec
            .generate_long_mac_frame(&mut long, SRC_SHORT, SRC_LONG, DST_LONG)
            .unwrap();
        assert_eq!(long[2], 1);

        let mut short = [0u8; 9];
        codec
            .generate_short_mac_frame(&mut short, SRC_SHORT, DST_SHORT)
            .unwrap();
        assert_eq!(short[2], 2);
    }

    #[test]
    fn sequence_counter_wraps_without_skipping() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 12];

        for i in 0..255u16 {
            assert_eq!(codec.sequence_number(), i as u8);
            codec
                .generate_blink_frame(&mut buffer, SRC_LONG, SRC_SHORT)
                .unwrap();
        }
        assert_eq!(codec.sequence_number(), 255);

        codec
            .generate_blink_frame(&mut buffer, SRC_LONG, SRC_SHORT)
            .unwrap();
        assert_eq!(buffer[1], 255);
        assert_eq!(codec.sequence_number(), 0);
    }

    #[test]
    fn short_mac_frame_zeroes_garbage() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0xA5u8; 32];
        codec
            .generate_short_mac_frame(&mut buffer, SRC_SHORT, DST_SHORT)
            .unwrap();

        assert_eq!(
            buffer[..9],
            [0x41, 0x88, 0x00, 0xCA, 0xDE, 0x34, 0x12, 0xCD, 0xAB]
        );
        assert_eq!(buffer[9..], [0u8; 23]);
    }

    #[test]
    fn undersized_buffer_leaves_the_counter_untouched() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 8];

        assert_eq!(
            codec
                .generate_blink_frame(&mut buffer, SRC_LONG, SRC_SHORT)
                .unwrap_err(),
            Error::BufferTooSmall
        );
        assert_eq!(
            codec
                .generate_short_mac_frame(&mut buffer, SRC_SHORT, DST_SHORT)
                .unwrap_err(),
            Error::BufferTooSmall
        );
        assert_eq!(codec.sequence_number(), 0);
    }

    #[test]
    fn decode_rejects_misclassified_frames() {
        let mut codec = FrameCodec::new();
        let mut buffer = [0u8; 23];
        codec
            .generate_long_mac_frame(&mut buffer, SRC_SHORT, SRC_LONG, DST_LONG)
            .unwrap();

        assert_eq!(
            codec.decode_blink_frame(&buffer).unwrap_err(),
            Error::UnexpectedFrameType
        );
        assert_eq!(
            codec.decode_short_mac_frame(&buffer).unwrap_err(),
            Error::UnexpectedFrameType
        );
    }
}
