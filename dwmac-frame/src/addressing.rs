//! Ranging MAC addressing related public types.
//!
//! Devices carry a 2-octet short address and an 8-octet long address (e.g. a
//! unique hardware ID). Callers handle addresses in their natural
//! index-0-first byte order; on the wire every address is stored with the
//! byte order reversed, i.e. little-endian. The conversions on these types
//! are the single place where that reversal happens.

use core::fmt;

/// The PAN ID embedded in every short and long MAC frame.
///
/// 0xDECA, stored little-endian on the wire as the literal bytes 0xCA, 0xDE.
pub const RANGING_PAN_ID: PanId = PanId::new(0xDECA);

/// A 2-octet device address in the caller's natural byte order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct ShortAddress([u8; 2]);

impl ShortAddress {
    /// Length of a short address in octets.
    pub const LENGTH: usize = 2;

    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Reads an address from wire (little-endian) byte order.
    pub fn from_le_bytes(mut le_bytes: [u8; 2]) -> Self {
        le_bytes.reverse();
        Self(le_bytes)
    }

    /// Returns the address in wire (little-endian) byte order.
    pub fn into_le_bytes(self) -> [u8; 2] {
        let mut le_bytes = self.0;
        le_bytes.reverse();
        le_bytes
    }

    /// Returns the address in the caller's natural byte order.
    pub const fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl From<[u8; 2]> for ShortAddress {
    fn from(bytes: [u8; 2]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for ShortAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ShortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}", self.0[0], self.0[1])
    }
}

/// An 8-octet device address in the caller's natural byte order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct LongAddress([u8; 8]);

impl LongAddress {
    /// Length of a long address in octets.
    pub const LENGTH: usize = 8;

    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Reads an address from wire (little-endian) byte order.
    pub fn from_le_bytes(mut le_bytes: [u8; 8]) -> Self {
        le_bytes.reverse();
        Self(le_bytes)
    }

    /// Returns the address in wire (little-endian) byte order.
    pub fn into_le_bytes(self) -> [u8; 8] {
        let mut le_bytes = self.0;
        le_bytes.reverse();
        le_bytes
    }

    /// Returns the address in the caller's natural byte order.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl From<[u8; 8]> for LongAddress {
    fn from(bytes: [u8; 8]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for LongAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for LongAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7]
        )
    }
}

/// A 2-octet PAN identifier.
///
/// Unlike the device addresses, the PAN ID is handled as a 16-bit value; its
/// wire representation is the value's little-endian bytes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct PanId(u16);

impl PanId {
    /// Length of a PAN ID in octets.
    pub const LENGTH: usize = 2;

    pub const fn new(pan_id: u16) -> Self {
        Self(pan_id)
    }

    pub const fn from_le_bytes(le_bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(le_bytes))
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn into_u16(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_address_reversal() {
        let addr = ShortAddress::new([0x01, 0x02]);
        assert_eq!(addr.into_le_bytes(), [0x02, 0x01]);
        assert_eq!(ShortAddress::from_le_bytes([0x02, 0x01]), addr);
    }

    #[test]
    fn long_address_reversal() {
        let addr = LongAddress::new([0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        assert_eq!(
            addr.into_le_bytes(),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            LongAddress::from_le_bytes([0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
            addr
        );
    }

    #[test]
    fn reversal_is_an_involution() {
        let addr = LongAddress::new([0xde, 0xca, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(LongAddress::from_le_bytes(addr.into_le_bytes()), addr);

        let addr = ShortAddress::new([0xab, 0xcd]);
        assert_eq!(ShortAddress::from_le_bytes(addr.into_le_bytes()), addr);
    }

    #[test]
    fn pan_id() {
        assert_eq!(RANGING_PAN_ID.into_u16(), 0xDECA);
        assert_eq!(RANGING_PAN_ID.to_le_bytes(), [0xCA, 0xDE]);
        assert_eq!(PanId::from_le_bytes([0xCA, 0xDE]), RANGING_PAN_ID);
    }
}
