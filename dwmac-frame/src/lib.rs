//! Frame assembly and decoding for a DW1000-based UWB ranging MAC layer.
//!
//! The ranging protocol exchanges three fixed-layout frame shapes:
//!
//! - a 12-octet blink (discovery) frame carrying the sender's long and short
//!   addresses,
//! - a 9-octet short MAC frame addressing both peers by short address,
//! - a 23-octet long MAC frame addressing both peers by long address.
//!
//! The [`FrameCodec`] assembles outgoing frames into caller-owned buffers and
//! extracts the addressing fields of received ones, maintaining the 8-bit
//! sequence counter shared by all outgoing frames. The per-shape views in
//! [`frames`] expose the fixed field layout by name for callers that need to
//! work on raw buffers directly.
//!
//! Which shape a received buffer has is decided by the caller, e.g. via
//! [`FrameType::classify`], before handing it to the matching decode
//! operation. The radio driver and the ranging state machine both live
//! outside this crate; it only ever reads and writes byte buffers.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod addressing;
pub mod codec;
pub mod frame_control;
pub mod frames;

pub use addressing::{LongAddress, PanId, ShortAddress, RANGING_PAN_ID};
pub use codec::FrameCodec;
pub use frame_control::FrameType;
pub use frames::{BlinkFrame, LongMacFrame, ShortMacFrame};

/// An error that can occur when assembling or decoding a ranging MAC frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The buffer is shorter than the fixed length of the frame shape.
    BufferTooSmall,
    /// The frame-control bytes do not match the expected frame shape.
    UnexpectedFrameType,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "buffer too small"),
            Error::UnexpectedFrameType => write!(f, "unexpected frame type"),
        }
    }
}

impl core::error::Error for Error {}

/// A type alias for `Result<T, dwmac_frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
