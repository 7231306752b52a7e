//! Fixed-layout reader/writer views, one per frame shape.
//!
//! Each view wraps a caller-owned byte buffer and exposes the frame's fields
//! under their names; the views never allocate or retain the buffer. The
//! checked [`new`](BlinkFrame::new) constructors validate buffer length and
//! frame-control bytes, [`new_unchecked`](BlinkFrame::new_unchecked) keeps
//! the trusting path for callers that classified the frame out of band.

mod blink;
mod mac;

pub use blink::*;
pub use mac::*;
