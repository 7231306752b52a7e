//! This crate contains generic utilities other dwmac crates depend upon but
//! not directly related to the ranging MAC wire format.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod log;

#[cfg(any(feature = "defmt", feature = "log"))]
pub use self::log::*;
