//! Logger backend agnostic logging.
//!
//! Downstream crates log through these macros and stay agnostic of the
//! backend: `log` on hosted targets, `defmt` on embedded ones, and silent
//! no-ops when neither feature is selected.

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Cannot select log and defmt features together.");

#[cfg(feature = "defmt")]
pub use defmt::{debug, trace, warn};

#[cfg(feature = "log")]
pub use ::log::{debug, trace, warn};

#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_macros)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{ // no-op
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_macros)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{ // no-op
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
#[allow(unused_macros)]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{ // no-op
    }};
}
