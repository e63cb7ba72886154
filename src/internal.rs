// SPDX-License-Identifier: MIT OR Apache-2.0

//! Internal diagnostics, enabled with the `scribe_internal` feature.
//!
//! These go straight to stderr rather than through a facade, since they describe
//! the facade itself.

macro_rules! debug_internal {
    ($($arg:tt)*) => {
        if cfg!(feature = "scribe_internal") {
            eprintln!("[scribe] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use debug_internal;
