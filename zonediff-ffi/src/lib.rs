// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **zonediff** — time-zone aware calendar differences.
//!
//! This crate exposes a flat C-compatible API so a native mobile host can
//! turn wall-clock picks into instants and compute the difference summary
//! without linking against Rust types.  Every function returns a
//! [`ZdStatus`] and writes its result through an out-pointer; zones cross
//! the boundary as NUL-terminated UTF-8 strings.

/// Run `$body`, turning a panic into `$fallback` so it never unwinds into C.
macro_rules! catch_panic {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => $fallback,
        }
    };
}

mod difference;
mod error;
mod selection;

pub use difference::*;
pub use error::*;
pub use selection::*;

/// Returns the zonediff-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn zonediff_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
