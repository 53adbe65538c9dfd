// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **skpapi** — SketchUp C API value types.
//!
//! This crate exposes a flat C-compatible API over `SUResult` status codes
//! and the `SUTm` calendar-time record. Every fallible function returns an
//! `SUResult` and writes its value through an out-pointer.

/// Runs an FFI body, turning a panic into the given status code.
macro_rules! catch_panic {
    ($on_panic:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(status) => status,
            Err(_) => {
                tracing::warn!("panic caught at the FFI boundary");
                $on_panic
            }
        }
    };
}

mod result;
mod time;

pub use result::*;
pub use skpapi_core::{SuResult, Tm};
pub use time::*;

/// Returns the skpapi-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn skpapi_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
