// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI accessors for `SUResult` codes.
//!
//! Codes arrive as plain `int`: a value outside the enum must never be
//! reinterpreted as an `SUResult`.

use skpapi_core::SuResult;
use std::os::raw::{c_char, c_int};
use std::ptr;

/// SDK identifier of `code` (e.g. `"SU_ERROR_NONE"`), or NULL for an unknown code.
///
/// The string is static and must not be freed.
#[no_mangle]
pub extern "C" fn su_result_name(code: c_int) -> *const c_char {
    SuResult::from_code(code).map_or(ptr::null(), |result| result.c_name().as_ptr())
}

/// Description of `code`, or NULL for an unknown code.
///
/// The string is static and must not be freed.
#[no_mangle]
pub extern "C" fn su_result_description(code: c_int) -> *const c_char {
    SuResult::from_code(code).map_or(ptr::null(), |result| result.c_description().as_ptr())
}

/// Whether `code` is `SU_ERROR_NONE`.
#[no_mangle]
pub extern "C" fn su_result_is_success(code: c_int) -> bool {
    SuResult::from_code(code).is_some_and(SuResult::is_success)
}
