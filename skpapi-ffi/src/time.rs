// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the `SUTm` calendar-time record.

use skpapi_core::{SuResult, Tm};

/// Fill `out` with the all-zero `SUTm`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `SUTm`.
#[no_mangle]
pub unsafe extern "C" fn su_tm_init(out: *mut Tm) -> SuResult {
    if out.is_null() {
        tracing::debug!(arg = "out", "null pointer rejected");
        return SuResult::NullPointerOutput;
    }
    // SAFETY: `out` was checked for null and the caller guarantees it points to writable memory.
    unsafe { *out = Tm::zeroed() };
    SuResult::Success
}

/// Break a Unix timestamp down into UTC calendar fields, like `gmtime`.
/// Returns OutOfRange if the timestamp is not representable.
///
/// # Safety
/// `out` must be a valid, writable pointer to `SUTm`.
#[no_mangle]
pub unsafe extern "C" fn su_tm_from_unix(seconds: i64, out: *mut Tm) -> SuResult {
    catch_panic!(SuResult::UnknownException, {
        if out.is_null() {
            tracing::debug!(arg = "out", "null pointer rejected");
            return SuResult::NullPointerOutput;
        }
        match Tm::from_unix_timestamp(seconds) {
            Ok(tm) => {
                unsafe { *out = tm };
                SuResult::Success
            }
            Err(status) => {
                tracing::debug!(seconds, %status, "timestamp has no calendar breakdown");
                status
            }
        }
    })
}

/// Convert UTC calendar fields to a Unix timestamp, like `timegm`.
/// Fields are not normalized: any field outside its range yields OutOfRange.
///
/// # Safety
/// `tm` must be a valid pointer to `SUTm`; `out` must be a valid, writable
/// pointer to `int64_t`.
#[no_mangle]
pub unsafe extern "C" fn su_tm_to_unix(tm: *const Tm, out: *mut i64) -> SuResult {
    catch_panic!(SuResult::UnknownException, {
        if tm.is_null() {
            tracing::debug!(arg = "tm", "null pointer rejected");
            return SuResult::NullPointerInput;
        }
        if out.is_null() {
            tracing::debug!(arg = "out", "null pointer rejected");
            return SuResult::NullPointerOutput;
        }
        // SAFETY: `tm` was checked for null and the caller guarantees it is readable.
        let fields = unsafe { *tm };
        match fields.to_unix_timestamp() {
            Ok(seconds) => {
                unsafe { *out = seconds };
                SuResult::Success
            }
            Err(status) => {
                tracing::debug!(?fields, %status, "calendar fields rejected");
                status
            }
        }
    })
}
