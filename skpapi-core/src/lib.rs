// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! SketchUp C API value types.
//!
//! # Core types
//!
//! - [`SuResult`] — the closed set of status codes returned by every SDK call.
//! - [`SuOutcome<T>`] — `Result<T, SuResult>`, for propagating codes with `?`.
//! - [`Tm`] — broken-down calendar time with the C `struct tm` layout.
//! - [`DstFlag`] — the tri-state daylight saving flag of [`Tm`].
//!
//! # ABI
//!
//! [`SuResult`] is `#[repr(i32)]` and keeps the SDK's integer values
//! (`SU_ERROR_NONE = 0` through `SU_ERROR_ENTITY_LOCKED = 19`).
//! [`Tm`] is `#[repr(C)]` with nine `int` fields in C order.
//!
//! # Calendar conversions
//!
//! [`Tm`] converts to and from `chrono` date-times and Unix timestamps.
//! Conversions never normalize out-of-range fields; they fail with
//! [`SuResult::OutOfRange`].

mod result;
mod time;

pub use result::{SuOutcome, SuResult, UnknownResultCode};
pub use time::{DstFlag, Tm};
