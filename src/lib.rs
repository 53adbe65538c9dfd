// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! SketchUp C API value types
//!
//! This crate is a façade over `skpapi-core` and re-exports its public API.
//!
//! # Core types
//!
//! - [`SuResult`] — status code returned by every SDK call.
//! - [`SuOutcome<T>`] — `Result<T, SuResult>`.
//! - [`UnknownResultCode`] — error for integers that name no [`SuResult`].
//! - [`Tm`] — broken-down calendar time, C `struct tm` layout.
//! - [`DstFlag`] — tri-state reading of [`Tm::tm_isdst`].
//!
//! # Status codes
//!
//! | Code | Variant | SDK identifier |
//! |------|---------|----------------|
//! | 0 | [`SuResult::Success`] | `SU_ERROR_NONE` |
//! | 1 | [`SuResult::NullPointerInput`] | `SU_ERROR_NULL_POINTER_INPUT` |
//! | 2 | [`SuResult::InvalidInput`] | `SU_ERROR_INVALID_INPUT` |
//! | 3 | [`SuResult::NullPointerOutput`] | `SU_ERROR_NULL_POINTER_OUTPUT` |
//! | 4 | [`SuResult::InvalidOutput`] | `SU_ERROR_INVALID_OUTPUT` |
//! | 5 | [`SuResult::OverwriteValid`] | `SU_ERROR_OVERWRITE_VALID` |
//! | 6 | [`SuResult::Generic`] | `SU_ERROR_GENERIC` |
//! | 7 | [`SuResult::Serialization`] | `SU_ERROR_SERIALIZATION` |
//! | 8 | [`SuResult::OutOfRange`] | `SU_ERROR_OUT_OF_RANGE` |
//! | 9 | [`SuResult::NoData`] | `SU_ERROR_NO_DATA` |
//! | 10 | [`SuResult::InsufficientSize`] | `SU_ERROR_INSUFFICIENT_SIZE` |
//! | 11 | [`SuResult::UnknownException`] | `SU_ERROR_UNKNOWN_EXCEPTION` |
//! | 12 | [`SuResult::ModelInvalid`] | `SU_ERROR_MODEL_INVALID` |
//! | 13 | [`SuResult::ModelVersion`] | `SU_ERROR_MODEL_VERSION` |
//! | 14 | [`SuResult::LayerLocked`] | `SU_ERROR_LAYER_LOCKED` |
//! | 15 | [`SuResult::Duplicate`] | `SU_ERROR_DUPLICATE` |
//! | 16 | [`SuResult::PartialSuccess`] | `SU_ERROR_PARTIAL_SUCCESS` |
//! | 17 | [`SuResult::Unsupported`] | `SU_ERROR_UNSUPPORTED` |
//! | 18 | [`SuResult::InvalidArgument`] | `SU_ERROR_INVALID_ARGUMENT` |
//! | 19 | [`SuResult::EntityLocked`] | `SU_ERROR_ENTITY_LOCKED` |

pub use skpapi_core::{DstFlag, SuOutcome, SuResult, Tm, UnknownResultCode};
