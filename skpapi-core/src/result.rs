// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! `SUResult` status codes.
//!
//! Every function of the SketchUp C API returns one of these codes. The
//! integer values are part of the SDK ABI and must never be reordered.

use std::ffi::CStr;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result alias for operations that report failure through [`SuResult`].
pub type SuOutcome<T> = Result<T, SuResult>;

/// Returned when an integer does not name any [`SuResult`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown SUResult code {0}")]
pub struct UnknownResultCode(pub i32);

/// Generates the lookup tables of [`SuResult`].
///
/// Rows must be listed in ascending code order; each carries the SDK
/// identifier and the one-line description used by `Display`.
macro_rules! su_result_table {
    ($($variant:ident => ($sdk:tt, $desc:tt)),* $(,)?) => {
        impl SuResult {
            /// Number of status codes.
            pub const COUNT: usize = [$(stringify!($variant)),*].len();

            /// Every status code, in ascending code order.
            pub const ALL: [Self; Self::COUNT] = [$(Self::$variant),*];

            /// SDK identifier of this code, e.g. `SU_ERROR_NONE`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $sdk,)*
                }
            }

            /// Human-readable meaning of this code.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)*
                }
            }

            /// NUL-terminated SDK identifier, for handing across a C boundary.
            pub fn c_name(self) -> &'static CStr {
                let bytes: &'static [u8] = match self {
                    $(Self::$variant => concat!($sdk, "\0").as_bytes(),)*
                };
                CStr::from_bytes_with_nul(bytes).unwrap_or_default()
            }

            /// NUL-terminated description.
            pub fn c_description(self) -> &'static CStr {
                let bytes: &'static [u8] = match self {
                    $(Self::$variant => concat!($desc, "\0").as_bytes(),)*
                };
                CStr::from_bytes_with_nul(bytes).unwrap_or_default()
            }
        }
    };
}

/// Outcome of a SketchUp C API call.
///
/// The set is closed: exactly one variant describes any given call, and
/// the only success code is [`SuResult::Success`] (`0`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuResult {
    /// Operation completed normally.
    #[default]
    Success = 0,
    /// A pointer for a required input was null.
    NullPointerInput = 1,
    /// An API object passed as input was not created properly.
    InvalidInput = 2,
    /// A pointer for a required output was null.
    NullPointerOutput = 3,
    /// An API object to be written with output was not created properly.
    InvalidOutput = 4,
    /// An input reference already pointed at a valid object where an
    /// invalid one was expected.
    OverwriteValid = 5,
    /// Unspecified error.
    Generic = 6,
    /// Error while loading or saving a file.
    Serialization = 7,
    /// An input value was outside its allowed range.
    OutOfRange = 8,
    /// The request has no data to return; the data exists only conditionally.
    NoData = 9,
    /// An output parameter is too small.
    InsufficientSize = 10,
    /// An unknown exception occurred.
    UnknownException = 11,
    /// The requested model is invalid and cannot be loaded.
    ModelInvalid = 12,
    /// The model cannot be loaded or saved because of its version.
    ModelVersion = 13,
    /// The layer being modified is locked.
    LayerLocked = 14,
    /// The operation would create duplicate data.
    Duplicate = 15,
    /// The operation did not fully complete but returned an intermediate result.
    PartialSuccess = 16,
    /// The operation is not supported.
    Unsupported = 17,
    /// An argument contains invalid information.
    InvalidArgument = 18,
    /// The entity being modified is locked.
    EntityLocked = 19,
}

su_result_table! {
    Success => ("SU_ERROR_NONE", "operation completed normally"),
    NullPointerInput => ("SU_ERROR_NULL_POINTER_INPUT", "a required input pointer was null"),
    InvalidInput => ("SU_ERROR_INVALID_INPUT", "an input object was not created properly"),
    NullPointerOutput => ("SU_ERROR_NULL_POINTER_OUTPUT", "a required output pointer was null"),
    InvalidOutput => ("SU_ERROR_INVALID_OUTPUT", "an output object was not created properly"),
    OverwriteValid => ("SU_ERROR_OVERWRITE_VALID", "attempted to overwrite a valid object reference"),
    Generic => ("SU_ERROR_GENERIC", "unspecified error"),
    Serialization => ("SU_ERROR_SERIALIZATION", "error while loading or saving"),
    OutOfRange => ("SU_ERROR_OUT_OF_RANGE", "value outside the allowed range"),
    NoData => ("SU_ERROR_NO_DATA", "no data available for the request"),
    InsufficientSize => ("SU_ERROR_INSUFFICIENT_SIZE", "output buffer is too small"),
    UnknownException => ("SU_ERROR_UNKNOWN_EXCEPTION", "an unknown exception occurred"),
    ModelInvalid => ("SU_ERROR_MODEL_INVALID", "the model is invalid"),
    ModelVersion => ("SU_ERROR_MODEL_VERSION", "unsupported model version"),
    LayerLocked => ("SU_ERROR_LAYER_LOCKED", "the layer is locked"),
    Duplicate => ("SU_ERROR_DUPLICATE", "the operation would create duplicate data"),
    PartialSuccess => ("SU_ERROR_PARTIAL_SUCCESS", "the operation only partially completed"),
    Unsupported => ("SU_ERROR_UNSUPPORTED", "the operation is not supported"),
    InvalidArgument => ("SU_ERROR_INVALID_ARGUMENT", "an argument contains invalid information"),
    EntityLocked => ("SU_ERROR_ENTITY_LOCKED", "the entity is locked"),
}

impl SuResult {
    /// Decodes an SDK integer code.
    pub const fn from_code(code: i32) -> Option<Self> {
        if code >= 0 && (code as usize) < Self::COUNT {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Stable integer value of this code.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// `true` only for [`SuResult::Success`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// `true` for every code except [`SuResult::Success`], including
    /// [`SuResult::PartialSuccess`].
    #[inline]
    pub const fn is_error(self) -> bool {
        !self.is_success()
    }

    /// Lifts the code into a `Result` so callers can use `?`.
    #[inline]
    pub fn into_result(self) -> SuOutcome<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for SuResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for SuResult {}

impl From<SuResult> for i32 {
    #[inline]
    fn from(result: SuResult) -> Self {
        result.code()
    }
}

impl TryFrom<i32> for SuResult {
    type Error = UnknownResultCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownResultCode(code))
    }
}

impl<T> From<SuOutcome<T>> for SuResult {
    fn from(outcome: SuOutcome<T>) -> Self {
        match outcome {
            Ok(_) => SuResult::Success,
            Err(code) => code,
        }
    }
}

// Serialized as the SDK integer code.
#[cfg(feature = "serde")]
impl Serialize for SuResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SuResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        SuResult::try_from(code).map_err(serde::de::Error::custom)
    }
}
