// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Recoverable input errors reported by [`ZoomEngine`](crate::ZoomEngine).
///
/// Nothing here is fatal: the worst observable symptom of a rejected input
/// is one skipped visual update, and the host may ignore these entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureError {
    /// The engine has not yet received positive viewport and content sizes.
    NotReady,
    /// A gesture sample carried a non-finite or non-positive value and was
    /// dropped for this tick.
    InvalidGestureSample,
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "engine not initialized with viewport and content sizes"),
            Self::InvalidGestureSample => write!(f, "gesture sample had a degenerate value"),
        }
    }
}

impl core::error::Error for GestureError {}
