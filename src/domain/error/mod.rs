// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// A category id outside the closed set was parsed.
///
/// Category ids normally come from the compiled-in filter table, so this
/// only surfaces when parsing external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category id: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
