// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`UnknownCategory`](error::UnknownCategory))
//! - [`gallery`]: Catalog and filter types ([`MediaItem`](gallery::MediaItem),
//!   [`Filter`](gallery::Filter), [`Catalog`](gallery::Catalog))
//! - [`services`]: Services offered by the café ([`Service`](services::Service))
//! - [`ui`]: UI value objects ([`TransitionDelay`](ui::newtypes::TransitionDelay))

pub mod error;
pub mod gallery;
pub mod services;
pub mod ui;
