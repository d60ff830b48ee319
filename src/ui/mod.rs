// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `Message` type and reports navigation to the application
//! through an `Event`.
//!
//! # Screens
//!
//! - [`gallery`] - Filterable photo gallery with loading transitions
//! - [`services`] - The café's services, one card each
//! - [`about`] - Café story, highlights, testimonial and credits
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with hamburger menu and language choice
//! - [`remote_image`] - Downloading card images from their host
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod remote_image;
pub mod services;
pub mod styles;
pub mod theming;
pub mod widgets;
