// SPDX-License-Identifier: MPL-2.0
//! `gamma_gallery` is the photo gallery of Café Gamma, built with the Iced
//! GUI framework.
//!
//! Visitors filter the catalog by category. Each selection goes through a
//! short loading phase before the matching items are revealed, and only the
//! most recent selection is ever displayed.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
