// SPDX-License-Identifier: MPL-2.0
//! `astra_center` is a small catalog browser for the Astra software collection.
//!
//! It fetches the featured and application catalogs with a remote-then-local
//! fallback and demonstrates locale detection, localized field resolution,
//! and dictionary-driven text substitution with user preference management.

#![doc(html_root_url = "https://docs.rs/astra_center/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
