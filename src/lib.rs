// SPDX-License-Identifier: MPL-2.0
//! `impact_feed` is a community feed built with the Iced GUI framework.
//!
//! It shows a scrollable list of posts seeded at startup and a modal
//! composer for writing new ones, with Fluent localization and
//! user preferences stored in `settings.toml`.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod seed;
pub mod ui;
