// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! lives in the [`feed`] container, the [`composer`] reports upward through
//! returned events, and [`post_card`] is a pure view.
//!
//! # Components
//!
//! - [`feed`] - Post list and composer host
//! - [`composer`] - Create-post dialog and its draft
//! - [`post_card`] - Rendering of a single post
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, badges)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod composer;
pub mod design_tokens;
pub mod feed;
pub mod post_card;
pub mod styles;
pub mod theming;
