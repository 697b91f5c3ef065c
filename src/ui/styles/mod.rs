// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the feed's widgets.

pub mod badge;
pub mod button;
pub mod container;
