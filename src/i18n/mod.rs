// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded from `assets/i18n/`
//! - Plural-aware counts for likes and comments
//! - Fallback to `en-US` when the requested locale is missing

pub mod fluent;
