// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the feed's data model and its rules.
//!
//! # Modules
//!
//! - [`post`]: Post records ([`Post`](post::Post), [`Category`](post::Category),
//!   [`PostId`](post::PostId), [`ImageRef`](post::ImageRef))
//! - [`feed`]: The newest-first collection ([`Feed`](feed::Feed))

pub mod feed;
pub mod post;
