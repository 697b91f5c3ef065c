// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and composer constants.

// ==========================================================================
// Composer Defaults
// ==========================================================================

/// Display name of the demo author used for composed posts.
pub const DEFAULT_AUTHOR_NAME: &str = "You (Demo User)";

/// Avatar glyph of the demo author.
pub const DEFAULT_AUTHOR_AVATAR: &str = "😊";

/// Role label of the demo author.
pub const DEFAULT_AUTHOR_ROLE: &str = "Smart Learner";

/// Time label given to freshly composed posts.
pub const JUST_NOW_LABEL: &str = "Just now";

/// Body used when a post is submitted with an image but no text.
pub const IMAGE_ONLY_BODY: &str = "(Shared a photo/exploration)";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Maximum width of the feed column, in logical pixels.
pub const FEED_MAX_WIDTH: f32 = 768.0;

/// Maximum width of the composer dialog.
pub const COMPOSER_MAX_WIDTH: f32 = 512.0;

/// Height of post images inside cards.
pub const POST_IMAGE_HEIGHT: f32 = 256.0;

/// Height of the composer image preview.
pub const PREVIEW_IMAGE_HEIGHT: f32 = 160.0;

/// Height of the composer text area.
pub const COMPOSER_EDITOR_HEIGHT: f32 = 120.0;
