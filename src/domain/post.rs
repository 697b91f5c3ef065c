// SPDX-License-Identifier: MPL-2.0
//! Post records and their value objects.

use crate::media::preview::PreviewHandle;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

// =============================================================================
// PostId
// =============================================================================

/// Stable identifier of a post, unique for the lifetime of the session.
///
/// Used as the list key when rendering the feed, so it must never be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(u64);

impl PostId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues fresh post identifiers.
///
/// Identifiers are the creation time in milliseconds, bumped past the last
/// issued value so two posts created within the same millisecond (or a seed
/// carrying ids from the future) never collide.
#[derive(Debug, Clone, Default)]
pub struct PostIdGenerator {
    last: u64,
}

impl PostIdGenerator {
    /// Creates a generator whose ids are strictly greater than `floor`.
    #[must_use]
    pub fn after(floor: Option<PostId>) -> Self {
        Self {
            last: floor.map_or(0, PostId::value),
        }
    }

    /// Returns the next identifier using the current wall clock.
    pub fn next_id(&mut self) -> PostId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Returns the next identifier for the given millisecond timestamp.
    pub fn next_at(&mut self, timestamp_ms: u64) -> PostId {
        self.last = timestamp_ms.max(self.last.saturating_add(1));
        PostId(self.last)
    }
}

// =============================================================================
// Author
// =============================================================================

/// Who wrote a post, as shown in the card header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Single glyph (letter or emoji) shown inside the avatar bubble.
    pub avatar: String,
    pub role: String,
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        avatar: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            role: role.into(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Classifier of a post. Controls badge styling and composer choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Learning,
    /// Eco-action; accepts both the `action` and `eco-action` tags.
    Action,
    Exploration,
    /// Any other non-blank tag, kept verbatim for display.
    Other(String),
}

impl Category {
    /// Categories offered by the composer, in display order.
    pub const CHOICES: [Category; 3] = [
        Category::Learning,
        Category::Action,
        Category::Exploration,
    ];

    /// Parses a tag case-insensitively. Returns `None` for a blank tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.to_lowercase().as_str() {
            "learning" => Category::Learning,
            "action" | "eco-action" => Category::Action,
            "exploration" => Category::Exploration,
            _ => Category::Other(trimmed.to_string()),
        })
    }

    /// Canonical tag used for lookups and serialization.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Category::Learning => "learning",
            Category::Action => "action",
            Category::Exploration => "exploration",
            Category::Other(tag) => tag,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Learning
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Learning => write!(f, "Learning"),
            Category::Action => write!(f, "Eco-Action"),
            Category::Exploration => write!(f, "Exploration"),
            Category::Other(tag) => write!(f, "{}", tag),
        }
    }
}

// =============================================================================
// ImageRef
// =============================================================================

/// Preview shared between every clone of the post that owns it.
/// The handle is released when the last clone is dropped.
pub type SharedPreview = Arc<PreviewHandle>;

/// Image attached to a post.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// Remote URL from seed data. Never fetched; rendered as a placeholder.
    Remote(String),
    /// Local file from seed data, displayed directly.
    File(PathBuf),
    /// Decoded image selected in the composer.
    ///
    /// Once submitted, the post owns the preview: it is released when the
    /// last clone of the post is dropped, so it stays outstanding in the
    /// registry after the composer closes.
    Preview(SharedPreview),
}

impl ImageRef {
    /// Builds a seed image reference from a raw string.
    #[must_use]
    pub fn from_seed(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ImageRef::Remote(raw.to_string())
        } else {
            ImageRef::File(PathBuf::from(raw))
        }
    }

    #[must_use]
    pub fn as_preview(&self) -> Option<&PreviewHandle> {
        match self {
            ImageRef::Preview(handle) => Some(handle),
            _ => None,
        }
    }
}

// =============================================================================
// Post
// =============================================================================

/// An immutable feed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    /// Relative timestamp label such as "3 hours ago".
    pub time_label: String,
    pub body: String,
    pub image: Option<ImageRef>,
    pub likes: u32,
    pub comments: u32,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("Action"), Some(Category::Action));
        assert_eq!(Category::parse("action"), Some(Category::Action));
        assert_eq!(Category::parse("Eco-Action"), Some(Category::Action));
        assert_eq!(Category::parse("  LEARNING "), Some(Category::Learning));
        assert_eq!(Category::parse("Exploration"), Some(Category::Exploration));
    }

    #[test]
    fn category_parse_keeps_unknown_tags() {
        assert_eq!(
            Category::parse("Gardening"),
            Some(Category::Other("Gardening".to_string()))
        );
        assert_eq!(Category::parse("Gardening").unwrap().tag(), "Gardening");
    }

    #[test]
    fn category_parse_rejects_blank() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
    }

    #[test]
    fn category_defaults_to_learning() {
        assert_eq!(Category::default(), Category::Learning);
    }

    #[test]
    fn generator_is_strictly_monotonic_within_a_millisecond() {
        let mut ids = PostIdGenerator::default();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn generator_starts_past_floor() {
        let mut ids = PostIdGenerator::after(Some(PostId::new(5_000)));
        assert_eq!(ids.next_at(10), PostId::new(5_001));
        assert_eq!(ids.next_at(9_000), PostId::new(9_000));
    }

    #[test]
    fn image_ref_from_seed_detects_urls() {
        assert!(matches!(
            ImageRef::from_seed("https://example.com/a.jpg"),
            ImageRef::Remote(_)
        ));
        assert!(matches!(
            ImageRef::from_seed("photos/a.jpg"),
            ImageRef::File(_)
        ));
    }
}
