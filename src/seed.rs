// SPDX-License-Identifier: MPL-2.0
//! Startup posts for the feed.
//!
//! The feed is seeded either from the built-in demo posts or from a TOML
//! file whose shape mirrors [`Post`]:
//!
//! ```toml
//! [[posts]]
//! id = 1
//! time = "3 hours ago"
//! content = "Planted ten saplings with my class today!"
//! image = "photos/saplings.jpg"   # optional; http(s) URLs are never fetched
//! likes = 12
//! comments = 3
//! type = "Eco-Action"
//! author = { name = "Aisha Khan", avatar = "A", role = "Student" }
//! ```
//!
//! Posts are listed newest-first, the same order the feed displays them.

use crate::domain::post::{Author, Category, ImageRef, Post, PostId};
use crate::error::{Error, Result, SeedError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    posts: Vec<SeedPost>,
}

#[derive(Debug, Deserialize)]
struct SeedAuthor {
    name: String,
    avatar: String,
    #[serde(default)]
    role: String,
}

#[derive(Debug, Deserialize)]
struct SeedPost {
    id: u64,
    author: SeedAuthor,
    time: String,
    content: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    likes: u32,
    #[serde(default)]
    comments: u32,
    #[serde(rename = "type")]
    category: String,
}

impl SeedPost {
    fn into_post(self) -> Result<Post> {
        let category =
            Category::parse(&self.category).ok_or(SeedError::BlankCategory(self.id))?;

        Ok(Post {
            id: PostId::new(self.id),
            author: Author::new(self.author.name, self.author.avatar, self.author.role),
            time_label: self.time,
            body: self.content,
            image: self
                .image
                .as_deref()
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .map(ImageRef::from_seed),
            likes: self.likes,
            comments: self.comments,
            category,
        })
    }
}

/// Parses seed posts from TOML text.
///
/// # Errors
///
/// Returns [`Error::Seed`] if the text is malformed, two posts share an id,
/// or a post has a blank category.
pub fn parse(content: &str) -> Result<Vec<Post>> {
    let file: SeedFile =
        toml::from_str(content).map_err(|e| SeedError::Malformed(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut posts = Vec::with_capacity(file.posts.len());
    for raw in file.posts {
        if !seen.insert(raw.id) {
            return Err(SeedError::DuplicateId(raw.id).into());
        }
        posts.push(raw.into_post()?);
    }
    Ok(posts)
}

/// Loads seed posts from a TOML file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the errors of [`parse`].
pub fn load_from_path(path: &Path) -> Result<Vec<Post>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Resolves the startup posts.
///
/// Falls back to [`builtin`] when no file is configured or it cannot be
/// loaded; in the latter case the returned warning key explains why.
pub fn load(path: Option<&Path>) -> (Vec<Post>, Option<String>) {
    let Some(path) = path else {
        return (builtin(), None);
    };

    match load_from_path(path) {
        Ok(posts) => {
            tracing::info!(path = %path.display(), count = posts.len(), "seed posts loaded");
            (posts, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to built-in seed");
            let key = match &err {
                Error::Seed(seed_err) => seed_err.i18n_key(),
                _ => "warning-seed-unreadable",
            };
            (builtin(), Some(key.to_string()))
        }
    }
}

/// The built-in demo posts.
#[must_use]
pub fn builtin() -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(1),
            author: Author::new("Aisha Khan", "A", "Student at Green Valley High"),
            time_label: "3 hours ago".into(),
            body: "Just finished my AR exploration of a virtual rainforest! It's incredible \
                   how many species depend on healthy ecosystems. Feeling inspired to start \
                   my own mini-garden! 🌳 #ARLearns #EcoAction"
                .into(),
            image: Some(ImageRef::Remote(
                concat!(
                    "https://images.unsplash.com/photo-1542867041-f71660ef05b2",
                    "?auto=format&fit=crop&w=1770&q=80"
                )
                .into(),
            )),
            likes: 72,
            comments: 18,
            category: Category::Action,
        },
        Post {
            id: PostId::new(2),
            author: Author::new("Dr. Elena Petrova", "D", "Professor"),
            time_label: "2 days ago".into(),
            body: "Fascinating insights from the AI-powered energy grid optimization module. \
                   It clearly shows the potential for significant carbon footprint reduction \
                   in urban areas. Excited for my students to try this next week! \
                   #AIforGood #SustainableCities"
                .into(),
            image: None,
            likes: 55,
            comments: 9,
            category: Category::Exploration,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_POSTS: &str = r#"
        [[posts]]
        id = 10
        time = "1 hour ago"
        content = "Cleaned the river bank"
        image = "https://example.com/river.jpg"
        likes = 4
        comments = 1
        type = "Eco-Action"
        author = { name = "Sam", avatar = "S", role = "Volunteer" }

        [[posts]]
        id = 9
        time = "yesterday"
        content = "Reading about soil"
        type = "Composting"
        author = { name = "Lee", avatar = "L" }
    "#;

    #[test]
    fn parse_reads_posts_in_order() {
        let posts = parse(TWO_POSTS).expect("valid seed");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, PostId::new(10));
        assert_eq!(posts[0].category, Category::Action);
        assert!(matches!(posts[0].image, Some(ImageRef::Remote(_))));
        assert_eq!(posts[1].category, Category::Other("Composting".into()));
        assert_eq!(posts[1].likes, 0);
        assert!(posts[1].image.is_none());
        assert_eq!(posts[1].author.role, "");
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let content = r#"
            [[posts]]
            id = 1
            time = "now"
            content = "a"
            type = "learning"
            author = { name = "A", avatar = "A" }

            [[posts]]
            id = 1
            time = "now"
            content = "b"
            type = "learning"
            author = { name = "B", avatar = "B" }
        "#;
        assert_eq!(
            parse(content).expect_err("duplicate"),
            Error::Seed(SeedError::DuplicateId(1))
        );
    }

    #[test]
    fn parse_rejects_blank_category() {
        let content = r#"
            [[posts]]
            id = 3
            time = "now"
            content = "a"
            type = "  "
            author = { name = "A", avatar = "A" }
        "#;
        assert_eq!(
            parse(content).expect_err("blank"),
            Error::Seed(SeedError::BlankCategory(3))
        );
    }

    #[test]
    fn parse_rejects_negative_counts() {
        let content = r#"
            [[posts]]
            id = 3
            time = "now"
            content = "a"
            likes = -1
            type = "learning"
            author = { name = "A", avatar = "A" }
        "#;
        assert!(matches!(
            parse(content),
            Err(Error::Seed(SeedError::Malformed(_)))
        ));
    }

    #[test]
    fn load_falls_back_to_builtin_on_missing_file() {
        let temp_dir = tempdir().expect("temp dir");
        let (posts, warning) = load(Some(&temp_dir.path().join("missing.toml")));

        assert_eq!(posts, builtin());
        assert_eq!(warning.as_deref(), Some("warning-seed-unreadable"));
    }

    #[test]
    fn load_reads_file_when_present() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("seed.toml");
        fs::write(&path, TWO_POSTS).expect("write seed");

        let (posts, warning) = load(Some(&path));

        assert_eq!(posts.len(), 2);
        assert!(warning.is_none());
    }

    #[test]
    fn builtin_seed_has_unique_ids_and_tags() {
        let posts = builtin();
        let ids: HashSet<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
        assert!(posts.iter().all(|p| !p.category.tag().is_empty()));
    }
}
