// SPDX-License-Identifier: MPL-2.0
//! Ordered, newest-first collection of posts.

use super::post::{Post, PostId};

/// The feed's post collection.
///
/// New posts are only ever prepended, so the relative order of existing
/// posts never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    /// Builds a feed from posts already ordered newest-first.
    #[must_use]
    pub fn from_seed(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Inserts a post at the front of the feed.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Highest identifier currently in the feed.
    #[must_use]
    pub fn max_id(&self) -> Option<PostId> {
        self.posts.iter().map(|post| post.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{Author, Category};

    fn post(id: u64) -> Post {
        Post {
            id: PostId::new(id),
            author: Author::new("Test", "T", "Tester"),
            time_label: "now".into(),
            body: format!("post {id}"),
            image: None,
            likes: 0,
            comments: 0,
            category: Category::Learning,
        }
    }

    #[test]
    fn prepend_puts_post_first_and_keeps_tail() {
        let mut feed = Feed::from_seed(vec![post(1), post(2), post(3)]);
        let before = feed.posts().to_vec();

        feed.prepend(post(10));

        assert_eq!(feed.len(), 4);
        assert_eq!(feed.posts()[0].id, PostId::new(10));
        assert_eq!(&feed.posts()[1..], before.as_slice());
    }

    #[test]
    fn max_id_tracks_largest_identifier() {
        let feed = Feed::from_seed(vec![post(4), post(9), post(2)]);
        assert_eq!(feed.max_id(), Some(PostId::new(9)));
        assert_eq!(Feed::default().max_id(), None);
    }

    #[test]
    fn get_finds_post_by_id() {
        let feed = Feed::from_seed(vec![post(1), post(2)]);
        assert_eq!(feed.get(PostId::new(2)).map(|p| p.body.as_str()), Some("post 2"));
        assert!(feed.get(PostId::new(3)).is_none());
    }
}
