// SPDX-License-Identifier: MPL-2.0
//! Composer draft: the transient state behind the create-post dialog.
//!
//! The draft owns at most one [`PreviewHandle`]. Replacing, removing,
//! submitting or dropping the draft each hand the handle off or drop it,
//! so it is released exactly once whichever path ends the draft.

use crate::config::{IMAGE_ONLY_BODY, JUST_NOW_LABEL};
use crate::domain::post::{Author, Category, ImageRef, Post, PostId};
use crate::media::preview::PreviewHandle;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies one photo pick so a late result for a superseded or
/// cancelled pick can be recognized and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// The accepted photo of a draft.
#[derive(Debug)]
struct Selection {
    path: PathBuf,
    preview: PreviewHandle,
}

#[derive(Debug, Default)]
pub struct Draft {
    body: String,
    category: Category,
    selection: Option<Selection>,
    pending: Option<SelectionToken>,
    next_token: u64,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Preview of the selected photo, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.selection.as_ref().map(|selection| &selection.preview)
    }

    /// Path of the selected photo, if any.
    #[must_use]
    pub fn selected_path(&self) -> Option<&Path> {
        self.selection.as_ref().map(|selection| selection.path.as_path())
    }

    /// Whether a photo pick is in flight.
    #[must_use]
    pub fn is_picking(&self) -> bool {
        self.pending.is_some()
    }

    /// A draft can be posted when it has non-blank text or a photo.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.body.trim().is_empty() || self.selection.is_some()
    }

    /// Starts a photo pick. Any earlier pending pick is superseded.
    pub fn begin_selection(&mut self) -> SelectionToken {
        let token = SelectionToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        token
    }

    /// Token of the pick in flight, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<SelectionToken> {
        self.pending
    }

    /// Whether `token` belongs to the pick currently in flight.
    #[must_use]
    pub fn is_pending(&self, token: SelectionToken) -> bool {
        self.pending == Some(token)
    }

    /// Ends the pick identified by `token` without changing the selection
    /// (dialog cancelled or decode failed).
    pub fn cancel_selection(&mut self, token: SelectionToken) {
        if self.is_pending(token) {
            self.pending = None;
        }
    }

    /// Accepts the photo for the pending pick.
    ///
    /// The previous preview, if any, is dropped after the new one is
    /// installed. A stale `token` hands the preview back untouched so the
    /// caller decides its fate.
    pub fn accept_selection(
        &mut self,
        token: SelectionToken,
        preview: PreviewHandle,
    ) -> Result<(), PreviewHandle> {
        if !self.is_pending(token) {
            return Err(preview);
        }
        self.pending = None;

        let path = preview.source().to_path_buf();
        let previous = self.selection.replace(Selection { path, preview });
        drop(previous);
        Ok(())
    }

    /// Removes the selected photo and abandons any pick in flight, so the
    /// same file can be chosen again. The body is left untouched.
    pub fn remove_image(&mut self) {
        self.pending = None;
        self.selection = None;
    }

    /// Builds the post for this draft, moving the preview into it.
    ///
    /// Returns `None`, leaving the draft untouched, when it is not
    /// submittable.
    pub fn take_post(&mut self, id: PostId, author: &Author) -> Option<Post> {
        if !self.is_submittable() {
            return None;
        }

        let trimmed = self.body.trim();
        let body = if trimmed.is_empty() {
            IMAGE_ONLY_BODY.to_string()
        } else {
            trimmed.to_string()
        };

        self.pending = None;
        let image = self
            .selection
            .take()
            .map(|selection| ImageRef::Preview(Arc::new(selection.preview)));

        Some(Post {
            id,
            author: author.clone(),
            time_label: JUST_NOW_LABEL.to_string(),
            body,
            image,
            likes: 0,
            comments: 0,
            category: self.category.clone(),
        })
    }
}
