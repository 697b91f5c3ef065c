// SPDX-License-Identifier: MPL-2.0
//! Tracked preview handles for composer images.
//!
//! Selecting a photo acquires a [`PreviewHandle`] from the
//! [`PreviewRegistry`]. The handle owns the decoded pixels and releases
//! itself when dropped, so every exit path (removal, replacement, closing
//! the composer, dropping the last post that shows it) releases it exactly
//! once. Handles are deliberately not `Clone`; share them through an `Arc`.

use super::image::DecodedImage;
use iced::widget::image;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier of an acquired preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview-{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Ledger {
    next_id: AtomicU64,
    acquired: AtomicU64,
    released: AtomicU64,
}

/// Snapshot of the registry counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewStats {
    pub acquired: u64,
    pub released: u64,
}

impl PreviewStats {
    /// Handles acquired and not yet released.
    #[must_use]
    pub fn outstanding(&self) -> u64 {
        self.acquired.saturating_sub(self.released)
    }

    /// Whether every acquisition has been matched by a release.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.acquired == self.released
    }
}

/// Issues preview handles and counts their acquisitions and releases.
///
/// Cloning the registry shares the same ledger.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    ledger: Arc<Ledger>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a decoded image and returns its tracked handle.
    #[must_use]
    pub fn acquire(&self, decoded: DecodedImage) -> PreviewHandle {
        let id = PreviewId(self.ledger.next_id.fetch_add(1, Ordering::Relaxed));
        self.ledger.acquired.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(%id, source = %decoded.source.display(), "preview acquired");

        PreviewHandle {
            id,
            source: decoded.source,
            image: decoded.handle,
            width: decoded.width,
            height: decoded.height,
            ledger: Arc::clone(&self.ledger),
        }
    }

    #[must_use]
    pub fn stats(&self) -> PreviewStats {
        PreviewStats {
            acquired: self.ledger.acquired.load(Ordering::Relaxed),
            released: self.ledger.released.load(Ordering::Relaxed),
        }
    }
}

/// A live preview of a selected image. Released on drop.
pub struct PreviewHandle {
    id: PreviewId,
    source: PathBuf,
    image: image::Handle,
    width: u32,
    height: u32,
    ledger: Arc<Ledger>,
}

impl PreviewHandle {
    #[must_use]
    pub fn id(&self) -> PreviewId {
        self.id
    }

    /// The file the preview was decoded from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Image handle for rendering.
    #[must_use]
    pub fn image(&self) -> &image::Handle {
        &self.image
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.ledger.released.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id = %self.id, "preview released");
    }
}

impl PartialEq for PreviewHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
