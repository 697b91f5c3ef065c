// SPDX-License-Identifier: MPL-2.0
//! Image handling for the post composer.
//!
//! [`image`] picks and decodes photos; [`preview`] turns decoded photos into
//! tracked preview handles with a guaranteed single release.

pub mod image;
pub mod preview;

// Re-export commonly used types
pub use image::{decode_image, pick_image, DecodedImage, IMAGE_EXTENSIONS};
pub use preview::{PreviewHandle, PreviewId, PreviewRegistry, PreviewStats};
