// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Seed(SeedError),
}

/// Reasons a seed file can be rejected.
/// Each variant maps to a localized warning shown at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The file is not valid TOML or does not match the post shape.
    Malformed(String),

    /// Two posts share the same identifier.
    DuplicateId(u64),

    /// A post has an empty or whitespace-only category tag.
    BlankCategory(u64),
}

impl SeedError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SeedError::Malformed(_) => "warning-seed-malformed",
            SeedError::DuplicateId(_) => "warning-seed-duplicate-id",
            SeedError::BlankCategory(_) => "warning-seed-blank-category",
        }
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Malformed(msg) => write!(f, "malformed seed file: {}", msg),
            SeedError::DuplicateId(id) => write!(f, "duplicate post id {}", id),
            SeedError::BlankCategory(id) => write!(f, "post {} has a blank category", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Seed(e) => write!(f, "Seed Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SeedError> for Error {
    fn from(err: SeedError) -> Self {
        Error::Seed(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
