//! # Receipt Errors
//!
//! A receipt carries several independently encrypted content streams. A
//! failure in one stream is recorded as a [`StreamError`] and parsing moves
//! on to the next, so the caller sees every failure in one [`MultiError`]
//! rather than only the first.

use std::fmt;

use thiserror::Error;

use yoti_core::{CryptoError, ParseError};

use crate::receipt::ActivityDetails;

/// Failure to decrypt or decode one content stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The independently parsed parts of a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentStream {
    UserProfile,
    ApplicationProfile,
    ExtraData,
    Timestamp,
}

impl ContentStream {
    /// Receipt JSON field the stream is read from.
    pub fn field_name(&self) -> &'static str {
        match self {
            ContentStream::UserProfile => "other_party_profile_content",
            ContentStream::ApplicationProfile => "profile_content",
            ContentStream::ExtraData => "extra_data_content",
            ContentStream::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ContentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A failure tagged with the stream it came from.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{stream}: {source}")]
pub struct StreamError {
    pub stream: ContentStream,
    #[source]
    pub source: ProfileError,
}

/// Every stream failure of one receipt, in parse order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiError {
    errors: Vec<StreamError>,
}

impl MultiError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stream: ContentStream, source: impl Into<ProfileError>) {
        self.errors.push(StreamError {
            stream,
            source: source.into(),
        });
    }

    pub fn errors(&self) -> &[StreamError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error for `stream`, if that stream failed.
    pub fn get(&self, stream: ContentStream) -> Option<&StreamError> {
        self.errors.iter().find(|e| e.stream == stream)
    }

    pub fn into_errors(self) -> Vec<StreamError> {
        self.errors
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors.first().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a StreamError;
    type IntoIter = std::slice::Iter<'a, StreamError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Failure to turn a receipt into [`ActivityDetails`].
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// The share did not complete.
    #[error("sharing outcome was {outcome:?}, expected \"SUCCESS\"")]
    SharingFailure { outcome: String },

    /// No stream can be read without the receipt key.
    #[error("unable to unwrap receipt key: {0}")]
    KeyUnwrap(#[source] CryptoError),

    /// One or more streams failed. `partial` holds everything that parsed.
    #[error("{} receipt content stream(s) failed: {errors}", .errors.len())]
    Content {
        partial: Box<ActivityDetails>,
        errors: MultiError,
    },
}
