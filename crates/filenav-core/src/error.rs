//! Error types for token decoding and listing.

use std::io;

use thiserror::Error;

/// Why a token could not be turned back into a locator.
///
/// Never surfaced by a listing: the resolver treats any of these as "no
/// token" and starts from the default context.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    Transport(#[from] base64::DecodeError),
    #[error("token record is malformed: {0}")]
    Record(String),
    #[error("token has no usable context id")]
    Context,
}

/// Fatal listing failures. Everything else degrades to an ancestor view.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("hierarchy backend failed: {0}")]
    Backend(#[from] io::Error),
    #[error("hierarchy backend has no system root")]
    MissingSystemRoot,
}
