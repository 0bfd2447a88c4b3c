//! Error taxonomy for the staging editor.
//!
//! Four classes of failure reach the user, and every one is terminal for the
//! action that produced it; nothing is retried automatically:
//!
//! - upload validation ([`Error::InvalidUpload`]): rejected before any
//!   network call is made;
//! - transport failures ([`Error::Transport`]): the fetch itself failed or
//!   the response was not decodable;
//! - server-reported failures ([`Error::Rejected`]): the backend answered
//!   with `success: false` and a message, surfaced verbatim;
//! - missing preconditions (the remaining variants): user-correctable
//!   states checked before a request is even constructed.

use thiserror::Error;

use crate::upload::UploadError;

/// Any failure the editor can surface to the host page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No room photo has been uploaded to the server yet.
    #[error("upload a room photo first")]
    NoPhotoUploaded,

    /// The canvas has no background image loaded.
    #[error("no background image is loaded on the canvas")]
    NoBackground,

    /// The canvas holds no furniture to submit.
    #[error("place at least one piece of furniture first")]
    NoFurniture,

    /// No furniture has been picked from the library.
    #[error("select at least one piece of furniture first")]
    NoSelection,

    /// A generate call is already pending; the trigger stays disabled until
    /// it resolves.
    #[error("a generate request is already in progress")]
    RequestInFlight,

    /// The chosen file was rejected before upload.
    #[error(transparent)]
    InvalidUpload(#[from] UploadError),

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server processed the request and reported failure.
    #[error("{0}")]
    Rejected(String),
}
