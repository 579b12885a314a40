//! Error types for the `ad_authn` collaborators.

use thiserror::Error;

/// Errors raised by the collaborators the resolver depends on.
///
/// The resolver never constructs these itself; it returns them to the host
/// exactly as the collaborator produced them. "Not found" is not an error.
#[derive(Debug, Error)]
pub enum AuthnCollaboratorError {
    /// The user directory backend cannot be reached.
    #[error("user directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// Site configuration cannot be read.
    #[error("site configuration unavailable: {0}")]
    SiteConfigUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
