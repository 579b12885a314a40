//! Capability trait implemented by authentication services.
//!
//! The host calls these operations from its generic sign-in, sign-out and
//! "who is the caller" code paths. Which implementation backs them is chosen
//! explicitly when the host is wired.

use async_trait::async_trait;

use crate::collaborators::RequestIdentityContext;
use crate::error::AuthnCollaboratorError;
use crate::models::User;

#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Sign `user` in, optionally persistently.
    fn sign_in(&self, user: Option<&User>, persistent: bool);

    /// Sign the current caller out.
    fn sign_out(&self);

    /// Record the candidate user the host discovered for this request.
    ///
    /// Called once per request, early in its lifecycle.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged.
    async fn set_authenticated_user_for_request(
        &mut self,
        ctx: &dyn RequestIdentityContext,
        user: Option<&User>,
    ) -> Result<(), AuthnCollaboratorError>;

    /// Resolve the caller of this request. `None` means anonymous.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged.
    async fn get_authenticated_user(
        &self,
        ctx: &dyn RequestIdentityContext,
    ) -> Result<Option<User>, AuthnCollaboratorError>;
}
