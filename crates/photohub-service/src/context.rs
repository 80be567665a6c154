//! Request context carrying the authenticated user.

use photohub_core::types::id::UserId;
use photohub_entity::user::User;

/// Context for the current authenticated request.
///
/// Built once the access token has been validated and its user loaded,
/// then passed into service methods so every operation knows *who* is
/// acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved account making the request.
    pub user: User,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The acting user's id.
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
