//! The resource ownership rule shared by photos, comments and social media.

use photohub_core::error::AppError;
use photohub_core::result::AppResult;
use photohub_core::traits::Owned;
use photohub_entity::user::User;

/// Check that `resource` exists and belongs to `actor`.
///
/// `noun` names the resource in error messages ("photo", "comment", ...)
/// and `action` the attempted mutation ("update", "delete").
pub fn ensure_owner<R: Owned>(
    resource: Option<R>,
    actor: &User,
    noun: &str,
    action: &str,
) -> AppResult<R> {
    let resource =
        resource.ok_or_else(|| AppError::not_found(format!("No {noun} with that ID exists")))?;
    if resource.owner_id() != actor.id {
        return Err(AppError::forbidden(format!(
            "You are not authorized to {action} this {noun}"
        )));
    }
    Ok(resource)
}
