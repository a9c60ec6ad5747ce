//! Fail-fast permission guards for enforcement points.
//!
//! Each guard returns `Ok(())` when the check passes and a [`PermissionError`]
//! otherwise, so handlers can use `?` and let the error become a 403.

use tracing::debug;

use crate::error::PermissionError;
use crate::permissions::{can_delete_event, can_edit_event, has_permission};
use crate::role::{Permission, Role};

pub fn require_permission(role: Role, permission: Permission) -> Result<(), PermissionError> {
    if has_permission(role, permission) {
        return Ok(());
    }
    debug!("Denied {} to role {}", permission, role);
    Err(PermissionError::new(permission, role))
}

/// Require that `role` may edit the event.
///
/// A denial always reports `EDIT_OWN_EVENTS`, even for roles whose missing
/// permission is `EDIT_ALL_EVENTS`.
pub fn require_event_edit_permission(
    role: Role,
    resource_created_by: &str,
    requesting_user_id: &str,
) -> Result<(), PermissionError> {
    if can_edit_event(role, resource_created_by, requesting_user_id) {
        return Ok(());
    }
    debug!(
        "Denied edit of event created by {} to {} ({})",
        resource_created_by, requesting_user_id, role
    );
    Err(PermissionError::new(Permission::EditOwnEvents, role))
}

/// Require that `role` may delete the event. Denials report `DELETE_OWN_EVENTS`.
pub fn require_event_delete_permission(
    role: Role,
    resource_created_by: &str,
    requesting_user_id: &str,
) -> Result<(), PermissionError> {
    if can_delete_event(role, resource_created_by, requesting_user_id) {
        return Ok(());
    }
    debug!(
        "Denied delete of event created by {} to {} ({})",
        resource_created_by, requesting_user_id, role
    );
    Err(PermissionError::new(Permission::DeleteOwnEvents, role))
}
