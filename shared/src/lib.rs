//! Shared library for the team calendar API.
//!
//! Holds the role-based permission engine used by every handler and UI guard,
//! together with the error, identity, HTTP and logging plumbing around it.

pub mod auth;
pub mod config;
pub mod error;
pub mod guards;
pub mod http;
pub mod logging;
pub mod membership;
pub mod permissions;
pub mod role;

pub use auth::{extract_user_from_context, AuthenticatedUser, CognitoClaims};
pub use config::{Config, LogFormat};
pub use error::{Error, PermissionError, Result};
pub use guards::{require_event_delete_permission, require_event_edit_permission, require_permission};
pub use http::{error_response, json_response, permission_denied_response, ApiResponse, ErrorBody};
pub use membership::{
    authorize, authorize_event_delete, authorize_event_edit, resolve_role, MembershipStore,
    OwnedResource, TeamMember,
};
pub use permissions::{
    can_delete_event, can_edit_event, can_invite_members, can_manage_members,
    can_manage_subscriptions, can_manage_team_settings, capabilities, get_user_permissions,
    has_permission, RoleCapabilities, RolePermissionTable,
};
pub use role::{Permission, Role};
