//! Role to permission mapping and the checks built on it.
//!
//! The table is built once per process and never mutated. Every check here is a
//! pure function of its arguments and that table, so callers may invoke them
//! from any number of concurrent requests.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;
use strum::IntoEnumIterator;

use crate::role::{Permission, Role};

/// Permissions granted to `member`.
pub const MEMBER_PERMISSIONS: [Permission; 7] = [
    Permission::InviteMembers,
    Permission::CreateEvents,
    Permission::EditOwnEvents,
    Permission::DeleteOwnEvents,
    Permission::ViewEvents,
    Permission::ViewSubscriptions,
    Permission::ViewTeamSettings,
];

/// Permissions granted to `viewer`.
pub const VIEWER_PERMISSIONS: [Permission; 3] = [
    Permission::ViewEvents,
    Permission::ViewSubscriptions,
    Permission::ViewTeamSettings,
];

static ROLE_PERMISSIONS: OnceLock<RolePermissionTable> = OnceLock::new();

/// Immutable mapping from each role to its permission set.
#[derive(Debug)]
pub struct RolePermissionTable {
    owner: HashSet<Permission>,
    member: HashSet<Permission>,
    viewer: HashSet<Permission>,
}

impl RolePermissionTable {
    fn build() -> Self {
        Self {
            owner: Permission::iter().collect(),
            member: MEMBER_PERMISSIONS.into_iter().collect(),
            viewer: VIEWER_PERMISSIONS.into_iter().collect(),
        }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self {
        ROLE_PERMISSIONS.get_or_init(Self::build)
    }

    /// Borrow the canonical set for a role.
    pub fn get(&self, role: Role) -> &HashSet<Permission> {
        match role {
            Role::Owner => &self.owner,
            Role::Member => &self.member,
            Role::Viewer => &self.viewer,
        }
    }
}

/// Check whether a role holds a permission.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    RolePermissionTable::global().get(role).contains(&permission)
}

/// Resolve an "all" / "own" permission pair against resource ownership.
///
/// The "all" variant is consulted first, so an owner acting on someone else's
/// resource never reaches the ownership comparison.
fn can_act_on_resource(
    role: Role,
    all: Permission,
    own: Permission,
    resource_created_by: &str,
    requesting_user_id: &str,
) -> bool {
    if has_permission(role, all) {
        return true;
    }
    has_permission(role, own) && resource_created_by == requesting_user_id
}

/// Check whether a role may edit an event created by `resource_created_by`.
pub fn can_edit_event(role: Role, resource_created_by: &str, requesting_user_id: &str) -> bool {
    can_act_on_resource(
        role,
        Permission::EditAllEvents,
        Permission::EditOwnEvents,
        resource_created_by,
        requesting_user_id,
    )
}

/// Check whether a role may delete an event created by `resource_created_by`.
pub fn can_delete_event(role: Role, resource_created_by: &str, requesting_user_id: &str) -> bool {
    can_act_on_resource(
        role,
        Permission::DeleteAllEvents,
        Permission::DeleteOwnEvents,
        resource_created_by,
        requesting_user_id,
    )
}

pub fn can_manage_members(role: Role) -> bool {
    has_permission(role, Permission::ManageTeam)
}

pub fn can_invite_members(role: Role) -> bool {
    has_permission(role, Permission::InviteMembers)
}

pub fn can_manage_team_settings(role: Role) -> bool {
    has_permission(role, Permission::UpdateTeamSettings)
}

pub fn can_manage_subscriptions(role: Role) -> bool {
    has_permission(role, Permission::ManageSubscriptions)
}

/// All permissions held by a role.
///
/// Returns an owned copy; the canonical table cannot be changed through it.
pub fn get_user_permissions(role: Role) -> HashSet<Permission> {
    RolePermissionTable::global().get(role).clone()
}

/// Precomputed view of what a role may do, for rendering controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCapabilities {
    pub role: Role,
    /// Sorted in declaration order.
    pub permissions: Vec<Permission>,
    pub can_manage_members: bool,
    pub can_invite_members: bool,
    pub can_manage_team_settings: bool,
    pub can_manage_subscriptions: bool,
    pub can_create_events: bool,
}

pub fn capabilities(role: Role) -> RoleCapabilities {
    let mut permissions: Vec<Permission> = get_user_permissions(role).into_iter().collect();
    permissions.sort();

    RoleCapabilities {
        role,
        permissions,
        can_manage_members: can_manage_members(role),
        can_invite_members: can_invite_members(role),
        can_manage_team_settings: can_manage_team_settings(role),
        can_manage_subscriptions: can_manage_subscriptions(role),
        can_create_events: has_permission(role, Permission::CreateEvents),
    }
}
