//! Team roles and the permissions they can hold.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result};

/// A user's privilege level within a single team.
///
/// Variants are declared from least to most privileged, so `Ord` follows rank:
/// `Viewer < Member < Owner`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Viewer,
    Member,
    Owner,
}

impl Role {
    /// Parse a role coming from outside the engine (membership rows, request bodies).
    ///
    /// Anything other than `owner`, `member` or `viewer` is rejected here so the
    /// permission checks only ever see a valid role.
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value).map_err(|_| Error::Validation(format!("Unknown role: {}", value)))
    }
}

/// A discrete capability a role either holds or does not.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // Team
    ManageTeam,
    UpdateTeamSettings,
    ViewTeamSettings,

    // Membership
    InviteMembers,
    RemoveMembers,
    UpdateMemberRoles,

    // Events
    CreateEvents,
    EditOwnEvents,
    EditAllEvents,
    DeleteOwnEvents,
    DeleteAllEvents,
    ViewEvents,

    // Subscription
    ManageSubscriptions,
    ViewSubscriptions,
}

impl Permission {
    /// Whether the permission allows changing state rather than reading it.
    pub fn is_mutation(self) -> bool {
        !matches!(
            self,
            Permission::ViewEvents | Permission::ViewSubscriptions | Permission::ViewTeamSettings
        )
    }

    /// Parse a permission name such as `EDIT_OWN_EVENTS`.
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_str(value)
            .map_err(|_| Error::Validation(format!("Unknown permission: {}", value)))
    }
}
