//! Team membership lookups feeding the permission checks.
//!
//! Storage lives behind [`MembershipStore`]; this module only resolves the
//! caller's role and hands it to the guards.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::guards::{require_event_delete_permission, require_event_edit_permission, require_permission};
use crate::role::{Permission, Role};
use crate::{Error, Result};

/// A user's membership row in a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub team_id: String,
    pub user_id: String,
    pub role: Role,
}

/// Source of (team, user) -> role assignments.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Look up the user's role in the team. `None` means the user is not a member.
    async fn member_role(&self, team_id: &str, user_id: &str) -> Result<Option<Role>>;
}

/// A resource whose creator decides "own" vs "all" permissions.
pub trait OwnedResource {
    fn created_by(&self) -> &str;
}

/// Resolve the caller's role, turning a missing membership into [`Error::NotMember`].
pub async fn resolve_role<S>(store: &S, team_id: &str, user_id: &str) -> Result<Role>
where
    S: MembershipStore + ?Sized,
{
    match store.member_role(team_id, user_id).await? {
        Some(role) => Ok(role),
        None => {
            info!("User {} is not a member of team {}", user_id, team_id);
            Err(Error::NotMember {
                team_id: team_id.to_string(),
            })
        }
    }
}

/// Resolve the caller's role and require a permission. Returns the role on success.
pub async fn authorize<S>(
    store: &S,
    team_id: &str,
    user_id: &str,
    permission: Permission,
) -> Result<Role>
where
    S: MembershipStore + ?Sized,
{
    let role = resolve_role(store, team_id, user_id).await?;
    require_permission(role, permission)?;
    Ok(role)
}

pub async fn authorize_event_edit<S, R>(
    store: &S,
    team_id: &str,
    user_id: &str,
    event: &R,
) -> Result<Role>
where
    S: MembershipStore + ?Sized,
    R: OwnedResource + ?Sized,
{
    let role = resolve_role(store, team_id, user_id).await?;
    require_event_edit_permission(role, event.created_by(), user_id)?;
    Ok(role)
}

pub async fn authorize_event_delete<S, R>(
    store: &S,
    team_id: &str,
    user_id: &str,
    event: &R,
) -> Result<Role>
where
    S: MembershipStore + ?Sized,
    R: OwnedResource + ?Sized,
{
    let role = resolve_role(store, team_id, user_id).await?;
    require_event_delete_permission(role, event.created_by(), user_id)?;
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryStore {
        members: HashMap<(String, String), Role>,
    }

    impl InMemoryStore {
        fn new(rows: &[TeamMember]) -> Self {
            let members = rows
                .iter()
                .map(|m| ((m.team_id.clone(), m.user_id.clone()), m.role))
                .collect();
            Self { members }
        }
    }

    #[async_trait]
    impl MembershipStore for InMemoryStore {
        async fn member_role(&self, team_id: &str, user_id: &str) -> Result<Option<Role>> {
            Ok(self
                .members
                .get(&(team_id.to_string(), user_id.to_string()))
                .copied())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl MembershipStore for FailingStore {
        async fn member_role(&self, _team_id: &str, _user_id: &str) -> Result<Option<Role>> {
            Err(Error::Internal("membership table unavailable".to_string()))
        }
    }

    struct Event {
        created_by: String,
    }

    impl OwnedResource for Event {
        fn created_by(&self) -> &str {
            &self.created_by
        }
    }

    fn member(team_id: &str, user_id: &str, role: Role) -> TeamMember {
        TeamMember {
            team_id: team_id.to_string(),
            user_id: user_id.to_string(),
            role,
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore::new(&[
            member("team-1", "owner-1", Role::Owner),
            member("team-1", "user123", Role::Member),
            member("team-1", "viewer-1", Role::Viewer),
            member("team-2", "user123", Role::Viewer),
        ])
    }

    #[tokio::test]
    async fn test_resolve_role_is_team_scoped() {
        let store = store();
        assert_eq!(resolve_role(&store, "team-1", "user123").await.unwrap(), Role::Member);
        assert_eq!(resolve_role(&store, "team-2", "user123").await.unwrap(), Role::Viewer);
    }

    #[tokio::test]
    async fn test_non_member_is_not_a_permission_denial() {
        let err = authorize(&store(), "team-2", "owner-1", Permission::ViewEvents)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotMember { ref team_id } if team_id == "team-2"));
        assert_eq!(err.code(), "NOT_A_MEMBER");
    }

    #[tokio::test]
    async fn test_authorize_returns_role_or_denial() {
        let store = store();
        let role = authorize(&store, "team-1", "owner-1", Permission::ManageTeam)
            .await
            .unwrap();
        assert_eq!(role, Role::Owner);

        let err = authorize(&store, "team-1", "user123", Permission::ManageTeam)
            .await
            .unwrap_err();
        match err {
            Error::PermissionDenied(denied) => {
                assert_eq!(denied.required_permission, Permission::ManageTeam);
                assert_eq!(denied.user_role, Role::Member);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authorize_event_edit_uses_creator() {
        let store = store();
        let own = Event {
            created_by: "user123".to_string(),
        };
        let others = Event {
            created_by: "user456".to_string(),
        };

        assert!(authorize_event_edit(&store, "team-1", "user123", &own).await.is_ok());
        assert!(authorize_event_edit(&store, "team-1", "owner-1", &others).await.is_ok());

        let err = authorize_event_edit(&store, "team-1", "user123", &others)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::PermissionDenied(ref d) if d.required_permission == Permission::EditOwnEvents
        ));
    }

    #[tokio::test]
    async fn test_authorize_event_delete_viewer() {
        let own = Event {
            created_by: "viewer-1".to_string(),
        };
        let err = authorize_event_delete(&store(), "team-1", "viewer-1", &own)
            .await
            .unwrap_err();
        match err {
            Error::PermissionDenied(denied) => {
                assert_eq!(denied.required_permission, Permission::DeleteOwnEvents);
                assert_eq!(denied.user_role, Role::Viewer);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let err = authorize(&FailingStore, "team-1", "user123", Permission::ViewEvents)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[tokio::test]
    async fn test_dyn_store() {
        let store: Box<dyn MembershipStore> = Box::new(store());
        let role = authorize(store.as_ref(), "team-1", "viewer-1", Permission::ViewSubscriptions)
            .await
            .unwrap();
        assert_eq!(role, Role::Viewer);
    }

    #[test]
    fn test_member_row_rejects_unknown_role() {
        let row: TeamMember =
            serde_json::from_str(r#"{"teamId":"t","userId":"u","role":"owner"}"#).unwrap();
        assert_eq!(row.role, Role::Owner);
        assert!(serde_json::from_str::<TeamMember>(r#"{"teamId":"t","userId":"u","role":"admin"}"#).is_err());
    }
}
