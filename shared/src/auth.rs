//! Caller identity from the identity provider.
//!
//! Tokens are verified by the API Gateway Cognito authorizer before a request
//! reaches us; this module only reads the claims it forwards.

use serde::Deserialize;

use crate::{Error, Result};

/// Claims forwarded by the Cognito authorizer.
#[derive(Debug, Deserialize)]
pub struct CognitoClaims {
    /// Subject (user id)
    pub sub: String,
    /// Email
    pub email: Option<String>,
    /// Cognito username
    #[serde(rename = "cognito:username")]
    pub cognito_username: Option<String>,
}

/// The caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User's Cognito subject, compared against a resource's `createdBy`
    pub user_id: String,
    /// User's email
    pub email: Option<String>,
}

impl TryFrom<CognitoClaims> for AuthenticatedUser {
    type Error = Error;

    fn try_from(claims: CognitoClaims) -> Result<Self> {
        if claims.sub.trim().is_empty() {
            return Err(Error::Auth("Empty sub claim".to_string()));
        }

        Ok(Self {
            user_id: claims.sub,
            email: claims.email.or(claims.cognito_username),
        })
    }
}

/// Extract the caller from `requestContext.authorizer.claims`.
pub fn extract_user_from_context(claims: &serde_json::Value) -> Result<AuthenticatedUser> {
    let sub = claims
        .get("sub")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::Auth("Missing sub claim".to_string()))?;

    let email = claims
        .get("email")
        .or_else(|| claims.get("cognito:username"))
        .and_then(|v| v.as_str())
        .map(String::from);

    AuthenticatedUser::try_from(CognitoClaims {
        sub: sub.to_string(),
        email,
        cognito_username: None,
    })
}
