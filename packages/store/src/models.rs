//! # Principal models persisted with the session
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The closed set of principal categories. Every role owns exactly one dashboard path. |
//! | [`UserInfo`] | The user record returned by the backend at login and persisted next to the token. Only `role` drives behaviour; everything else is for display. |
//!
//! The backend spells roles with a leading capital (`"Admin"`, `"Owner"`, ...).
//! A role string outside that set deserializes as an absent role instead of
//! failing, so a record written by a newer backend still loads and the guard
//! treats it as "authenticated with no permitted role".
//!
//! Storing a record keeps only what [`UserInfo`] models. An unrecognised role
//! is written back as `null` and backend fields outside the struct are dropped,
//! so `set_user` followed by `user` returns the parsed record, not the raw
//! backend payload.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::guard::{ADMIN_PATH, EMPLOYEE_PATH, OWNER_PATH, TENANT_PATH};

/// A principal category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Owner,
    Tenant,
    Employee,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Owner, Role::Tenant, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Owner => "Owner",
            Role::Tenant => "Tenant",
            Role::Employee => "Employee",
        }
    }

    /// The dashboard this role lands on.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => ADMIN_PATH,
            Role::Owner => OWNER_PATH,
            Role::Tenant => TENANT_PATH,
            Role::Employee => EMPLOYEE_PATH,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// User information returned by the backend and kept in the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Tenant and owner assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_name: Option<String>,
    /// Tenant assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    /// Owner assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment_no: Option<String>,
    /// Owner assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_building: Option<String>,
    /// Employee assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to username if full name is not set.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("admin".parse::<Role>().is_err());
        assert!("Janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_dashboard_paths_are_unique() {
        let mut paths: Vec<_> = Role::ALL.iter().map(Role::dashboard_path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Role::ALL.len());
    }

    #[test]
    fn test_user_from_login_payload() {
        let json = r#"{
            "user_id": "T1002",
            "username": "tenant1",
            "email": "t1@example.com",
            "role": "Tenant",
            "full_name": "Asha Rao",
            "apartment_name": "Skyline",
            "room_no": "126"
        }"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Some(Role::Tenant));
        assert_eq!(user.room_no.as_deref(), Some("126"));
        assert_eq!(user.display_name(), "Asha Rao");
        assert!(user.department.is_none());
    }

    #[test]
    fn test_unknown_role_is_absent() {
        let json = r#"{"user_id": "X1", "username": "x", "role": "Janitor"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, None);

        let json = r#"{"user_id": "X1", "username": "x"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, None);
        assert_eq!(user.display_name(), "x");
    }
}
