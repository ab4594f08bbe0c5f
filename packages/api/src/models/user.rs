//! # Authentication payloads
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`LoginRequest`] / [`LoginResponse`] | POST | `/auth/login` |
//! | [`RegistrationForm`] → [`RegisterRequest`] | POST | `/auth/register` |
//! | [`VerifyResponse`] | GET | `/auth/verify` |
//! | [`UserUpdate`] | PUT | `/auth/users/{id}` |
//!
//! [`RegistrationForm`] is the client-side form state. Its
//! [`validate`](RegistrationForm::validate) mirrors the backend's password rules so
//! most rejections never leave the browser, and
//! [`into_request`](RegistrationForm::into_request) sends only the fields the chosen
//! role uses.

use serde::{Deserialize, Serialize};
use store::{Role, UserInfo};

use crate::auth::password;
use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Registration form state.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub room_no: String,
    pub apartment_name: String,
    pub apartment_no: String,
    pub managed_building: String,
    pub department: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            role: Role::Tenant,
            full_name: String::new(),
            email: String::new(),
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            room_no: String::new(),
            apartment_name: String::new(),
            apartment_no: String::new(),
            managed_building: String::new(),
            department: String::new(),
        }
    }
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("Full name"));
        }
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField("Username"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("Email"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !password::meets_requirements(&self.password) {
            return Err(ValidationError::WeakPassword);
        }
        Ok(())
    }

    /// Validate and build the request body for the selected role.
    pub fn into_request(self) -> Result<RegisterRequest, ValidationError> {
        self.validate()?;

        let mut request = RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            full_name: self.full_name.trim().to_string(),
            role: self.role,
            room_no: None,
            apartment_name: None,
            apartment_no: None,
            managed_building: None,
            department: None,
        };
        match self.role {
            Role::Tenant => {
                request.room_no = Some(self.room_no);
                request.apartment_name = Some(self.apartment_name);
            }
            Role::Owner => {
                request.apartment_name = Some(self.apartment_name);
                request.apartment_no = Some(self.apartment_no);
                request.managed_building = Some(self.managed_building);
            }
            Role::Employee => {
                request.department = Some(self.department);
            }
            Role::Admin => {}
        }
        Ok(request)
    }
}

/// Partial user edit sent by the admin user directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_building: Option<String>,
}

/// Search box and role selector of the user directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    /// `None` shows every role.
    pub role: Option<Role>,
}

impl UserFilter {
    /// Case-insensitive match on username, full name or email, plus the role.
    pub fn matches(&self, user: &UserInfo) -> bool {
        if self.role.is_some_and(|role| user.role != Some(role)) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            user.username.as_str(),
            user.full_name.as_deref().unwrap_or_default(),
            user.email.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, users: &'a [UserInfo]) -> Vec<&'a UserInfo> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(role: Role) -> RegistrationForm {
        RegistrationForm {
            role,
            full_name: " Meera Iyer ".to_string(),
            email: "meera@example.com".to_string(),
            username: "meera".to_string(),
            password: "Secur3!pass".to_string(),
            confirm_password: "Secur3!pass".to_string(),
            room_no: "204".to_string(),
            apartment_name: "Lakeview".to_string(),
            apartment_no: "A-2".to_string(),
            managed_building: "B1".to_string(),
            department: "Electrical".to_string(),
        }
    }

    #[test]
    fn test_mismatch_checked_before_strength() {
        let mut f = form(Role::Tenant);
        f.password = "weak".to_string();
        f.confirm_password = "other".to_string();
        assert_eq!(f.validate(), Err(ValidationError::PasswordMismatch));

        f.confirm_password = "weak".to_string();
        assert_eq!(f.validate(), Err(ValidationError::WeakPassword));
        assert_eq!(
            ValidationError::WeakPassword.to_string(),
            "Password does not meet security requirements"
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut f = form(Role::Admin);
        f.username = "  ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::MissingField("Username")));
    }

    #[test]
    fn test_role_specific_fields() {
        let tenant = serde_json::to_value(form(Role::Tenant).into_request().unwrap()).unwrap();
        assert_eq!(tenant["role"], "Tenant");
        assert_eq!(tenant["full_name"], "Meera Iyer");
        assert_eq!(tenant["room_no"], "204");
        assert_eq!(tenant["apartment_name"], "Lakeview");
        assert!(tenant.get("department").is_none());
        assert!(tenant.get("managed_building").is_none());

        let owner = serde_json::to_value(form(Role::Owner).into_request().unwrap()).unwrap();
        assert_eq!(owner["managed_building"], "B1");
        assert_eq!(owner["apartment_no"], "A-2");
        assert!(owner.get("room_no").is_none());

        let employee = serde_json::to_value(form(Role::Employee).into_request().unwrap()).unwrap();
        assert_eq!(employee["department"], "Electrical");
        assert!(employee.get("apartment_name").is_none());

        let admin = serde_json::to_value(form(Role::Admin).into_request().unwrap()).unwrap();
        assert_eq!(
            admin,
            json!({
                "username": "meera",
                "email": "meera@example.com",
                "password": "Secur3!pass",
                "full_name": "Meera Iyer",
                "role": "Admin"
            })
        );
    }

    #[test]
    fn test_user_filter() {
        let users: Vec<UserInfo> = serde_json::from_value(json!([
            {"user_id": "A1", "username": "admin", "email": "root@example.com", "role": "Admin", "full_name": "Site Admin"},
            {"user_id": "T1002", "username": "asha", "email": "asha@example.com", "role": "Tenant", "full_name": "Asha Rao"},
            {"user_id": "E3001", "username": "vik", "email": "vik@example.com", "role": "Employee"}
        ]))
        .unwrap();
        let ids = |filter: &UserFilter| -> Vec<&str> {
            filter.apply(&users).iter().map(|u| u.user_id.as_str()).collect()
        };

        assert_eq!(ids(&UserFilter::default()).len(), 3);
        let by_name = UserFilter {
            search: "RAO".to_string(),
            role: None,
        };
        assert_eq!(ids(&by_name), vec!["T1002"]);
        let by_email = UserFilter {
            search: "vik@".to_string(),
            role: None,
        };
        assert_eq!(ids(&by_email), vec!["E3001"]);
        let by_role = UserFilter {
            search: String::new(),
            role: Some(Role::Admin),
        };
        assert_eq!(ids(&by_role), vec!["A1"]);
        let both = UserFilter {
            search: "asha".to_string(),
            role: Some(Role::Owner),
        };
        assert!(ids(&both).is_empty());
    }

    #[test]
    fn test_login_response() {
        let response: LoginResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "access_token": "eyJ...",
            "user": {"user_id": "O1", "username": "owner", "email": "o@x", "role": "Owner", "full_name": "O"}
        }))
        .unwrap();
        assert_eq!(response.user.role, Some(Role::Owner));
        assert_eq!(response.access_token, "eyJ...");
    }
}
