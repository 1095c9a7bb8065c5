//! User - The authenticated account held by the session service

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserRole;

/// Authenticated user record, as returned by `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub role: UserRole,
    pub department: String,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub department: Option<String>,
}

impl User {
    /// Merge a patch into this user, field by field.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_only_provided_fields() {
        let mut user = User {
            id: "u1".to_string(),
            name: "Alex Vance".to_string(),
            email: "alex.vance@example.com".to_string(),
            avatar_url: "https://picsum.photos/id/64/200/200".to_string(),
            role: UserRole::Admin,
            department: "Management".to_string(),
        };

        user.apply(UserPatch {
            department: Some("Operations".to_string()),
            ..UserPatch::default()
        });

        assert_eq!(user.department, "Operations");
        assert_eq!(user.name, "Alex Vance");
        assert_eq!(user.role, UserRole::Admin);
    }
}
