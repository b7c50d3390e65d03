use serde::{Deserialize, Serialize};

/// Authenticated user summary shown in the admin chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl AdminUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Some(role.into()),
        }
    }

    /// Role label, "Administrator" when the caller did not provide one.
    pub fn role_label(&self) -> &str {
        self.role.as_deref().filter(|r| !r.is_empty()).unwrap_or("Administrator")
    }

    /// First letter of the display name, upper-cased, used for avatars.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_defaults_to_administrator() {
        let mut user = AdminUser::new("ada", "ada@example.com", "editor");
        assert_eq!(user.role_label(), "editor");

        user.role = None;
        assert_eq!(user.role_label(), "Administrator");

        user.role = Some(String::new());
        assert_eq!(user.role_label(), "Administrator");
    }

    #[test]
    fn test_initial() {
        let user = AdminUser::new("ada lovelace", "ada@example.com", "admin");
        assert_eq!(user.initial(), "A");

        let nameless = AdminUser::new("", "x@example.com", "admin");
        assert_eq!(nameless.initial(), "U");
    }
}
