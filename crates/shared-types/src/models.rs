use serde::{Deserialize, Serialize};

/// Lab lending role controlling which dashboard a user sees.
///
/// - `Student`: browses components, submits borrow requests.
/// - `Admin`: approves, rejects, checks out and receives returns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Admin,
}

impl UserRole {
    /// Parse a role string. Unknown values yield `None` rather than a
    /// fallback role, so callers can render nothing for them.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(UserRole::Student),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Lowercase string for storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Administrator",
        }
    }
}

/// The signed-in user as reported by the auth collaborator.
///
/// `role` is kept as the raw string the collaborator returned; use
/// [`AuthUser::user_role`] to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub name: String,
    pub role: String,
}

impl AuthUser {
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            role: role.as_str().to_string(),
        }
    }

    pub fn user_role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}

/// Capability for reading the current session's user.
///
/// Called once when the shell mounts and once after each login action.
pub trait AuthProvider {
    fn current_user(&self) -> Option<AuthUser>;
}
