use dioxus::prelude::*;
use shared_types::{AuthProvider, AuthUser, UserRole};

/// Session authentication state.
///
/// Stands in for the external auth collaborator: the shell only ever asks it
/// for the current user through [`AuthProvider`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn sign_in(&mut self, user: AuthUser) {
        tracing::info!(name = %user.name, role = %user.role, "signed in");
        self.current_user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.current_user.set(None);
    }
}

impl AuthProvider for AuthState {
    /// Reads without subscribing, so effects that check the session once
    /// do not re-run on every sign-in.
    fn current_user(&self) -> Option<AuthUser> {
        self.current_user.peek().clone()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Display name of the signed-in user, or "Guest".
pub fn use_display_name() -> String {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string())
}

/// Role of the signed-in user, if it is one the app knows.
pub fn use_user_role() -> Option<UserRole> {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().and_then(AuthUser::user_role)
}
