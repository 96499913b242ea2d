use shared_types::{templates, AuthUser, NotificationDraft, SessionSettings, UserRole};

/// Authentication state of the root shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShellState {
    /// Waiting for the one-shot session check.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(AuthUser),
}

/// Inputs that move the shell between states.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Result of the startup session check.
    Checked(Option<AuthUser>),
    /// The login form reported success; carries what the auth provider
    /// returned afterwards.
    LoggedIn(Option<AuthUser>),
    LoggedOut,
}

/// What the shell renders for a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    Loading,
    Login,
    Student,
    Admin,
    /// Signed in with a role the app does not know.
    Empty,
}

impl ShellState {
    /// Apply `event`, returning the next state and the notification to
    /// emit, if any. Events that do not apply to the current state leave it
    /// unchanged.
    pub fn apply(
        &self,
        event: ShellEvent,
        session: &SessionSettings,
    ) -> (ShellState, Option<NotificationDraft>) {
        match (self, event) {
            (ShellState::Loading, ShellEvent::Checked(user)) => (Self::from_user(user), None),
            (ShellState::Unauthenticated, ShellEvent::LoggedIn(Some(user))) => {
                let welcome = templates::welcome(&user.name, session.welcome_duration_ms);
                (ShellState::Authenticated(user), Some(welcome))
            }
            (ShellState::Authenticated(_), ShellEvent::LoggedOut) => (
                ShellState::Unauthenticated,
                Some(templates::logged_out(session.logout_duration_ms)),
            ),
            (state, _) => (state.clone(), None),
        }
    }

    fn from_user(user: Option<AuthUser>) -> Self {
        match user {
            Some(user) => ShellState::Authenticated(user),
            None => ShellState::Unauthenticated,
        }
    }

    pub fn view(&self) -> ShellView {
        match self {
            ShellState::Loading => ShellView::Loading,
            ShellState::Unauthenticated => ShellView::Login,
            ShellState::Authenticated(user) => match user.user_role() {
                Some(UserRole::Student) => ShellView::Student,
                Some(UserRole::Admin) => ShellView::Admin,
                None => ShellView::Empty,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShellState::Loading => "loading",
            ShellState::Unauthenticated => "unauthenticated",
            ShellState::Authenticated(_) => "authenticated",
        }
    }
}
