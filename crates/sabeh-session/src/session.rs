//! In-memory session state

use sabeh_api::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup validation of the persisted session has not finished;
    /// the UI holds rendering until this phase ends.
    Checking,
    Authenticated,
    Unauthenticated,
}

/// The in-memory record of the current authentication state.
///
/// `is_authenticated()` implies both `token` and `user` are present;
/// the only transitions into and out of `Authenticated` set or clear
/// both fields together.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: AuthPhase,
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: AuthPhase::Checking,
            token: None,
            user: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Checking
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    pub(crate) fn authenticate(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
        self.phase = AuthPhase::Authenticated;
    }

    /// Replace the profile of an authenticated session.
    pub(crate) fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.phase = AuthPhase::Unauthenticated;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
