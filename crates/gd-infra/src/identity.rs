//! Identity adapter backed by a fixed, configured user.

use gd_core::ports::IdentityPort;
use gd_core::UserId;

/// Serves a user id decided at startup (config file or `--user`).
///
/// An empty id is treated as "no user", so requests go out unscoped.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = (!user_id.trim().is_empty()).then(|| UserId::new(user_id));
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl IdentityPort for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}
