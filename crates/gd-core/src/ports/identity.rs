use crate::ids::UserId;

/// Read-only lookup of the current user.
///
/// 当前用户标识的只读查询。
///
/// Resolved on every catalog call rather than captured once, so a user who
/// signs in after activation scopes the next request. `None` means requests
/// are unscoped (all users), never a failure.
pub trait IdentityPort: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}
