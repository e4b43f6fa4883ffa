//! Session collaborator
//!
//! Holds the process-wide "current user" value. Sign-in and sign-out are
//! driven externally (authentication is out of scope); the sync core only
//! ever reads the value. The session is an explicitly constructed,
//! injected instance, not a global accessor.

use crate::domain::UserId;
use std::sync::RwLock;

/// Current-user session state
///
/// # Examples
///
/// ```
/// use medsync::core::session::Session;
/// use medsync::domain::UserId;
///
/// let session = Session::new();
/// assert!(session.current_user().is_none());
///
/// session.sign_in(UserId::new("user-1").unwrap());
/// assert_eq!(session.current_user().unwrap().as_str(), "user-1");
///
/// session.sign_out();
/// assert!(session.current_user().is_none());
/// ```
pub struct Session {
    current: RwLock<Option<UserId>>,
}

impl Session {
    /// Creates a signed-out session
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Records a sign-in
    pub fn sign_in(&self, user: UserId) {
        tracing::info!(user_id = %user, "User signed in");
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
    }

    /// Records a sign-out
    pub fn sign_out(&self) {
        tracing::info!("User signed out");
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Returns the signed-in user, if any
    ///
    /// Absence is not an error: it means "nothing to sync yet".
    pub fn current_user(&self) -> Option<UserId> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
