//! Caller identity snapshot taken from the identity provider.
//!
//! Handlers resolve the session before a policy runs; the policies only see
//! this snapshot and never talk to the provider themselves.

use crate::domain::user::{User, UserId};

/// Identity attached to the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    /// No session; public views only.
    Anonymous,
    /// Logged-in user.
    Authenticated(User),
}

impl Caller {
    /// `true` when the caller carries an identity.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The authenticated user, when there is one.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    /// The authenticated user's id, when there is one.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user().map(User::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::DisplayName;
    use rstest::rstest;

    #[rstest]
    fn anonymous_has_no_identity() {
        assert!(!Caller::Anonymous.is_authenticated());
        assert!(Caller::Anonymous.user().is_none());
        assert!(Caller::Anonymous.user_id().is_none());
    }

    #[rstest]
    fn authenticated_exposes_the_user() {
        let user = User::new(
            UserId::random(),
            DisplayName::new("Автор").expect("valid name"),
        );
        let caller = Caller::Authenticated(user.clone());
        assert!(caller.is_authenticated());
        assert_eq!(caller.user(), Some(&user));
        assert_eq!(caller.user_id(), Some(user.id()));
    }
}
