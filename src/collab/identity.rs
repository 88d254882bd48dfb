//! Player identity supplied by the external authentication service.
//!
//! The game core treats an identity as opaque. Only persistence
//! collaborators look at `role`, when they check write access.

use serde::{Deserialize, Serialize};

/// Stable user identifier issued by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access level granted by the auth service's group membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Player,
    /// Member of the `admin` group: may edit the catalog and grant cards.
    Admin,
}

/// An authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
}

impl PlayerIdentity {
    /// A regular player.
    #[must_use]
    pub fn player(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            display_name: display_name.into(),
            role: Role::Player,
        }
    }

    /// A member of the admin group.
    #[must_use]
    pub fn admin(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            display_name: display_name.into(),
            role: Role::Admin,
        }
    }

    /// Placeholder identity for a seat nobody has claimed (local play, tests).
    #[must_use]
    pub fn guest(seat: crate::core::PlayerId) -> Self {
        Self::player(format!("guest-{}", seat.index() + 1), seat.to_string())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_constructors() {
        let alice = PlayerIdentity::player("u-1", "alice");
        assert_eq!(alice.id, UserId::new("u-1"));
        assert!(!alice.is_admin());

        let root = PlayerIdentity::admin("u-0", "root");
        assert!(root.is_admin());
    }

    #[test]
    fn test_guest() {
        let guest = PlayerIdentity::guest(PlayerId::TWO);
        assert_eq!(guest.id.as_str(), "guest-2");
        assert_eq!(guest.display_name, "Player 2");
    }
}
