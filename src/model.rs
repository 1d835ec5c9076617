//! Core domain types shared by the auth and favorite services.

// =============================================================================
// MEMBER
// =============================================================================

/// A registered user. Email is the natural key for all member lookups.
///
/// Created at registration, which lives upstream; the flows in this crate
/// only ever read member records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub email: String,
    /// Opaque credential string. The registration layer owns its format.
    pub password: String,
    pub age: u8,
    /// Role names in the order they were granted.
    pub roles: Vec<String>,
}

impl Member {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>, age: u8, roles: Vec<String>) -> Self {
        Self { email: email.into(), password: password.into(), age, roles }
    }
}

/// Role names attached to member records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Member => "ROLE_MEMBER",
        }
    }

    /// Parse a stored role name. Unknown names return `None`.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_MEMBER" => Some(Role::Member),
            _ => None,
        }
    }
}

// =============================================================================
// STATION
// =============================================================================

/// A named point in the transit network. The identifier is assigned by the
/// store on creation and stable from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// FAVORITE
// =============================================================================

/// A persisted user-owned pairing of a source and target station.
///
/// Stations are shared by reference for display; a favorite never manages
/// their lifecycle. There is no update operation: a favorite is created once
/// and destroyed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i64,
    /// Email of the member who created the favorite. All reads and deletes
    /// are scoped to this owner.
    pub email: String,
    pub source: Station,
    pub target: Station,
}

/// Draft favorite before the store has assigned an identifier.
#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub email: String,
    pub source: Station,
    pub target: Station,
}
