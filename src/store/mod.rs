//! Store contracts for the externally owned persistence layer.
//!
//! DESIGN
//! ======
//! The host application owns the database and the transaction scope; each
//! service call is expected to run inside one atomic unit of work supplied
//! out there. Services see only these traits, so tests construct the
//! [`memory`] backends directly and pass them in.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Favorite, Member, NewFavorite, Station};

pub mod memory;

/// Failures owned by a store collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entity not found")]
    NotFound,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read access to member records.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Look up a member by email, the natural key for all member reads.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the lookup itself fails.
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError>;
}

/// Read access to the station registry.
#[async_trait]
pub trait StationStore: Send + Sync {
    /// # Errors
    ///
    /// Returns a backend error if the lookup itself fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, StoreError>;
}

/// Lifecycle operations for saved favorites.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Persist a draft favorite, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the write fails.
    async fn save(&self, favorite: NewFavorite) -> Result<Favorite, StoreError>;

    /// # Errors
    ///
    /// Returns a backend error if the lookup itself fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, StoreError>;

    /// All favorites owned by `email`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the listing fails.
    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Favorite>, StoreError>;

    /// Remove a favorite permanently.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no favorite has that id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
