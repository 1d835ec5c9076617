//! In-memory store backends.
//!
//! Stand-ins for the ORM-backed repositories of the host application. Tests
//! build a fresh set per case instead of relying on transaction rollback;
//! identifiers come from per-store atomic sequences, so they are stable for
//! the lifetime of the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{FavoriteStore, MemberStore, StationStore, StoreError};
use crate::model::{Favorite, Member, NewFavorite, Station};

// =============================================================================
// MEMBERS
// =============================================================================

/// Member records keyed by email.
#[derive(Default)]
pub struct InMemoryMemberStore {
    members: RwLock<HashMap<String, Member>>,
}

impl InMemoryMemberStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a member record. Registration lives upstream; this
    /// is the seeding entry point for fixtures.
    pub async fn save(&self, member: Member) {
        self.members.write().await.insert(member.email.clone(), member);
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, StoreError> {
        Ok(self.members.read().await.get(email).cloned())
    }
}

// =============================================================================
// STATIONS
// =============================================================================

/// Station registry with store-assigned identifiers.
pub struct InMemoryStationStore {
    next_id: AtomicI64,
    stations: RwLock<HashMap<i64, Station>>,
}

impl InMemoryStationStore {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: AtomicI64::new(1), stations: RwLock::new(HashMap::new()) }
    }

    /// Persist a named station under the next identifier.
    pub async fn save(&self, name: &str) -> Station {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let station = Station { id, name: name.to_owned() };
        self.stations.write().await.insert(id, station.clone());
        station
    }
}

impl Default for InMemoryStationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StationStore for InMemoryStationStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Station>, StoreError> {
        Ok(self.stations.read().await.get(&id).cloned())
    }
}

// =============================================================================
// FAVORITES
// =============================================================================

/// Favorite rows in insertion order, as a listing would return them.
pub struct InMemoryFavoriteStore {
    next_id: AtomicI64,
    favorites: RwLock<Vec<Favorite>>,
}

impl InMemoryFavoriteStore {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: AtomicI64::new(1), favorites: RwLock::new(Vec::new()) }
    }
}

impl Default for InMemoryFavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteStore for InMemoryFavoriteStore {
    async fn save(&self, favorite: NewFavorite) -> Result<Favorite, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let favorite = Favorite {
            id,
            email: favorite.email,
            source: favorite.source,
            target: favorite.target,
        };
        self.favorites.write().await.push(favorite.clone());
        Ok(favorite)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Favorite>, StoreError> {
        Ok(self.favorites.read().await.iter().find(|f| f.id == id).cloned())
    }

    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Favorite>, StoreError> {
        Ok(self
            .favorites
            .read()
            .await
            .iter()
            .filter(|f| f.email == email)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
