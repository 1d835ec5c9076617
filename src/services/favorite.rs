//! Favorite service — saved station-pair routes with ownership enforcement.
//!
//! DESIGN
//! ======
//! Station and favorite persistence are collaborator traits; this module
//! owns validation only: both stations must exist at save time, and reads
//! and deletes are scoped to the owning email. A favorite has no lifecycle
//! between creation and deletion, so there is no update path.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServiceError;
use crate::model::{Favorite, NewFavorite, Station};
use crate::store::{FavoriteStore, StationStore, StoreError};

/// Request to bookmark a source/target station pair.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub source_station_id: i64,
    pub target_station_id: i64,
}

/// Station as exposed in favorite listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: i64,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self { id: station.id, name: station.name }
    }
}

/// One favorite projected for the owner's listing.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub source: StationResponse,
    pub target: StationResponse,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            source: favorite.source.into(),
            target: favorite.target.into(),
        }
    }
}

/// Manages the lifecycle of a member's saved station pairs.
pub struct FavoriteService {
    stations: Arc<dyn StationStore>,
    favorites: Arc<dyn FavoriteStore>,
}

impl FavoriteService {
    #[must_use]
    pub fn new(stations: Arc<dyn StationStore>, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { stations, favorites }
    }

    /// Bookmark a station pair for `email` and return the stored favorite.
    ///
    /// # Errors
    ///
    /// Fails with the station-not-found message when either id does not
    /// resolve to a persisted station; nothing is persisted in that case.
    pub async fn save_favorite(
        &self,
        email: &str,
        request: &FavoriteRequest,
    ) -> Result<Favorite, ServiceError> {
        let source = self.find_station(request.source_station_id).await?;
        let target = self.find_station(request.target_station_id).await?;

        let favorite = self
            .favorites
            .save(NewFavorite { email: email.to_owned(), source, target })
            .await?;
        info!(%email, favorite_id = favorite.id, "favorite saved");
        Ok(favorite)
    }

    /// List `email`'s favorites in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the listing fails.
    pub async fn show_favorites(&self, email: &str) -> Result<Vec<FavoriteResponse>, ServiceError> {
        let favorites = self.favorites.find_all_by_email(email).await?;
        Ok(favorites.into_iter().map(FavoriteResponse::from).collect())
    }

    /// Delete a favorite owned by `email`.
    ///
    /// # Errors
    ///
    /// Fails with the invalid-authentication message when the favorite
    /// belongs to someone else, leaving it intact; a missing id surfaces the
    /// store's not-found error.
    pub async fn delete_favorite(&self, email: &str, favorite_id: i64) -> Result<(), ServiceError> {
        let favorite = self
            .favorites
            .find_by_id(favorite_id)
            .await?
            .ok_or(StoreError::NotFound)?;

        if favorite.email != email {
            return Err(ServiceError::InvalidAuthenticationInfo);
        }

        self.favorites.delete(favorite.id).await?;
        info!(%email, favorite_id, "favorite deleted");
        Ok(())
    }

    async fn find_station(&self, id: i64) -> Result<Station, ServiceError> {
        self.stations
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::StationNotFound)
    }
}

#[cfg(test)]
#[path = "favorite_test.rs"]
mod tests;
