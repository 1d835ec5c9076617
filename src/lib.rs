//! Domain core for a subway-route product: login and route favorites.
//!
//! ARCHITECTURE
//! ============
//! Two request-scoped services over constructor-supplied collaborator
//! traits. [`services::auth::AuthService`] verifies credentials and mints a
//! bearer token through a [`token::TokenProvider`];
//! [`services::favorite::FavoriteService`] manages a member's saved station
//! pairs with ownership enforcement. The HTTP layer, database, and
//! transaction scope belong to the host application; [`store::memory`]
//! provides the test-scoped backend.

pub mod error;
pub mod model;
pub mod services;
pub mod store;
pub mod token;
