//! Domain services called by the host application's request handlers.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and business rules; the handlers above
//! them stay focused on protocol translation and identity resolution. Each
//! service holds its collaborators behind `Arc<dyn Trait>` supplied at
//! construction.

pub mod auth;
pub mod favorite;
