//! Service interfaces the runtime stores are generic over.
//!
//! [`crate::CineRadarClient`] implements all three against the backend;
//! tests substitute in-memory fakes.

use std::future::Future;

use cineradar_core::models::{
    CastMember, ExternalKey, ExternalMetadata, MediaDraft, MediaEntry, MediaId, MediaType,
    Suggestion, User,
};

use crate::error::ApiError;

/// Cookie-backed session endpoints.
pub trait SessionService: Send + Sync {
    /// The current user, or `None` when the session is not authenticated.
    fn check_session(&self) -> impl Future<Output = Result<Option<User>, ApiError>> + Send;

    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// The remote watchlist collection.
pub trait WatchlistService: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<MediaEntry>, ApiError>> + Send;

    fn create(&self, draft: &MediaDraft) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update(
        &self,
        id: MediaId,
        draft: &MediaDraft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(&self, id: MediaId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Third-party media database lookups, proxied by the backend.
pub trait MetadataService: Send + Sync {
    /// Title search scoped to one media type.
    fn search(
        &self,
        media_type: MediaType,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, ApiError>> + Send;

    /// Descriptive metadata. `cast` is left empty; see [`MetadataService::credits`].
    fn details(
        &self,
        key: ExternalKey,
    ) -> impl Future<Output = Result<ExternalMetadata, ApiError>> + Send;

    /// Top-billed cast.
    fn credits(
        &self,
        key: ExternalKey,
    ) -> impl Future<Output = Result<Vec<CastMember>, ApiError>> + Send;
}
