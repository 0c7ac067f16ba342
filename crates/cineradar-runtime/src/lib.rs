//! Async stores shared between the UI and background tasks.
//!
//! Every store is a cheap `Clone` handle over `Arc` state, so a spawned task
//! can own one while the UI keeps another. Stores are generic over the
//! service traits in `cineradar-api`.

pub mod detail;
pub mod search;
pub mod session;
pub mod watchlist;

#[cfg(test)]
mod fakes;

use cineradar_api::ApiError;

pub use detail::load_details;
pub use search::{SearchDebouncer, SearchOutcome};
pub use session::{AuthOutcome, SessionStore};
pub use watchlist::WatchlistStore;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The mutation went through but the follow-up reload did not.
    #[error("change saved but reload failed: {0}")]
    Reload(ApiError),
}

impl RuntimeError {
    /// Whether the remote collection was changed despite the error.
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Reload(_))
    }

    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(e) => e.user_message(fallback),
            Self::Reload(_) => "Saved, but the list could not be refreshed".into(),
        }
    }
}
