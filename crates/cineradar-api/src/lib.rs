//! HTTP access to the CineRadar backend.
//!
//! The backend owns the watchlist, the session cookie, and proxies the
//! third-party media database. [`CineRadarClient`] implements every service
//! trait against it.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::CineRadarClient;
pub use error::ApiError;
pub use traits::{MetadataService, SessionService, WatchlistService};
