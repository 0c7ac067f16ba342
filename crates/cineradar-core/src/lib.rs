//! Domain model and UI-independent state machines for the CineRadar watchlist.
//!
//! Nothing in this crate performs network I/O. The api crate talks to the
//! backend, the runtime crate owns async stores, and the gui renders the
//! state machines defined here.

pub mod config;
pub mod detail;
pub mod editor;
pub mod error;
pub mod filter;
pub mod models;
pub mod prompt;
pub mod search;
pub mod shell;

pub use error::CoreError;
