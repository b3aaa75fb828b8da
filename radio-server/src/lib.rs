//! Radio station directory server.
//!
//! Serves the static web frontend and republishes the upstream
//! radio-station list behind a time-based cache.

pub mod cache;
pub mod stations;
pub mod web;
