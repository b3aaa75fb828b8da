//! Web layer for the radio station server.
//!
//! Routes API requests to the cached station list and everything else
//! to the static frontend.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
