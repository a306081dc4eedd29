//! HTTP API module for the Holiday Query Engine.
//!
//! This module exposes the holiday, weekend and payday queries as
//! read-only REST endpoints under `/holidays`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PaydayQuery;
pub use response::{ApiError, ApiErrorResponse, ApiResponse};
pub use state::AppState;
