//! HTTP API for the check-in badge engine.
//!
//! Exposes the scan pipeline (`POST /scan`) and the bare classification
//! engine (`POST /classify`) over JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassifyRequest, ScanRequest};
pub use response::{ApiError, ApiErrorResponse, ClassifyResponse, ScanResponse};
pub use state::AppState;
