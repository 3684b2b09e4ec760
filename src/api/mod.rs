//! HTTP API module for the scheduling engine.
//!
//! This module provides the REST endpoints for evaluating a single shift
//! edit and for producing a full auto-scheduled plan.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluateRequest, ScheduleRunRequest};
pub use response::ApiError;
pub use state::AppState;
