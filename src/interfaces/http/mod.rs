//! HTTP REST API
//!
//! - `common`: response envelope, error mapping and `ValidatedJson`
//! - `middleware`: JWT authentication and role guards
//! - `modules`: one `dto` + `handlers` pair per business context
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
