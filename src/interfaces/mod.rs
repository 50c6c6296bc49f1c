//! Interface adapters (driving side)
//!
//! - `http`: REST API with Swagger documentation

pub mod http;
