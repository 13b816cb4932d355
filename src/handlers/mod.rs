//! HTTP request handlers for API endpoints.

pub mod health;
pub mod weather;

pub use health::*;
pub use weather::*;
