//! Data models and schemas for the weather API.
//!
//! This module contains all the data structures used throughout the
//! application: the HTTP response envelopes and the decoded upstream
//! weather shape.

pub mod api;
pub mod weather;

pub use api::*;
pub use weather::*;
