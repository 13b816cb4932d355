//! Business logic and service layer modules.
//!
//! `weather` holds the single-city fetcher against the upstream provider;
//! `batch` holds the concurrent fan-out/fan-in over many cities.

pub mod batch;
pub mod weather;

pub use batch::*;
pub use weather::*;
