//! Configuration structures and loading utilities.
//!
//! All configuration is resolved once at startup from environment variables
//! and passed explicitly into the components that need it.

pub mod server;
pub mod upstream;

pub use server::*;
pub use upstream::*;
