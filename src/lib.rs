//! Weather API - an HTTP front-end aggregating current weather for many cities
//!
//! Given one or more `city` query parameters, the service fetches current
//! weather data for each city from OpenWeatherMap concurrently and returns
//! the successful results in a single JSON response. A failed lookup for one
//! city is logged and dropped; it never aborts the rest of the batch.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `services/` - The single-city fetcher and the concurrent batch fetcher
//! - `config/` - Configuration structures and environment loading

// Core modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{ConfigError, ServerConfig, UpstreamConfig};
pub use handlers::{health, weather};
pub use models::{ApiError, ApiResponse, HealthResponse, WeatherRecord};
pub use services::{FetchError, WeatherProvider, WeatherService, fetch_all};
