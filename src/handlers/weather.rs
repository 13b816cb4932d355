//! Weather endpoint handler.

use crate::models::{ApiError, ApiResponse};
use crate::services::{WeatherProvider, fetch_all};
use actix_web::{HttpRequest, HttpResponse, web};

/// Weather endpoint
///
/// Expects one or more repeated `city` query parameters
/// (e.g. `/?city=lahore&city=karachi`) and returns the aggregated current
/// weather for every city that could be fetched. A city whose lookup fails
/// is logged server-side and omitted from the response; the batch as a
/// whole still succeeds.
pub async fn weather(
    req: HttpRequest,
    provider: web::Data<dyn WeatherProvider>,
) -> HttpResponse {
    let cities = parse_cities(req.query_string());
    if cities.is_empty() {
        tracing::info!("rejecting request with no city parameters");
        return HttpResponse::BadRequest()
            .json(ApiError::new("At least one city parameter is required"));
    }

    let records = fetch_all(provider.into_inner(), &cities).await;
    tracing::info!(
        requested = cities.len(),
        fetched = records.len(),
        "weather batch completed"
    );

    HttpResponse::Ok().json(ApiResponse::new("Weather fetched successfully", records))
}

/// Extract the repeated `city` query values from the raw query string.
///
/// Serde-based query extraction cannot express repeated keys, so this walks
/// the pairs directly. Empty values are treated as absent.
fn parse_cities(query: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, value)| key == "city" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .collect()
}
