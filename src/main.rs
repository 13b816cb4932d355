use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use weather_api::{
    ServerConfig, UpstreamConfig, WeatherProvider, WeatherService, health, weather,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = ServerConfig::from_env();
    let upstream_config = match UpstreamConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    let service = WeatherService::new(upstream_config);
    let provider: web::Data<dyn WeatherProvider> =
        web::Data::from(Arc::new(service) as Arc<dyn WeatherProvider>);

    tracing::info!(port = server_config.port, "starting weather-api");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(provider.clone())
            .route("/", web::get().to(weather))
            .route("/health", web::get().to(health))
    })
    .bind(server_config.bind_addr())?
    .run()
    .await
}
